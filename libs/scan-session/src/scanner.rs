//! The scanner contract shared by both scanning modes.

use scan_geometry::FrameBatch;

use crate::{ScanError, ScanMode};

/// Lifecycle state of a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScannerState {
    /// No session running; polls return nothing.
    #[default]
    Idle,
    /// Session running; polls return the latest geometry.
    Running,
}

/// A scanning mode bound to its capture session.
///
/// Two implementations exist: [`DepthMeshScanner`](crate::DepthMeshScanner)
/// and [`FaceDepthScanner`](crate::FaceDepthScanner).
pub trait Scanner {
    /// Which mode this scanner runs.
    fn mode(&self) -> ScanMode;

    /// Whether the device can run this mode. Does not start a session.
    fn is_supported(&self) -> bool;

    /// Starts the session. Starting a running scanner restarts it.
    ///
    /// # Errors
    /// [`ScanError::UnsupportedCapability`] if the device cannot run the mode.
    fn start(&mut self) -> Result<(), ScanError>;

    /// Stops the session. Subsequent polls return an empty batch.
    fn stop(&mut self);

    /// Current lifecycle state.
    fn state(&self) -> ScannerState;

    /// Returns true while the session is running.
    fn is_running(&self) -> bool {
        self.state() == ScannerState::Running
    }

    /// Serializes the current geometry. Never blocks.
    fn current_frames(&self) -> FrameBatch;
}
