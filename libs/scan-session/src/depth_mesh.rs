//! Depth-sensor mesh scanner.

use scan_geometry::{assemble_mesh_frames, FrameBatch};

use crate::session::{MeshCaptureSession, ReconstructionMode, WorldTrackingConfig};
use crate::{ScanError, ScanMode, Scanner, ScannerState};

/// Scanner that serializes every reconstructed mesh anchor on each poll.
///
/// While running, the capture session keeps its own anchor set up to date;
/// [`current_frames`](Scanner::current_frames) serializes whatever that set
/// holds at poll time.
#[derive(Debug)]
pub struct DepthMeshScanner<S> {
    session: S,
    enable_classification: bool,
    state: ScannerState,
    reconstruction: Option<ReconstructionMode>,
}

impl<S: MeshCaptureSession> DepthMeshScanner<S> {
    /// Wraps `session`; classification is requested by default.
    pub fn new(session: S) -> Self {
        Self {
            session,
            enable_classification: true,
            state: ScannerState::Idle,
            reconstruction: None,
        }
    }

    /// Enables or disables per-face labels for the next start.
    pub fn configure(&mut self, enable_classification: bool) {
        self.enable_classification = enable_classification;
    }

    /// Reconstruction level picked by the last successful start.
    pub fn reconstruction(&self) -> Option<ReconstructionMode> {
        self.reconstruction
    }

    /// The wrapped session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Mutable access to the wrapped session.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Best reconstruction level the device offers for the current settings.
    fn select_reconstruction(&self) -> Option<ReconstructionMode> {
        if self.enable_classification
            && self
                .session
                .supports_reconstruction(ReconstructionMode::MeshWithClassification)
        {
            Some(ReconstructionMode::MeshWithClassification)
        } else if self.session.supports_reconstruction(ReconstructionMode::Mesh) {
            Some(ReconstructionMode::Mesh)
        } else {
            None
        }
    }
}

impl<S: MeshCaptureSession> Scanner for DepthMeshScanner<S> {
    fn mode(&self) -> ScanMode {
        ScanMode::DepthMesh
    }

    fn is_supported(&self) -> bool {
        self.session.supports_reconstruction(ReconstructionMode::Mesh)
    }

    fn start(&mut self) -> Result<(), ScanError> {
        self.stop();

        let scene_reconstruction = self
            .select_reconstruction()
            .ok_or(ScanError::UnsupportedCapability {
                mode: ScanMode::DepthMesh,
            })?;
        let config = WorldTrackingConfig {
            scene_reconstruction,
            environment_texturing: true,
        };

        self.session.run(&config);
        self.reconstruction = Some(scene_reconstruction);
        self.state = ScannerState::Running;
        log::info!("depth mesh scanner started ({scene_reconstruction:?})");
        Ok(())
    }

    fn stop(&mut self) {
        if self.state == ScannerState::Running {
            self.state = ScannerState::Idle;
            self.session.pause();
            log::info!("depth mesh scanner stopped");
        }
    }

    fn state(&self) -> ScannerState {
        self.state
    }

    fn current_frames(&self) -> FrameBatch {
        if self.state != ScannerState::Running {
            return FrameBatch::default();
        }
        assemble_mesh_frames(&self.session.mesh_anchors())
    }
}
