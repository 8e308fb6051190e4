//! Front-facing depth scanner.

use std::sync::Arc;

use config::constants::MAX_TRACKED_FACES;
use scan_geometry::{assemble_face_frames, FrameBatch};

use crate::session::{FaceCaptureSession, FaceTrackingConfig};
use crate::{FaceAnchorSlot, FaceAnchorUpdates, ScanError, ScanMode, Scanner, ScannerState};

/// Scanner that serializes the single most recent tracked face.
///
/// The session pushes updates through the handle returned by
/// [`updates`](Self::updates); polls read the slot those updates fill.
#[derive(Debug)]
pub struct FaceDepthScanner<S> {
    session: S,
    slot: Arc<FaceAnchorSlot>,
    state: ScannerState,
}

impl<S: FaceCaptureSession> FaceDepthScanner<S> {
    /// Wraps `session` with an empty, closed slot.
    pub fn new(session: S) -> Self {
        Self {
            session,
            slot: Arc::new(FaceAnchorSlot::default()),
            state: ScannerState::Idle,
        }
    }

    /// Handle for the session's anchor-update callback.
    pub fn updates(&self) -> FaceAnchorUpdates {
        FaceAnchorUpdates::new(Arc::clone(&self.slot))
    }

    /// The wrapped session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Mutable access to the wrapped session.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S: FaceCaptureSession> Scanner for FaceDepthScanner<S> {
    fn mode(&self) -> ScanMode {
        ScanMode::FaceDepth
    }

    fn is_supported(&self) -> bool {
        self.session.supports_face_tracking()
    }

    fn start(&mut self) -> Result<(), ScanError> {
        self.stop();

        if !self.session.supports_face_tracking() {
            return Err(ScanError::UnsupportedCapability {
                mode: ScanMode::FaceDepth,
            });
        }

        self.slot.open();
        self.session.run(&FaceTrackingConfig {
            maximum_tracked_faces: MAX_TRACKED_FACES,
        });
        self.state = ScannerState::Running;
        log::info!("face depth scanner started");
        Ok(())
    }

    fn stop(&mut self) {
        if self.state == ScannerState::Running {
            // Close first so a late callback cannot refill the slot
            self.state = ScannerState::Idle;
            self.slot.close();
            self.session.pause();
            log::info!("face depth scanner stopped");
        }
    }

    fn state(&self) -> ScannerState {
        self.state
    }

    fn current_frames(&self) -> FrameBatch {
        if self.state != ScannerState::Running {
            return FrameBatch::default();
        }
        assemble_face_frames(self.slot.latest().as_deref())
    }
}
