//! Capture session contracts.
//!
//! The device session is an external collaborator. These traits are the
//! whole surface the scanners need from it: capability queries that work
//! without a running session, run/pause, and a way to get at the tracked
//! anchors.

use scan_geometry::{FaceAnchor, MeshAnchor};
use uuid::Uuid;

/// Scene reconstruction level requested from a world-tracking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconstructionMode {
    /// Mesh chunks without semantic labels.
    Mesh,
    /// Mesh chunks with one label per face.
    MeshWithClassification,
}

/// Configuration passed to [`MeshCaptureSession::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldTrackingConfig {
    /// Reconstruction level.
    pub scene_reconstruction: ReconstructionMode,
    /// Let the session generate environment textures automatically.
    pub environment_texturing: bool,
}

/// Configuration passed to [`FaceCaptureSession::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTrackingConfig {
    /// Upper bound on simultaneously tracked faces.
    pub maximum_tracked_faces: usize,
}

/// World-tracking session that reconstructs mesh anchors.
pub trait MeshCaptureSession {
    /// Whether the device can reconstruct at `mode`.
    fn supports_reconstruction(&self, mode: ReconstructionMode) -> bool;

    /// Starts or restarts the session.
    fn run(&mut self, config: &WorldTrackingConfig);

    /// Pauses the session. Anchors must not be queried afterwards.
    fn pause(&mut self);

    /// The current mesh anchors, borrowing session-owned buffers.
    ///
    /// Must not block; returns the state of the most recent frame.
    fn mesh_anchors(&self) -> Vec<MeshAnchor<'_>>;
}

/// Face-tracking session that reports anchors through a callback.
///
/// The session delivers updates to the
/// [`FaceAnchorUpdates`](crate::FaceAnchorUpdates) handle obtained from the
/// scanner.
pub trait FaceCaptureSession {
    /// Whether the device has a front-facing depth sensor.
    fn supports_face_tracking(&self) -> bool;

    /// Starts or restarts the session.
    fn run(&mut self, config: &FaceTrackingConfig);

    /// Pauses the session.
    fn pause(&mut self);
}

/// An anchor reported by a session update callback.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAnchor {
    /// A tracked face with its geometry.
    Face(FaceAnchor),
    /// Any other anchor kind; ignored by the face scanner.
    Other(Uuid),
}
