//! # Scan Session
//!
//! Scanner lifecycle on top of an external capture session.
//!
//! ## Architecture
//!
//! ```text
//! MeshCaptureSession ──► DepthMeshScanner ──┐
//!                                           ├──► dyn Scanner ──► ScanController
//! FaceCaptureSession ──► FaceDepthScanner ──┘        │
//!        │ did_update                                │ current_frames
//!        ▼                                           ▼
//!  FaceAnchorSlot (single-slot replace)        scan_geometry frames
//! ```
//!
//! ## Polling Model
//!
//! The core never spawns threads or timers. A host timer calls
//! [`ScanController::tick`] at [`ScanController::poll_interval`], clamped to
//! `[1, 30]` Hz. Stopping a scanner takes effect before the next poll, which
//! then returns an empty payload.

pub mod controller;
pub mod depth_mesh;
pub mod error;
pub mod face_depth;
pub mod options;
pub mod scanner;
pub mod session;
pub mod slot;

pub use controller::{FrameSink, ScanController, ScannerFactory};
pub use depth_mesh::DepthMeshScanner;
pub use error::ScanError;
pub use face_depth::FaceDepthScanner;
pub use options::{ScanMode, ScanOptions};
pub use scanner::{Scanner, ScannerState};
pub use session::{
    FaceCaptureSession, FaceTrackingConfig, MeshCaptureSession, ReconstructionMode, SessionAnchor,
    WorldTrackingConfig,
};
pub use slot::{FaceAnchorSlot, FaceAnchorUpdates};
