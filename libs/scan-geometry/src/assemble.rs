//! Frame assembly: anchors in, frames out.
//!
//! Failures are per anchor. A malformed anchor is logged, recorded in the
//! batch and skipped; the remaining anchors are still serialized in order.

use uuid::Uuid;

use crate::{
    extract_face, extract_mesh, ExtractError, FaceAnchor, FramePayload, MeshAnchor, SerializedFrame,
};

/// An anchor that was dropped from the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFailure {
    /// Identity of the dropped anchor.
    pub identifier: Uuid,
    /// Why extraction failed.
    pub error: ExtractError,
}

/// Result of assembling one poll's worth of anchors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBatch {
    /// Successfully serialized frames, in input order.
    pub frames: Vec<SerializedFrame>,
    /// Anchors skipped because extraction failed.
    pub failures: Vec<FrameFailure>,
}

impl FrameBatch {
    /// Creates an empty batch sized for `anchor_count` frames.
    pub fn with_capacity(anchor_count: usize) -> Self {
        Self {
            frames: Vec::with_capacity(anchor_count),
            failures: Vec::new(),
        }
    }

    /// Returns true if no frame was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drops the failure report and wraps the frames for the transport.
    pub fn into_payload(self) -> FramePayload {
        FramePayload::from(self.frames)
    }
}

/// Serializes every mesh anchor, skipping the ones that fail.
///
/// # Examples
/// ```
/// use scan_geometry::assemble_mesh_frames;
/// let batch = assemble_mesh_frames(&[]);
/// assert!(batch.frames.is_empty());
/// assert!(batch.failures.is_empty());
/// ```
pub fn assemble_mesh_frames(anchors: &[MeshAnchor<'_>]) -> FrameBatch {
    let mut batch = FrameBatch::with_capacity(anchors.len());

    for anchor in anchors {
        match extract_mesh(anchor) {
            Ok(frame) => batch.frames.push(frame),
            Err(error) => {
                log::warn!("dropping mesh anchor {} from frame: {error}", anchor.identifier);
                batch.failures.push(FrameFailure {
                    identifier: anchor.identifier,
                    error,
                });
            }
        }
    }

    log::debug!(
        "assembled {} mesh frames ({} dropped)",
        batch.frames.len(),
        batch.failures.len()
    );
    batch
}

/// Serializes the tracked face, if any.
///
/// Face tracking follows at most one face, so the batch holds zero or one
/// frame and never any failures.
pub fn assemble_face_frames(anchor: Option<&FaceAnchor>) -> FrameBatch {
    FrameBatch {
        frames: anchor.map(extract_face).into_iter().collect(),
        failures: Vec::new(),
    }
}
