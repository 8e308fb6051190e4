//! Single-slot hand-off of the latest tracked face.
//!
//! The session callback replaces the slot; the poll path reads it. The
//! anchor is stored behind an `Arc` and swapped as a whole under the lock,
//! so a reader holds either the previous anchor or the new one, never a mix.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scan_geometry::FaceAnchor;

use crate::SessionAnchor;

#[derive(Debug, Default)]
struct SlotState {
    accepting: bool,
    latest: Option<Arc<FaceAnchor>>,
}

/// Latest-face slot shared between the session callback and the poll.
///
/// # Examples
/// ```
/// use glam::Mat4;
/// use scan_geometry::{FaceAnchor, FaceGeometry};
/// use scan_session::FaceAnchorSlot;
/// use uuid::Uuid;
///
/// let slot = FaceAnchorSlot::default();
/// slot.open();
/// slot.replace(FaceAnchor {
///     identifier: Uuid::nil(),
///     transform: Mat4::IDENTITY,
///     geometry: FaceGeometry::default(),
/// });
/// assert!(slot.latest().is_some());
/// slot.close();
/// assert!(slot.latest().is_none());
/// ```
#[derive(Debug, Default)]
pub struct FaceAnchorSlot {
    state: Mutex<SlotState>,
}

impl FaceAnchorSlot {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        // No invariant spans both fields, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Empties the slot and starts accepting updates.
    pub fn open(&self) {
        let mut state = self.lock();
        state.accepting = true;
        state.latest = None;
    }

    /// Empties the slot and ignores further updates.
    pub fn close(&self) {
        let mut state = self.lock();
        state.accepting = false;
        state.latest = None;
    }

    /// Replaces the stored anchor. Ignored while closed.
    pub fn replace(&self, anchor: FaceAnchor) {
        let anchor = Arc::new(anchor);
        let mut state = self.lock();
        if state.accepting {
            state.latest = Some(anchor);
        }
    }

    /// The most recent anchor, if any.
    pub fn latest(&self) -> Option<Arc<FaceAnchor>> {
        self.lock().latest.clone()
    }
}

/// Handle given to the face session's update callback.
#[derive(Debug, Clone)]
pub struct FaceAnchorUpdates {
    slot: Arc<FaceAnchorSlot>,
}

impl FaceAnchorUpdates {
    pub(crate) fn new(slot: Arc<FaceAnchorSlot>) -> Self {
        Self { slot }
    }

    /// Session callback: the last face among `anchors` becomes the latest.
    pub fn did_update<I>(&self, anchors: I)
    where
        I: IntoIterator<Item = SessionAnchor>,
    {
        let face = anchors
            .into_iter()
            .filter_map(|anchor| match anchor {
                SessionAnchor::Face(face) => Some(face),
                SessionAnchor::Other(_) => None,
            })
            .last();
        if let Some(face) = face {
            self.slot.replace(face);
        }
    }
}
