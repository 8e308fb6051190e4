//! # Anchor Snapshots
//!
//! Read-only views over one instant of tracked geometry, as handed over by
//! the capture session.
//!
//! A [`MeshAnchor`] borrows its buffers from the session for the duration of
//! one poll; the extractors copy everything into owned output before the
//! borrow ends. A [`FaceAnchor`] is owned outright because it is parked in
//! the face scanner's slot between the session callback and the next poll.

use glam::{Mat4, Vec3};
use uuid::Uuid;

use crate::buffer::{BufferDescriptor, FaceBuffer};

/// Reconstructed surface geometry attached to one mesh anchor.
#[derive(Debug, Clone, Copy)]
pub struct MeshGeometry<'a> {
    /// Vertex positions, float3 at offsets `{0, 4, 8}`.
    pub vertices: BufferDescriptor<'a>,
    /// Per-vertex normals, same layout as the positions. Absent for some
    /// geometry kinds; zero normals are synthesized in that case.
    pub normals: Option<BufferDescriptor<'a>>,
    /// Primitive indices.
    pub faces: FaceBuffer<'a>,
    /// One byte of semantic label per face, if reconstruction classifies.
    pub classification: Option<BufferDescriptor<'a>>,
}

/// A tracked mesh chunk from depth-sensor reconstruction.
///
/// # Examples
/// ```
/// use glam::Mat4;
/// use scan_geometry::{BufferDescriptor, FaceBuffer, MeshAnchor, MeshGeometry};
/// use uuid::Uuid;
///
/// let empty: [u8; 0] = [];
/// let anchor = MeshAnchor {
///     identifier: Uuid::nil(),
///     transform: Mat4::IDENTITY,
///     geometry: MeshGeometry {
///         vertices: BufferDescriptor::new(&empty, 0, 12),
///         normals: None,
///         faces: FaceBuffer::new(&empty, 0, 3, 4),
///         classification: None,
///     },
/// };
/// assert_eq!(anchor.geometry.vertices.count(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MeshAnchor<'a> {
    /// Stable anchor identity.
    pub identifier: Uuid,
    /// Anchor-to-world transform.
    pub transform: Mat4,
    /// Borrowed geometry buffers.
    pub geometry: MeshGeometry<'a>,
}

/// Face-tracking geometry: positions and triangles, nothing else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceGeometry {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangle corner indices into `vertices`.
    pub triangles: Vec<[u16; 3]>,
}

impl FaceGeometry {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// A tracked face from the front-facing depth sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceAnchor {
    /// Stable anchor identity.
    pub identifier: Uuid,
    /// Anchor-to-world transform.
    pub transform: Mat4,
    /// Owned face geometry.
    pub geometry: FaceGeometry,
}
