//! Face-tracking geometry extraction.

use config::constants::{CLASSIFICATION_NONE, FLOAT3_COMPONENT_COUNT, TRIANGLE_INDEX_COUNT};

use crate::{encode_transform, FaceAnchor, SerializedFrame};

/// Flattens a face anchor into a [`SerializedFrame`].
///
/// Face geometry has no normals and no semantic labels: normals are
/// zero-filled to the vertex length and classification is always
/// [`CLASSIFICATION_NONE`], keeping the record shape identical to mesh
/// frames. Indices come from an owned collection, so this cannot fail.
///
/// # Examples
/// ```
/// use glam::{Mat4, Vec3};
/// use scan_geometry::{extract_face, FaceAnchor, FaceGeometry};
/// use uuid::Uuid;
///
/// let anchor = FaceAnchor {
///     identifier: Uuid::nil(),
///     transform: Mat4::IDENTITY,
///     geometry: FaceGeometry {
///         vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
///         triangles: vec![[0, 1, 2]],
///     },
/// };
/// let frame = extract_face(&anchor);
/// assert_eq!(frame.normals(), &[0.0; 9]);
/// assert_eq!(frame.faces(), &[0, 1, 2]);
/// ```
pub fn extract_face(anchor: &FaceAnchor) -> SerializedFrame {
    let geometry = &anchor.geometry;

    let mut vertices = Vec::with_capacity(geometry.vertex_count() * FLOAT3_COMPONENT_COUNT);
    for vertex in &geometry.vertices {
        vertices.extend_from_slice(&vertex.to_array());
    }

    let normals = vec![0.0; vertices.len()];

    let mut faces = Vec::with_capacity(geometry.triangle_count() * TRIANGLE_INDEX_COUNT);
    for triangle in &geometry.triangles {
        faces.extend(triangle.iter().copied().map(u32::from));
    }

    SerializedFrame::new(
        &anchor.identifier,
        encode_transform(&anchor.transform),
        vertices,
        normals,
        faces,
        CLASSIFICATION_NONE,
    )
}
