//! Mesh geometry extraction over strided, borrowed buffers.

use config::constants::{CLASSIFICATION_NONE, FLOAT3_COMPONENT_COUNT};

use crate::buffer::{BufferDescriptor, FaceBuffer};
use crate::{encode_transform, ExtractError, MeshAnchor, SerializedFrame};

const FLOAT3_BYTES: usize = FLOAT3_COMPONENT_COUNT * std::mem::size_of::<f32>();

/// Flattens one mesh anchor into a [`SerializedFrame`].
///
/// Missing normals are replaced by zeros of the same length as the vertices.
///
/// # Errors
/// Any buffer that is malformed or undersized fails the whole anchor; no
/// partial frame is produced.
pub fn extract_mesh(anchor: &MeshAnchor<'_>) -> Result<SerializedFrame, ExtractError> {
    let geometry = &anchor.geometry;

    let vertices = extract_vertices(&geometry.vertices)?;
    let normals = match &geometry.normals {
        Some(descriptor) => {
            if descriptor.count() != geometry.vertices.count() {
                return Err(ExtractError::AttributeCountMismatch {
                    vertices: geometry.vertices.count(),
                    normals: descriptor.count(),
                });
            }
            extract_normals(descriptor)?
        }
        None => vec![0.0; vertices.len()],
    };
    let faces = extract_faces(&geometry.faces)?;
    let classification = extract_classification(geometry.classification.as_ref())?;

    Ok(SerializedFrame::new(
        &anchor.identifier,
        encode_transform(&anchor.transform),
        vertices,
        normals,
        faces,
        classification,
    ))
}

/// Reads every vertex position, `3 * count` values in vertex-major order.
///
/// # Errors
/// See [`BufferDescriptor::read`].
///
/// # Examples
/// ```
/// use scan_geometry::{extract_vertices, BufferDescriptor};
///
/// let storage: Vec<u8> = [1.0f32, 2.0, 3.0]
///     .iter()
///     .flat_map(|v| v.to_ne_bytes())
///     .collect();
/// let flat = extract_vertices(&BufferDescriptor::new(&storage, 1, 12)).unwrap();
/// assert_eq!(flat, vec![1.0, 2.0, 3.0]);
/// ```
pub fn extract_vertices(descriptor: &BufferDescriptor<'_>) -> Result<Vec<f32>, ExtractError> {
    extract_float3(&descriptor.named("vertices"))
}

/// Reads every normal, same layout as [`extract_vertices`].
///
/// # Errors
/// See [`BufferDescriptor::read`].
pub fn extract_normals(descriptor: &BufferDescriptor<'_>) -> Result<Vec<f32>, ExtractError> {
    extract_float3(&descriptor.named("normals"))
}

fn extract_float3(descriptor: &BufferDescriptor<'_>) -> Result<Vec<f32>, ExtractError> {
    if descriptor.is_empty() {
        return Ok(Vec::new());
    }
    descriptor.validate_field(FLOAT3_BYTES)?;
    descriptor.validate()?;

    let mut result = Vec::with_capacity(descriptor.count() * FLOAT3_COMPONENT_COUNT);
    for index in 0..descriptor.count() {
        result.extend_from_slice(&descriptor.read_float3(index)?);
    }
    Ok(result)
}

/// Reads every primitive index, widened to `u32`.
///
/// Output length is `face_count * index_count_per_primitive`.
///
/// # Errors
/// [`ExtractError::UnsupportedIndexWidth`] for widths other than 2 or 4
/// bytes, otherwise see [`BufferDescriptor::read`].
pub fn extract_faces(faces: &FaceBuffer<'_>) -> Result<Vec<u32>, ExtractError> {
    faces.index_width()?;
    faces.descriptor().validate()?;

    let mut result = Vec::with_capacity(faces.index_count());
    for face in 0..faces.face_count() {
        for corner in 0..faces.index_count_per_primitive() {
            result.push(faces.read_index(face, corner)?);
        }
    }
    Ok(result)
}

/// Reads the dominant classification of a mesh.
///
/// Only the first face's label is used; a missing or empty buffer yields
/// [`CLASSIFICATION_NONE`]. Consumers rely on this single value, so no
/// per-face labels or vote are produced.
///
/// # Errors
/// See [`BufferDescriptor::read`].
///
/// # Examples
/// ```
/// use scan_geometry::{extract_classification, BufferDescriptor};
///
/// assert_eq!(extract_classification(None).unwrap(), 0);
/// let labels = [4u8, 1, 1];
/// let descriptor = BufferDescriptor::packed::<u8>(&labels);
/// assert_eq!(extract_classification(Some(&descriptor)).unwrap(), 4);
/// ```
pub fn extract_classification(
    descriptor: Option<&BufferDescriptor<'_>>,
) -> Result<u8, ExtractError> {
    let Some(descriptor) = descriptor else {
        return Ok(CLASSIFICATION_NONE);
    };
    if descriptor.is_empty() {
        return Ok(CLASSIFICATION_NONE);
    }

    let descriptor = descriptor.named("classification");
    descriptor.validate()?;
    descriptor.read::<u8>(0, 0)
}
