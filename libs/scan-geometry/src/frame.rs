//! # Serialized Frames
//!
//! Owned, immutable per-anchor records in the transport layout.
//!
//! ## Wire Layout
//!
//! | Field | Type | Length |
//! |---|---|---|
//! | `identifier` | UTF-8 text | uppercase hyphenated UUID |
//! | `transform` | `f64` | 16, column-major |
//! | `vertices` | `f32` | `3 * vertex_count` |
//! | `normals` | `f32` | same as `vertices` |
//! | `faces` | `u32` | `primitive_count * indices_per_primitive` |
//! | `classification` | integer | 1 |

use config::constants::{FLOAT3_COMPONENT_COUNT, TRANSFORM_ELEMENT_COUNT};
use serde::Serialize;
use uuid::Uuid;

use crate::SurfaceClassification;

/// Renders an anchor identity the way existing consumers expect it.
///
/// # Examples
/// ```
/// use scan_geometry::frame::render_identifier;
/// use uuid::Uuid;
///
/// let id = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
/// assert_eq!(render_identifier(&id), "01234567-89AB-CDEF-0123-456789ABCDEF");
/// ```
pub fn render_identifier(identifier: &Uuid) -> String {
    identifier
        .hyphenated()
        .encode_upper(&mut Uuid::encode_buffer())
        .to_owned()
}

/// One anchor's geometry in flat transport form.
///
/// Frames are only built by the extractors, which guarantee
/// `vertices().len() == normals().len()` and a whole number of primitives in
/// `faces()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializedFrame {
    identifier: String,
    transform: [f64; TRANSFORM_ELEMENT_COUNT],
    vertices: Vec<f32>,
    normals: Vec<f32>,
    faces: Vec<u32>,
    classification: u8,
}

impl SerializedFrame {
    pub(crate) fn new(
        identifier: &Uuid,
        transform: [f64; TRANSFORM_ELEMENT_COUNT],
        vertices: Vec<f32>,
        normals: Vec<f32>,
        faces: Vec<u32>,
        classification: u8,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        Self {
            identifier: render_identifier(identifier),
            transform,
            vertices,
            normals,
            faces,
            classification,
        }
    }

    /// Uppercase hyphenated anchor identity.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Column-major transform.
    pub fn transform(&self) -> &[f64; TRANSFORM_ELEMENT_COUNT] {
        &self.transform
    }

    /// Flat positions `[x0, y0, z0, x1, ...]`.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Flat normals, zero-filled when the source had none.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flat primitive indices.
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Raw dominant classification value.
    pub fn classification(&self) -> u8 {
        self.classification
    }

    /// Named dominant classification.
    pub fn surface(&self) -> SurfaceClassification {
        SurfaceClassification::from(self.classification)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOAT3_COMPONENT_COUNT
    }

    /// Returns true if the frame carries no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// The record handed to the transport per poll: `{"anchors": [...]}`.
///
/// # Examples
/// ```
/// use scan_geometry::FramePayload;
/// let payload = FramePayload::default();
/// assert!(payload.anchors.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FramePayload {
    /// Frames in capture order.
    pub anchors: Vec<SerializedFrame>,
}

impl From<Vec<SerializedFrame>> for FramePayload {
    fn from(anchors: Vec<SerializedFrame>) -> Self {
        Self { anchors }
    }
}
