//! # Scan Geometry
//!
//! Geometry serialization layer for live 3D scanning.
//! Converts tracked anchors from a capture session into flat, owned records
//! that can cross a process or runtime boundary at video rate.
//!
//! ## Architecture
//!
//! ```text
//! MeshAnchor<'a> ──► BufferDescriptor / FaceBuffer reads ──┐
//!                                                           ├──► SerializedFrame
//! FaceAnchor ──────► native vertex/triangle iteration ──────┘
//!                         encode_transform (column-major f64)
//! ```
//!
//! ## Guarantees
//!
//! - Every read from session-owned memory is bounds-checked first
//! - `vertices.len() == normals.len()` in every frame
//! - 16-bit and 32-bit index buffers produce identical `u32` output
//! - A malformed anchor drops only its own frame
//!
//! ## Usage
//!
//! ```rust
//! use glam::Mat4;
//! use scan_geometry::{
//!     assemble_mesh_frames, BufferDescriptor, FaceBuffer, MeshAnchor, MeshGeometry,
//! };
//! use uuid::Uuid;
//!
//! let positions: Vec<u8> = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
//!     .iter()
//!     .flat_map(|v| v.to_ne_bytes())
//!     .collect();
//! let indices: Vec<u8> = [0u16, 1, 2].iter().flat_map(|i| i.to_ne_bytes()).collect();
//!
//! let anchor = MeshAnchor {
//!     identifier: Uuid::new_v4(),
//!     transform: Mat4::IDENTITY,
//!     geometry: MeshGeometry {
//!         vertices: BufferDescriptor::new(&positions, 3, 12),
//!         normals: None,
//!         faces: FaceBuffer::new(&indices, 1, 3, 2),
//!         classification: None,
//!     },
//! };
//!
//! let batch = assemble_mesh_frames(&[anchor]);
//! assert_eq!(batch.frames[0].faces(), &[0, 1, 2]);
//! assert_eq!(batch.frames[0].normals().len(), 9);
//! ```

pub mod anchor;
pub mod assemble;
pub mod buffer;
pub mod classification;
pub mod error;
pub mod extract;
pub mod frame;
pub mod transform;

pub use anchor::{FaceAnchor, FaceGeometry, MeshAnchor, MeshGeometry};
pub use assemble::{assemble_face_frames, assemble_mesh_frames, FrameBatch, FrameFailure};
pub use buffer::{BufferDescriptor, FaceBuffer, IndexWidth, Scalar};
pub use classification::SurfaceClassification;
pub use error::ExtractError;
pub use extract::{
    extract_classification, extract_face, extract_faces, extract_mesh, extract_normals,
    extract_vertices,
};
pub use frame::{FramePayload, SerializedFrame};
pub use transform::{decode_transform, encode_transform};
