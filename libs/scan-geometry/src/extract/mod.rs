//! Geometry extractors.
//!
//! Both extractors produce the same record shape so consumers never branch
//! on the scanning mode:
//!
//! - [`mesh`]: strided buffers from depth-sensor reconstruction
//! - [`face`]: native vertex/triangle collections from face tracking, with
//!   synthesized zero normals and no classification

pub mod face;
pub mod mesh;

pub use face::extract_face;
pub use mesh::{
    extract_classification, extract_faces, extract_mesh, extract_normals, extract_vertices,
};
