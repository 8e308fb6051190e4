//! # Error Types
//!
//! Error types for geometry extraction. Every failure is local to the one
//! geometry being extracted: the frame assembler drops that geometry and
//! keeps going.
//!
//! ## Error Policy
//!
//! - NO reads past the storage a descriptor was built over
//! - NO substituted values when a buffer is malformed
//! - Errors carry the buffer name and the offending offsets

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while extracting one geometry snapshot.
///
/// ## Example
///
/// ```rust
/// use scan_geometry::{BufferDescriptor, ExtractError};
///
/// let storage = [0u8; 8];
/// let descriptor = BufferDescriptor::new(&storage, 1, 12).named("vertices");
/// match descriptor.read_float3(0) {
///     Err(ExtractError::OutOfBounds { buffer, .. }) => assert_eq!(buffer, "vertices"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A computed byte range would extend past the descriptor's storage.
    #[error("{buffer}: {size} bytes at offset {offset} exceed storage of {storage_len} bytes")]
    OutOfBounds {
        /// Name of the buffer being read.
        buffer: &'static str,
        /// Byte offset of the attempted read.
        offset: usize,
        /// Number of bytes the read needed.
        size: usize,
        /// Length of the backing storage.
        storage_len: usize,
    },

    /// An element index at or past the descriptor's element count.
    #[error("{buffer}: element {index} out of range for count {count}")]
    IndexOutOfRange {
        /// Name of the buffer being read.
        buffer: &'static str,
        /// Requested element index.
        index: usize,
        /// Element count of the descriptor.
        count: usize,
    },

    /// A field that does not fit inside one stride unit.
    #[error("{buffer}: field ending at byte {field_end} does not fit stride {stride}")]
    FieldExceedsStride {
        /// Name of the buffer being read.
        buffer: &'static str,
        /// End of the field relative to the start of its element.
        field_end: usize,
        /// Element stride in bytes.
        stride: usize,
    },

    /// Face buffers only carry 16-bit or 32-bit indices.
    #[error("unsupported index width: {bytes_per_index} bytes")]
    UnsupportedIndexWidth {
        /// Declared bytes per index.
        bytes_per_index: usize,
    },

    /// A normal buffer whose element count differs from the vertex buffer.
    #[error("normal count {normals} does not match vertex count {vertices}")]
    AttributeCountMismatch {
        /// Vertex element count.
        vertices: usize,
        /// Normal element count.
        normals: usize,
    },
}
