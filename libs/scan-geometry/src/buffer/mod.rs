//! Bounds-checked reads over strided geometry buffers.
//!
//! Native geometry arrives as byte storage owned by the capture session plus
//! layout metadata: element count, stride and per-field offsets. Every typed
//! read in the crate goes through [`BufferDescriptor::read`], which checks the
//! full byte range against the storage before touching it.

use bytemuck::Pod;
use config::constants::FLOAT3_COMPONENT_OFFSETS;

use crate::ExtractError;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Fixed-width scalar that can be read out of a geometry buffer.
///
/// Implemented for `f32`, `u8`, `u16` and `u32`.
pub trait Scalar: Pod + sealed::Sealed {}

impl Scalar for f32 {}
impl Scalar for u8 {}
impl Scalar for u16 {}
impl Scalar for u32 {}

/// Layout description of a homogeneous array view over borrowed storage.
///
/// Element `i` starts at byte `i * stride`. The described attribute sits at
/// [`offset`](Self::offset) bytes into each stride unit, and fields inside
/// the attribute are addressed relative to that. The stride may be larger
/// than the attribute (padded or interleaved buffers).
///
/// # Examples
/// ```
/// use scan_geometry::BufferDescriptor;
///
/// // Two float3 elements padded to 16 bytes each
/// let mut storage = vec![0u8; 32];
/// storage[16..20].copy_from_slice(&2.5f32.to_ne_bytes());
/// let descriptor = BufferDescriptor::new(&storage, 2, 16);
/// assert_eq!(descriptor.read::<f32>(1, 0).unwrap(), 2.5);
/// ```
///
/// Interleaved position/normal data shares one storage:
/// ```
/// use scan_geometry::BufferDescriptor;
///
/// let values = [0.0f32, 0.0, 0.0, 0.0, 0.0, 1.0];
/// let storage: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
/// let normals = BufferDescriptor::new(&storage, 1, 24).with_offset(12);
/// assert_eq!(normals.read_float3(0).unwrap(), [0.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BufferDescriptor<'a> {
    storage: &'a [u8],
    count: usize,
    stride: usize,
    offset: usize,
    name: &'static str,
}

impl<'a> BufferDescriptor<'a> {
    /// Describes `count` elements of `stride` bytes over `storage`.
    ///
    /// Construction never fails; use [`validate`](Self::validate) to check
    /// the layout against the storage length.
    pub fn new(storage: &'a [u8], count: usize, stride: usize) -> Self {
        Self {
            storage,
            count,
            stride,
            offset: 0,
            name: "buffer",
        }
    }

    /// Describes a tightly packed array of `T`.
    ///
    /// # Examples
    /// ```
    /// use scan_geometry::BufferDescriptor;
    /// let storage = [7u8, 9, 11];
    /// let descriptor = BufferDescriptor::packed::<u8>(&storage);
    /// assert_eq!(descriptor.count(), 3);
    /// assert_eq!(descriptor.read::<u8>(2, 0).unwrap(), 11);
    /// ```
    pub fn packed<T: Scalar>(storage: &'a [u8]) -> Self {
        let stride = std::mem::size_of::<T>();
        Self::new(storage, storage.len() / stride, stride)
    }

    /// Returns a copy labelled with `name` for error reporting.
    pub fn named(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    /// Returns a copy whose attribute starts `offset` bytes into each
    /// stride unit.
    pub fn with_offset(self, offset: usize) -> Self {
        Self { offset, ..self }
    }

    /// Number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Byte distance between consecutive elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of the attribute within one stride unit.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the descriptor has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Name used in error messages.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Checks that `count * stride` fits in the storage.
    ///
    /// # Errors
    /// Returns [`ExtractError::OutOfBounds`] for an undersized storage.
    ///
    /// # Examples
    /// ```
    /// use scan_geometry::BufferDescriptor;
    /// let storage = [0u8; 20];
    /// assert!(BufferDescriptor::new(&storage, 2, 10).validate().is_ok());
    /// assert!(BufferDescriptor::new(&storage, 3, 10).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ExtractError> {
        match self.count.checked_mul(self.stride) {
            Some(required) if required <= self.storage.len() => Ok(()),
            required => Err(ExtractError::OutOfBounds {
                buffer: self.name,
                offset: 0,
                size: required.unwrap_or(usize::MAX),
                storage_len: self.storage.len(),
            }),
        }
    }

    /// Checks that a field ending `field_end` bytes into the attribute fits
    /// in one stride unit.
    ///
    /// # Errors
    /// Returns [`ExtractError::FieldExceedsStride`] otherwise.
    pub fn validate_field(&self, field_end: usize) -> Result<(), ExtractError> {
        let field_end = self.offset.saturating_add(field_end);
        if field_end > self.stride {
            return Err(ExtractError::FieldExceedsStride {
                buffer: self.name,
                field_end,
                stride: self.stride,
            });
        }
        Ok(())
    }

    /// Reads one scalar at `index * stride + offset + field_offset`.
    ///
    /// # Errors
    /// - [`ExtractError::IndexOutOfRange`] if `index >= count`
    /// - [`ExtractError::OutOfBounds`] if the scalar's bytes are not all
    ///   inside the storage
    pub fn read<T: Scalar>(&self, index: usize, field_offset: usize) -> Result<T, ExtractError> {
        if index >= self.count {
            return Err(ExtractError::IndexOutOfRange {
                buffer: self.name,
                index,
                count: self.count,
            });
        }

        let size = std::mem::size_of::<T>();
        let out_of_bounds = |offset: usize| ExtractError::OutOfBounds {
            buffer: self.name,
            offset,
            size,
            storage_len: self.storage.len(),
        };

        let offset = index
            .checked_mul(self.stride)
            .and_then(|base| base.checked_add(self.offset))
            .and_then(|base| base.checked_add(field_offset))
            .ok_or_else(|| out_of_bounds(usize::MAX))?;
        let end = offset
            .checked_add(size)
            .ok_or_else(|| out_of_bounds(offset))?;
        let bytes = self
            .storage
            .get(offset..end)
            .ok_or_else(|| out_of_bounds(offset))?;

        // Storage carries no alignment guarantee
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Reads the three `f32` components packed at offsets `{0, 4, 8}`.
    ///
    /// # Errors
    /// Same as [`read`](Self::read).
    pub fn read_float3(&self, index: usize) -> Result<[f32; 3], ExtractError> {
        let [x, y, z] = FLOAT3_COMPONENT_OFFSETS;
        Ok([
            self.read::<f32>(index, x)?,
            self.read::<f32>(index, y)?,
            self.read::<f32>(index, z)?,
        ])
    }
}

/// Width of one index in a face buffer.
///
/// # Examples
/// ```
/// use scan_geometry::IndexWidth;
/// assert_eq!(IndexWidth::try_from(2).unwrap(), IndexWidth::U16);
/// assert!(IndexWidth::try_from(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexWidth {
    /// 2-byte unsigned indices.
    U16,
    /// 4-byte unsigned indices.
    U32,
}

impl IndexWidth {
    /// Size of one index in bytes.
    pub fn bytes(self) -> usize {
        match self {
            IndexWidth::U16 => 2,
            IndexWidth::U32 => 4,
        }
    }
}

impl TryFrom<usize> for IndexWidth {
    type Error = ExtractError;

    fn try_from(bytes_per_index: usize) -> Result<Self, Self::Error> {
        match bytes_per_index {
            2 => Ok(IndexWidth::U16),
            4 => Ok(IndexWidth::U32),
            _ => Err(ExtractError::UnsupportedIndexWidth { bytes_per_index }),
        }
    }
}

/// Tightly packed primitive index buffer.
///
/// Primitive `p` holds `index_count_per_primitive` consecutive indices of
/// `bytes_per_index` bytes each; there is no padding between primitives.
///
/// # Examples
/// ```
/// use scan_geometry::FaceBuffer;
///
/// let indices: [u16; 3] = [0, 1, 2];
/// let storage: Vec<u8> = indices.iter().flat_map(|i| i.to_ne_bytes()).collect();
/// let faces = FaceBuffer::new(&storage, 1, 3, 2);
/// assert_eq!(faces.index_count(), 3);
/// assert_eq!(faces.read_index(0, 2).unwrap(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FaceBuffer<'a> {
    storage: &'a [u8],
    face_count: usize,
    index_count_per_primitive: usize,
    bytes_per_index: usize,
}

impl<'a> FaceBuffer<'a> {
    /// Describes `face_count` primitives over `storage`.
    pub fn new(
        storage: &'a [u8],
        face_count: usize,
        index_count_per_primitive: usize,
        bytes_per_index: usize,
    ) -> Self {
        Self {
            storage,
            face_count,
            index_count_per_primitive,
            bytes_per_index,
        }
    }

    /// Number of primitives.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Indices per primitive (3 for triangles).
    #[inline]
    pub fn index_count_per_primitive(&self) -> usize {
        self.index_count_per_primitive
    }

    /// Declared bytes per index.
    #[inline]
    pub fn bytes_per_index(&self) -> usize {
        self.bytes_per_index
    }

    /// Total number of indices, `face_count * index_count_per_primitive`.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.face_count.saturating_mul(self.index_count_per_primitive)
    }

    /// Parses the declared index width.
    ///
    /// # Errors
    /// Returns [`ExtractError::UnsupportedIndexWidth`] for anything but 2 or 4.
    pub fn index_width(&self) -> Result<IndexWidth, ExtractError> {
        IndexWidth::try_from(self.bytes_per_index)
    }

    /// One primitive per element, each element spanning all its indices.
    pub fn descriptor(&self) -> BufferDescriptor<'a> {
        BufferDescriptor::new(
            self.storage,
            self.face_count,
            self.index_count_per_primitive.saturating_mul(self.bytes_per_index),
        )
        .named("faces")
    }

    /// Reads corner `corner` of primitive `face`, widened to `u32`.
    ///
    /// # Errors
    /// - [`ExtractError::UnsupportedIndexWidth`] for an unknown width
    /// - [`ExtractError::IndexOutOfRange`] if `corner` is not a valid corner
    /// - any error from [`BufferDescriptor::read`]
    pub fn read_index(&self, face: usize, corner: usize) -> Result<u32, ExtractError> {
        let width = self.index_width()?;
        if corner >= self.index_count_per_primitive {
            return Err(ExtractError::IndexOutOfRange {
                buffer: "faces",
                index: corner,
                count: self.index_count_per_primitive,
            });
        }
        let descriptor = self.descriptor();
        let field_offset = corner * width.bytes();
        match width {
            IndexWidth::U16 => descriptor.read::<u16>(face, field_offset).map(u32::from),
            IndexWidth::U32 => descriptor.read::<u32>(face, field_offset),
        }
    }
}
