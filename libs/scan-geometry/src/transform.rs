//! Transform encoding for the wire format.
//!
//! Anchor transforms are 4×4 `f32` matrices stored as four column vectors.
//! On the wire they become 16 `f64` values in column-major order:
//!
//! ```text
//! index:  0  1  2  3 | 4  5  6  7 | 8  9 10 11 | 12 13 14 15
//! value: c0.x ... c0.w | c1.x ... | c2.x ...  | c3.x ... c3.w
//! ```
//!
//! The translation therefore sits at indices 12, 13 and 14. Existing
//! consumers depend on this order.

use config::constants::TRANSFORM_ELEMENT_COUNT;
use glam::Mat4;

/// Flattens `matrix` into 16 `f64` values, column by column.
///
/// Widening `f32` to `f64` is exact.
///
/// # Examples
/// ```
/// use glam::{Mat4, Vec3};
/// use scan_geometry::encode_transform;
///
/// let matrix = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
/// let encoded = encode_transform(&matrix);
/// assert_eq!(&encoded[12..16], &[1.0, 2.0, 3.0, 1.0]);
/// ```
pub fn encode_transform(matrix: &Mat4) -> [f64; TRANSFORM_ELEMENT_COUNT] {
    matrix.to_cols_array().map(f64::from)
}

/// Rebuilds a matrix from its column-major wire form.
///
/// Values are narrowed back to `f32`; anything produced by
/// [`encode_transform`] comes back bit-identical.
pub fn decode_transform(values: &[f64; TRANSFORM_ELEMENT_COUNT]) -> Mat4 {
    Mat4::from_cols_array(&values.map(|value| value as f32))
}
