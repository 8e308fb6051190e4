//! End-to-end checks of the frame invariants over owned fixture buffers
//! laid out the way a capture session hands them over.

use glam::{Mat4, Vec3, Vec4};
use scan_geometry::{
    assemble_face_frames, assemble_mesh_frames, decode_transform, encode_transform,
    BufferDescriptor, ExtractError, FaceAnchor, FaceBuffer, FaceGeometry, MeshAnchor,
    MeshGeometry,
};
use uuid::Uuid;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Session-owned storage for one mesh chunk.
struct NativeMesh {
    identifier: Uuid,
    vertex_stride: usize,
    vertex_count: usize,
    vertices: Vec<u8>,
    normals: Option<Vec<u8>>,
    face_count: usize,
    bytes_per_index: usize,
    faces: Vec<u8>,
    classification: Option<Vec<u8>>,
}

impl NativeMesh {
    fn new(
        points: &[[f32; 3]],
        vertex_stride: usize,
        triangles: &[[u32; 3]],
        bytes_per_index: usize,
    ) -> Self {
        let mut vertices = vec![0u8; points.len() * vertex_stride];
        for (i, point) in points.iter().enumerate() {
            for (c, value) in point.iter().enumerate() {
                let at = i * vertex_stride + c * 4;
                vertices[at..at + 4].copy_from_slice(&value.to_ne_bytes());
            }
        }

        let faces = triangles
            .iter()
            .flatten()
            .flat_map(|&index| match bytes_per_index {
                2 => u16::try_from(index).unwrap().to_ne_bytes().to_vec(),
                _ => index.to_ne_bytes().to_vec(),
            })
            .collect();

        Self {
            identifier: Uuid::new_v4(),
            vertex_stride,
            vertex_count: points.len(),
            vertices,
            normals: None,
            face_count: triangles.len(),
            bytes_per_index,
            faces,
            classification: None,
        }
    }

    fn anchor(&self) -> MeshAnchor<'_> {
        MeshAnchor {
            identifier: self.identifier,
            transform: Mat4::IDENTITY,
            geometry: MeshGeometry {
                vertices: BufferDescriptor::new(
                    &self.vertices,
                    self.vertex_count,
                    self.vertex_stride,
                ),
                normals: self
                    .normals
                    .as_deref()
                    .map(|n| BufferDescriptor::new(n, self.vertex_count, self.vertex_stride)),
                faces: FaceBuffer::new(&self.faces, self.face_count, 3, self.bytes_per_index),
                classification: self.classification.as_deref().map(BufferDescriptor::packed::<u8>),
            },
        }
    }
}

fn grid(n: usize) -> (Vec<[f32; 3]>, Vec<[u32; 3]>) {
    let mut points = Vec::new();
    for y in 0..n {
        for x in 0..n {
            points.push([x as f32, y as f32, (x * y) as f32 * 0.1]);
        }
    }
    let mut triangles = Vec::new();
    for y in 0..n - 1 {
        for x in 0..n - 1 {
            let i = (y * n + x) as u32;
            let n = n as u32;
            triangles.push([i, i + 1, i + n]);
            triangles.push([i + 1, i + n + 1, i + n]);
        }
    }
    (points, triangles)
}

#[test]
fn quad_with_single_triangle_end_to_end() {
    init_logging();
    let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
    let native = NativeMesh::new(&points, 12, &[[0, 1, 2]], 4);

    let batch = assemble_mesh_frames(&[native.anchor()]);
    let frame = &batch.frames[0];
    assert_eq!(frame.vertices().len(), 12);
    assert_eq!(frame.normals().len(), 12);
    assert_eq!(frame.faces(), &[0, 1, 2]);
    assert_eq!(frame.classification(), 0);
}

#[test]
fn attribute_lengths_hold_across_layouts() {
    init_logging();
    let (points, triangles) = grid(6);
    for stride in [12, 16, 24] {
        for width in [2, 4] {
            let mut native = NativeMesh::new(&points, stride, &triangles, width);
            native.normals = Some(native.vertices.clone());

            let batch = assemble_mesh_frames(&[native.anchor()]);
            assert!(batch.failures.is_empty(), "stride {stride} width {width}");
            let frame = &batch.frames[0];
            assert_eq!(frame.vertices().len(), 3 * points.len());
            assert_eq!(frame.vertices().len(), frame.normals().len());
            assert_eq!(frame.faces().len() % 3, 0);
            assert_eq!(frame.faces().len(), 3 * triangles.len());
        }
    }
}

#[test]
fn interleaved_position_normal_buffer() {
    let (points, triangles) = grid(3);
    let mut native = NativeMesh::new(&points, 24, &triangles, 4);
    for i in 0..points.len() {
        let at = i * 24 + 12;
        native.vertices[at + 8..at + 12].copy_from_slice(&1.0f32.to_ne_bytes());
    }

    let anchor = MeshAnchor {
        identifier: native.identifier,
        transform: Mat4::IDENTITY,
        geometry: MeshGeometry {
            vertices: BufferDescriptor::new(&native.vertices, points.len(), 24),
            normals: Some(
                BufferDescriptor::new(&native.vertices, points.len(), 24).with_offset(12),
            ),
            faces: FaceBuffer::new(&native.faces, triangles.len(), 3, 4),
            classification: None,
        },
    };

    let batch = assemble_mesh_frames(&[anchor]);
    assert!(batch.failures.is_empty());
    let frame = &batch.frames[0];
    let expected: Vec<f32> = points.iter().flatten().copied().collect();
    assert_eq!(frame.vertices(), expected.as_slice());
    for normal in frame.normals().chunks(3) {
        assert_eq!(normal, &[0.0, 0.0, 1.0]);
    }
}

#[test]
fn index_widths_agree() {
    let (points, triangles) = grid(4);
    let narrow = NativeMesh::new(&points, 16, &triangles, 2);
    let wide = NativeMesh::new(&points, 16, &triangles, 4);

    let narrow = assemble_mesh_frames(&[narrow.anchor()]);
    let wide = assemble_mesh_frames(&[wide.anchor()]);
    assert_eq!(narrow.frames[0].faces(), wide.frames[0].faces());
    assert_eq!(narrow.frames[0].vertices(), wide.frames[0].vertices());
}

#[test]
fn classification_uses_first_face() {
    let (points, triangles) = grid(3);
    let mut native = NativeMesh::new(&points, 12, &triangles, 4);
    native.classification = Some(vec![6, 2, 2, 2, 2, 2, 2, 2]);

    let frame = &assemble_mesh_frames(&[native.anchor()]).frames[0];
    assert_eq!(frame.classification(), 6);
    assert_eq!(frame.surface().label(), "window");

    native.classification = Some(Vec::new());
    let frame = &assemble_mesh_frames(&[native.anchor()]).frames[0];
    assert_eq!(frame.classification(), 0);
}

#[test]
fn undersized_buffer_drops_only_that_anchor() {
    init_logging();
    let (points, triangles) = grid(3);
    let healthy = NativeMesh::new(&points, 16, &triangles, 2);
    let mut broken = NativeMesh::new(&points, 16, &triangles, 2);
    broken.vertices.truncate(broken.vertices.len() - 4);

    let batch = assemble_mesh_frames(&[broken.anchor(), healthy.anchor()]);
    assert_eq!(batch.frames.len(), 1);
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].identifier, broken.identifier);
    assert!(matches!(
        batch.failures[0].error,
        ExtractError::OutOfBounds { buffer: "vertices", .. }
    ));
}

#[test]
fn transform_round_trip_of_counting_matrix() {
    let matrix = Mat4::from_cols(
        Vec4::new(1.0, 2.0, 3.0, 4.0),
        Vec4::new(5.0, 6.0, 7.0, 8.0),
        Vec4::new(9.0, 10.0, 11.0, 12.0),
        Vec4::new(13.0, 14.0, 15.0, 16.0),
    );
    let encoded = encode_transform(&matrix);
    for (i, value) in encoded.iter().enumerate() {
        assert_eq!(*value, (i + 1) as f64);
    }
    assert_eq!(decode_transform(&encoded), matrix);
}

#[test]
fn face_frame_shape_matches_mesh_frame_shape() {
    let (points, triangles) = grid(5);
    let face = FaceAnchor {
        identifier: Uuid::new_v4(),
        transform: Mat4::from_translation(Vec3::new(0.0, 0.0, -0.4)),
        geometry: FaceGeometry {
            vertices: points.iter().map(|p| Vec3::from_array(*p)).collect(),
            triangles: triangles
                .iter()
                .map(|t| t.map(|i| u16::try_from(i).unwrap()))
                .collect(),
        },
    };

    let batch = assemble_face_frames(Some(&face));
    let frame = &batch.frames[0];
    assert_eq!(frame.normals().len(), 3 * points.len());
    assert!(frame.normals().iter().all(|n| *n == 0.0));
    assert_eq!(frame.faces().len(), 3 * triangles.len());
    assert_eq!(frame.classification(), 0);
    assert_eq!(frame.transform()[14], f64::from(-0.4f32));

    let native = NativeMesh::new(&points, 12, &triangles, 4);
    let mesh_frame = &assemble_mesh_frames(&[native.anchor()]).frames[0];
    assert_eq!(frame.vertices(), mesh_frame.vertices());
    assert_eq!(frame.faces(), mesh_frame.faces());
}

#[test]
fn no_anchors_no_frames() {
    assert!(assemble_mesh_frames(&[]).frames.is_empty());
    assert!(assemble_face_frames(None).frames.is_empty());
}
