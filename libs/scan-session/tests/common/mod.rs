//! In-memory capture sessions shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use scan_geometry::{
    BufferDescriptor, FaceAnchor, FaceBuffer, FaceGeometry, MeshAnchor, MeshGeometry,
};
use scan_session::{
    FaceCaptureSession, FaceTrackingConfig, MeshCaptureSession, ReconstructionMode,
    WorldTrackingConfig,
};
use uuid::Uuid;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Session-owned buffers for one mesh chunk.
#[derive(Debug, Clone)]
pub struct MeshChunk {
    pub identifier: Uuid,
    pub vertex_count: usize,
    pub vertices: Vec<u8>,
    pub faces: Vec<u8>,
    pub face_count: usize,
    pub classification: Option<Vec<u8>>,
}

impl MeshChunk {
    /// A single triangle, 16 byte vertex stride, 16-bit indices.
    pub fn triangle(id: u128) -> Self {
        let points = [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut vertices = vec![0u8; points.len() * 16];
        for (i, point) in points.iter().enumerate() {
            for (c, value) in point.iter().enumerate() {
                let at = i * 16 + c * 4;
                vertices[at..at + 4].copy_from_slice(&value.to_ne_bytes());
            }
        }
        Self {
            identifier: Uuid::from_u128(id),
            vertex_count: points.len(),
            vertices,
            faces: [0u16, 1, 2].iter().flat_map(|i| i.to_ne_bytes()).collect(),
            face_count: 1,
            classification: Some(vec![1]),
        }
    }

    /// Same triangle, but the vertex storage is cut short.
    pub fn truncated(id: u128) -> Self {
        let mut chunk = Self::triangle(id);
        chunk.vertices.truncate(20);
        chunk
    }

    fn anchor(&self) -> MeshAnchor<'_> {
        MeshAnchor {
            identifier: self.identifier,
            transform: Mat4::IDENTITY,
            geometry: MeshGeometry {
                vertices: BufferDescriptor::new(&self.vertices, self.vertex_count, 16),
                normals: None,
                faces: FaceBuffer::new(&self.faces, self.face_count, 3, 2),
                classification: self.classification.as_deref().map(BufferDescriptor::packed::<u8>),
            },
        }
    }
}

/// Everything a fake session records, shared with the test body.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub running: Cell<bool>,
    pub runs: Cell<usize>,
    pub pauses: Cell<usize>,
    pub queries_while_paused: Cell<usize>,
    pub last_reconstruction: Cell<Option<ReconstructionMode>>,
    pub last_max_faces: Cell<Option<usize>>,
}

#[derive(Debug, Clone)]
pub struct FakeMeshSession {
    pub log: Rc<SessionLog>,
    pub supports_mesh: bool,
    pub supports_classification: bool,
    pub chunks: Vec<MeshChunk>,
}

impl FakeMeshSession {
    pub fn new(chunks: Vec<MeshChunk>) -> Self {
        Self {
            log: Rc::new(SessionLog::default()),
            supports_mesh: true,
            supports_classification: true,
            chunks,
        }
    }
}

impl MeshCaptureSession for FakeMeshSession {
    fn supports_reconstruction(&self, mode: ReconstructionMode) -> bool {
        match mode {
            ReconstructionMode::Mesh => self.supports_mesh,
            ReconstructionMode::MeshWithClassification => {
                self.supports_mesh && self.supports_classification
            }
        }
    }

    fn run(&mut self, config: &WorldTrackingConfig) {
        assert!(config.environment_texturing);
        self.log.running.set(true);
        self.log.runs.set(self.log.runs.get() + 1);
        self.log.last_reconstruction.set(Some(config.scene_reconstruction));
    }

    fn pause(&mut self) {
        self.log.running.set(false);
        self.log.pauses.set(self.log.pauses.get() + 1);
    }

    fn mesh_anchors(&self) -> Vec<MeshAnchor<'_>> {
        if !self.log.running.get() {
            self.log
                .queries_while_paused
                .set(self.log.queries_while_paused.get() + 1);
        }
        self.chunks.iter().map(MeshChunk::anchor).collect()
    }
}

#[derive(Debug, Clone)]
pub struct FakeFaceSession {
    pub log: Rc<SessionLog>,
    pub supported: bool,
}

impl FakeFaceSession {
    pub fn new() -> Self {
        Self {
            log: Rc::new(SessionLog::default()),
            supported: true,
        }
    }
}

impl FaceCaptureSession for FakeFaceSession {
    fn supports_face_tracking(&self) -> bool {
        self.supported
    }

    fn run(&mut self, config: &FaceTrackingConfig) {
        self.log.running.set(true);
        self.log.runs.set(self.log.runs.get() + 1);
        self.log.last_max_faces.set(Some(config.maximum_tracked_faces));
    }

    fn pause(&mut self) {
        self.log.running.set(false);
        self.log.pauses.set(self.log.pauses.get() + 1);
    }
}

pub fn face(id: u128) -> FaceAnchor {
    FaceAnchor {
        identifier: Uuid::from_u128(id),
        transform: Mat4::from_translation(Vec3::new(0.0, 0.0, -0.5)),
        geometry: FaceGeometry {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
        },
    }
}
