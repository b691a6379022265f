//! CPU meshing: per-face culled cube geometry for chunks.
#![forbid(unsafe_code)]

mod chunk;
mod cube;
mod face;

pub use chunk::{MeshStats, build_chunk_mesh, build_grid_mesh, visible_faces};
pub use cube::{
    CUBE_VERTICES, FACE_INDICES, FACE_TRIANGLES, FACE_UVS, FACE_VERTICES, FaceQuad, build_cube,
    build_face,
};
pub use face::FaceSet;
