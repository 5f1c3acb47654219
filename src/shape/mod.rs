//! Shapes handled by the voxelization pipeline.

pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod triangle;
mod trimesh;
