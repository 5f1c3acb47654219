//! Transformations of triangle meshes: file I/O, repair, normalization and voxelization.

pub use self::hole_filling::RepairError;
pub use self::normalization::{
    GeometryError, MeshNormalizer, NormalizationParameters, NormalizedMesh,
};
pub use self::wavefront::WavefrontError;

mod hole_filling;
/// Fitting of a mesh into a target voxel grid.
pub mod normalization;
mod to_trimesh;
/// Voxelization of a 3D triangle mesh and post-processing of voxel grids.
pub mod voxelization;
pub mod wavefront;
