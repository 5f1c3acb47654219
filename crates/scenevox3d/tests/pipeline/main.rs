use scenevox3d::bounding_volume::Aabb;
use scenevox3d::math::Point;
use scenevox3d::shape::TriMesh;
use std::path::PathBuf;

mod end_to_end;
mod mapping;
mod normalization;
mod projection;
mod voxel_post_processing;

/// The closed box `[-half, half]^3`.
pub fn centered_cube(half: f64) -> TriMesh {
    TriMesh::from(Aabb::new(Point::new(-half, -half, -half), Point::new(half, half, half)))
}

/// A fresh path in the temporary directory, unique to this test process.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scenevox3d-{}-{}", std::process::id(), name))
}
