use super::VoxelGrid;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query;
use crate::shape::TriMesh;

/// Errors raised while rasterizing a mesh into a voxel grid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VoxelizationError {
    /// No cell of the grid is touched by the mesh.
    #[error("no triangle of the mesh intersects the grid of shape {shape:?}")]
    Empty {
        /// The shape of the sampled grid.
        shape: [usize; 3],
    },
    /// The cell size is not a positive finite number.
    #[error("the voxel pitch must be positive and finite, got {0}")]
    InvalidPitch(Real),
    /// A dimension of the target box is zero.
    #[error("the target shape {0:?} has a zero dimension")]
    InvalidShape([usize; 3]),
}

/// Rasterizes the surface of `mesh` into a grid of cells of size `pitch`.
///
/// The grid covers the box `[0, target_shape]` of the mesh frame, so it has
/// `ceil(target_shape / pitch)` cells along each axis. A cell is occupied if at least one
/// triangle intersects its closed box. Only the surface is sampled: see
/// [`VoxelGrid::fill_interior`] to obtain a solid.
///
/// Triangles, or parts of triangles, outside of the grid are ignored. Triangles with
/// non-finite vertices are skipped.
pub fn voxelize(
    mesh: &TriMesh,
    target_shape: [usize; 3],
    pitch: Real,
) -> Result<VoxelGrid, VoxelizationError> {
    if !(pitch.is_finite() && pitch > 0.0) {
        return Err(VoxelizationError::InvalidPitch(pitch));
    }

    if target_shape.contains(&0) {
        return Err(VoxelizationError::InvalidShape(target_shape));
    }

    let resolution = target_shape.map(|n| (n as Real / pitch).ceil() as usize);
    let mut grid = VoxelGrid::new(resolution);
    let last = Vector::new(
        (resolution[0] - 1) as Real,
        (resolution[1] - 1) as Real,
        (resolution[2] - 1) as Real,
    );
    let inv_pitch = Vector::repeat(1.0 / pitch);
    let mut num_clipped = 0;
    let mut num_skipped = 0;

    for triangle in mesh.triangles() {
        if !triangle.is_finite() {
            num_skipped += 1;
            continue;
        }

        // Work in grid units: the cell `[i, j, k]` is the unit box at `(i, j, k)`.
        let triangle = triangle.scaled(&inv_pitch);
        let aabb = triangle.local_aabb();

        // Range of cells whose closed box may touch the triangle.
        let lo = (aabb.mins.coords - Vector::repeat(1.0)).map(|e| e.ceil());
        let hi = aabb.maxs.coords.map(|e| e.floor());

        if (0..3).any(|a| lo[a] < 0.0 || hi[a] > last[a]) {
            num_clipped += 1;
        }

        let lo = lo.sup(&Vector::zeros());
        let hi = hi.inf(&last);

        if (0..3).any(|a| lo[a] > hi[a]) {
            continue;
        }

        let (lo, hi) = (lo.map(|e| e as usize), hi.map(|e| e as usize));

        for i in lo.x..=hi.x {
            for j in lo.y..=hi.y {
                for k in lo.z..=hi.z {
                    if grid.get([i, j, k]) {
                        continue;
                    }

                    let mins = Point::new(i as Real, j as Real, k as Real);
                    let cell = Aabb::new(mins, mins + Vector::repeat(1.0));

                    if query::intersection_test_aabb_triangle(&cell, &triangle) {
                        grid.set([i, j, k], true);
                    }
                }
            }
        }
    }

    let num_occupied = grid.num_occupied();
    log::debug!(
        "voxelized {} triangles into {} cells of {:?} ({} clipped, {} skipped)",
        mesh.num_triangles(),
        num_occupied,
        resolution,
        num_clipped,
        num_skipped
    );

    if num_occupied == 0 {
        return Err(VoxelizationError::Empty { shape: resolution });
    }

    Ok(grid)
}
