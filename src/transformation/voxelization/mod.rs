pub use self::grid_io::GridIoError;
pub use self::voxel_grid::{ShapeError, VoxelGrid};
pub use self::voxelizer::{voxelize, VoxelizationError};

mod flood_fill;
mod grid_io;
mod voxel_grid;
mod voxelizer;
