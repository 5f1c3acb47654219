//! Projection of voxel grids into 2D images.

pub use self::occupancy::Occupancy;
pub use self::projection_image::{Channels, ProjectionImage};
pub use self::projector::{ProjectionError, ProjectionMode, Projector, ToneMap, SIDE_VIEW_LOG_BASE};

mod occupancy;
mod projection_image;
mod projector;
