/*!
scenevox3d
==========

**scenevox3d** turns triangulated 3D scenes into fixed-resolution voxel grids,
and voxel grids into 2D projections that can be annotated by hand.

The usual flow is:

1. load a Wavefront mesh with [`shape::TriMesh::from_obj_file`],
2. fit it into the target grid with [`transformation::normalization::MeshNormalizer`],
3. rasterize it with [`transformation::voxelization::voxelize`],
4. project the grid with [`projection::Projector`],
5. map annotated pixels back to scene units with [`mapping::CoordinateMapper`].

[`pipeline::ScenePipeline`] chains all of these for one scene file.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate ndarray;

pub mod bounding_volume;
pub mod mapping;
pub mod pipeline;
pub mod projection;
pub mod query;
pub mod shape;
pub mod transformation;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point3, Unit, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub type UnitVector<N> = Unit<Vector3<N>>;
}
