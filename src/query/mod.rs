//! Non-persistent geometric queries.
//!
//! The voxelizer only needs one of them: deciding whether a triangle touches the
//! box of a grid cell, see [`intersection_test_aabb_triangle`].

pub use self::intersection_test::intersection_test_aabb_triangle;

mod intersection_test;
pub mod sat;
