//! Implementation details of the `intersection_test` function.

pub use self::intersection_test_aabb_triangle::intersection_test_aabb_triangle;

mod intersection_test_aabb_triangle;
