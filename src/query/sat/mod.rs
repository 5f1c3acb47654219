//! Application of the Separating Axis Theorem (SAT) to boxes and triangles.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto
//! which their projections do not overlap. For a box and a triangle, 13 candidate
//! axes are enough: the 3 face normals of the box, the normal of the triangle, and
//! the 9 cross products between the box axes and the triangle edges.
//!
//! Every function here works in the local frame of the box (the box is centered at
//! the origin) and returns the largest separation found together with its axis. A
//! positive separation means the shapes are disjoint.

pub use self::sat_cuboid_triangle::{
    cuboid_triangle_find_local_separating_edge_twoway,
    cuboid_triangle_find_local_separating_normal_oneway,
    triangle_cuboid_find_local_separating_normal_oneway,
};

mod sat_cuboid_triangle;
