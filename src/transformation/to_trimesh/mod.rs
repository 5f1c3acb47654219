//! Triangle mesh generation from geometric shapes.
//!
//! A triangle mesh is returned as a pair `(Vec<Point<Real>>, Vec<[u32; 3]>)` of
//! vertices and counter-clockwise triangle indices.

mod aabb_to_trimesh;
