use crate::bounding_volume::Aabb;
use crate::query::sat;
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB.
///
/// Both shapes are considered closed: a triangle touching a face, an edge or a corner
/// of the box intersects it.
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    let shift = aabb1.center().coords;
    let half_extents = aabb1.half_extents();
    let triangle2 = Triangle::new(triangle2.a - shift, triangle2.b - shift, triangle2.c - shift);

    let sep1 = sat::cuboid_triangle_find_local_separating_normal_oneway(&half_extents, &triangle2).0;
    if sep1 > 0.0 {
        return false;
    }

    let sep2 = sat::triangle_cuboid_find_local_separating_normal_oneway(&triangle2, &half_extents).0;
    if sep2 > 0.0 {
        return false;
    }

    let sep3 = sat::cuboid_triangle_find_local_separating_edge_twoway(&half_extents, &triangle2).0;
    sep3 <= 0.0
}
