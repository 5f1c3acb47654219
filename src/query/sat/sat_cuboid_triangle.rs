use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Triangle;

/// Projects the vertices of `triangle` on `axis`, returning the min and max dot products.
#[inline]
fn triangle_interval_on_axis(triangle: &Triangle, axis: &Vector<Real>) -> (Real, Real) {
    let a = triangle.a.coords.dot(axis);
    let b = triangle.b.coords.dot(axis);
    let c = triangle.c.coords.dot(axis);
    (a.min(b).min(c), a.max(b).max(c))
}

/// Finds the best separating normal among the face normals of a box centered at the origin.
pub fn cuboid_triangle_find_local_separating_normal_oneway(
    half_extents: &Vector<Real>,
    triangle2: &Triangle,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..DIM {
        for sign in &[-1.0, 1.0] {
            let axis1 = Vector::ith(i, *sign);
            // The support point of the triangle toward `-axis1`.
            let (min, _) = triangle_interval_on_axis(triangle2, &axis1);
            let separation = min - half_extents[i];

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis1;
            }
        }
    }

    (best_separation, best_dir)
}

/// Computes the separation along the normal of a triangle, relative to a box centered at the origin.
///
/// A degenerate triangle has no normal and yields `-Real::MAX`.
pub fn triangle_cuboid_find_local_separating_normal_oneway(
    triangle1: &Triangle,
    half_extents2: &Vector<Real>,
) -> (Real, Vector<Real>) {
    let Some(normal) = triangle1.normal() else {
        return (-Real::MAX, Vector::zeros());
    };

    let dist = normal.dot(&triangle1.a.coords);
    let radius = half_extents2.dot(&normal.abs());
    let dir = if dist >= 0.0 { *normal } else { -*normal };

    (dist.abs() - radius, dir)
}

/// Finds the best separating axis among the cross products of the box axes and the triangle edges.
///
/// Axes with a near-zero length (edges parallel to a box axis) are skipped.
pub fn cuboid_triangle_find_local_separating_edge_twoway(
    half_extents: &Vector<Real>,
    triangle2: &Triangle,
) -> (Real, Vector<Real>) {
    let [x2, y2, z2] = triangle2.edges_scaled_directions();

    // We have 3 * 3 = 9 axes to test.
    let axes = [
        // Vector::{x, y ,z}().cross(x2)
        Vector::new(0.0, -x2.z, x2.y),
        Vector::new(x2.z, 0.0, -x2.x),
        Vector::new(-x2.y, x2.x, 0.0),
        // Vector::{x, y ,z}().cross(y2)
        Vector::new(0.0, -y2.z, y2.y),
        Vector::new(y2.z, 0.0, -y2.x),
        Vector::new(-y2.y, y2.x, 0.0),
        // Vector::{x, y ,z}().cross(z2)
        Vector::new(0.0, -z2.z, z2.y),
        Vector::new(z2.z, 0.0, -z2.x),
        Vector::new(-z2.y, z2.x, 0.0),
    ];

    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for axis in &axes {
        let norm_squared = axis.norm_squared();

        if norm_squared > DEFAULT_EPSILON {
            let axis = axis / norm_squared.sqrt();
            let (min, max) = triangle_interval_on_axis(triangle2, &axis);
            let radius = half_extents.dot(&axis.abs());

            if min - radius > best_separation {
                best_separation = min - radius;
                best_dir = axis;
            }

            if -radius - max > best_separation {
                best_separation = -radius - max;
                best_dir = -axis;
            }
        }
    }

    (best_separation, best_dir)
}
