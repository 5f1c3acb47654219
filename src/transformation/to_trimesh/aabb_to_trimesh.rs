use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

impl Aabb {
    /// Discretize the boundary of this AABB as a triangle-mesh.
    ///
    /// The triangles are oriented counter-clockwise when seen from outside the box.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (mut vtx, idx) = unit_cuboid();
        let center = self.center();
        let extents = self.extents();
        vtx.iter_mut()
            .for_each(|p| *p = center + p.coords.component_mul(&extents));
        (vtx, idx)
    }
}

/**
 * Generates a cuboid shape with a split index buffer.
 *
 * The cuboid is centered at the origin, and has its half extents set to 0.5.
 */
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
