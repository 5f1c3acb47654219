//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector};

use na::Unit;

/// A triangle shape.
#[derive(PartialEq, Debug, Copy, Clone, Serialize, Deserialize)]
#[repr(C)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal to this triangle, with a length equal to twice its area.
    ///
    /// The vector is collinear to `AB × AC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The directions of the three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// Is this triangle free of NaN and infinite coordinates?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.vertices()
            .iter()
            .all(|pt| pt.coords.iter().all(|x| x.is_finite()))
    }

    /// Returns this triangle with each vertex multiplied componentwise by `scale`.
    #[inline]
    pub fn scaled(&self, scale: &Vector<Real>) -> Triangle {
        Triangle::new(
            self.a.coords.component_mul(scale).into(),
            self.b.coords.component_mul(scale).into(),
            self.c.coords.component_mul(scale).into(),
        )
    }

    /// The AABB of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let mut aabb = Aabb::new(self.a, self.a);
        aabb.take_point(self.b);
        aabb.take_point(self.c);
        aabb
    }
}
