//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Every scene mesh is
/// fitted into the voxel grid through its AABB: the per-axis extents of the box
/// give the scaling factors, and its `mins` corner is the anchor of the
/// translations applied during normalization.
///
/// # Invariant
///
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`.
///
/// # Example
///
/// ```rust
/// use scenevox3d::bounding_volume::Aabb;
/// use scenevox3d::math::Point;
///
/// let points = vec![
///     Point::new(1.0, 2.0, 3.0),
///     Point::new(-1.0, 4.0, 2.0),
///     Point::new(0.0, 0.0, 5.0),
/// ];
/// let aabb = Aabb::from_points(&points).unwrap();
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 5.0));
/// assert_eq!(aabb.extents().y, 4.0);
/// ```
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two opposite corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Computes the AABB enclosing a set of points.
    ///
    /// Returns `None` if the set is empty.
    pub fn from_points<'a, I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut it = pts.into_iter();
        let first = it.next()?;
        let mut result = Aabb::new(*first, *first);

        for pt in it {
            result.take_point(*pt);
        }

        Some(result)
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB, i.e., its width along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Returns this AABB translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Aabb {
        Aabb::new(self.mins + *shift, self.maxs + *shift)
    }

    /// Returns this AABB with both corners multiplied componentwise by `scale`.
    ///
    /// The scale must be positive on every axis for the result to stay valid.
    #[inline]
    pub fn scaled(&self, scale: &Vector<Real>) -> Aabb {
        Aabb::new(
            self.mins.coords.component_mul(scale).into(),
            self.maxs.coords.component_mul(scale).into(),
        )
    }

    /// Does this AABB contain `other`, up to `tolerance` on each side?
    #[inline]
    pub fn contains_with_tolerance(&self, other: &Aabb, tolerance: Real) -> bool {
        (0..DIM).all(|i| {
            other.mins[i] >= self.mins[i] - tolerance && other.maxs[i] <= self.maxs[i] + tolerance
        })
    }
}
