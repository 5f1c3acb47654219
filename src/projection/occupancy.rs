use crate::math::Real;

/// A value that can be stored in a grid and read as an occupancy level.
///
/// Boolean grids map to `0` and `1`. Numeric grids are read as-is and are expected to
/// hold occupancy fractions in `[0, 1]`.
pub trait Occupancy: Copy {
    /// The occupancy level of this value.
    fn to_occupancy(self) -> Real;

    /// Is this value considered occupied by a maximum projection?
    #[inline]
    fn is_occupied(self) -> bool {
        self.to_occupancy() > 0.0
    }
}

impl Occupancy for bool {
    #[inline]
    fn to_occupancy(self) -> Real {
        if self {
            1.0
        } else {
            0.0
        }
    }

    #[inline]
    fn is_occupied(self) -> bool {
        self
    }
}

macro_rules! impl_occupancy_for_numbers(
    ($($t: ty),*) => {$(
        impl Occupancy for $t {
            #[inline]
            fn to_occupancy(self) -> Real {
                self as Real
            }
        }
    )*}
);

impl_occupancy_for_numbers!(u8, f32, f64);
