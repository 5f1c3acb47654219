use super::{Channels, Occupancy, ProjectionImage};
use crate::math::Real;
use crate::transformation::voxelization::ShapeError;
use ndarray::{Array2, ArrayBase, Axis, Data, Dimension, Ix3, Slice};
use core::ops::Range;

/// The logarithm base used by the inverted logarithmic tone map of side views.
pub const SIDE_VIEW_LOG_BASE: Real = 3.0;

/// Errors raised while projecting a grid.
#[derive(thiserror::Error, Debug)]
pub enum ProjectionError {
    /// The grid, axis or slab are incompatible.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The base of a logarithmic tone map must be positive, finite, and different from 1.
    #[error("invalid logarithm base {0}")]
    InvalidLogBase(Real),
    /// The projection could not be written as an image file.
    #[error("cannot write the projection image: {0}")]
    Image(#[from] image::ImageError),
}

/// Maps mean occupancies to pixel intensities.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ToneMap {
    /// Linear mapping of the observed `[min, max]` range to `[0, 255]`.
    ///
    /// A projection with a single value maps to 0 everywhere.
    Linear,
    /// `255` minus the [`ToneMap::Linear`] mapping: empty regions are white.
    InvertedLinear,
    /// `255 - 255 / ln(256) * ln(255 * mean + 1) / ln(base)`, clamped to `[0, 255]`.
    ///
    /// Compresses the dense regions so sparse structures remain visible. The result is
    /// replicated on three channels.
    InvertedLog {
        /// The base of the logarithm.
        base: Real,
    },
}

impl ToneMap {
    /// The inverted logarithmic tone map with base `e`.
    pub fn inverted_log() -> Self {
        ToneMap::InvertedLog {
            base: core::f64::consts::E,
        }
    }

    /// The inverted logarithmic tone map used for side views.
    pub fn side_view() -> Self {
        ToneMap::InvertedLog {
            base: SIDE_VIEW_LOG_BASE,
        }
    }

    fn channels(&self) -> Channels {
        match self {
            ToneMap::InvertedLog { .. } => Channels::Rgb,
            ToneMap::Linear | ToneMap::InvertedLinear => Channels::Luma,
        }
    }

    fn apply(&self, means: &Array2<Real>) -> Result<Array2<u8>, ProjectionError> {
        match *self {
            ToneMap::Linear => Ok(normalize_linear(means)),
            ToneMap::InvertedLinear => Ok(normalize_linear(means).mapv(|v| 255 - v)),
            ToneMap::InvertedLog { base } => {
                if !(base.is_finite() && base > 0.0 && base != 1.0) {
                    return Err(ProjectionError::InvalidLogBase(base));
                }

                let scale = 255.0 / (256.0 as Real).ln() / base.ln();
                Ok(means.mapv(|mean| to_intensity(255.0 - scale * (255.0 * mean + 1.0).ln())))
            }
        }
    }
}

/// How the cells along the collapsed axis are combined into one pixel.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// 255 if any cell is occupied, 0 otherwise.
    Max,
    /// The mean occupancy, mapped to an intensity by the given tone map.
    Average(ToneMap),
}

/// Collapses one axis of a 3D grid into a 2D image.
///
/// The rows of the image follow the lowest remaining axis, the columns the highest one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projector {
    /// The collapsed axis.
    pub axis: usize,
    /// The aggregation rule.
    pub mode: ProjectionMode,
    /// Restricts the projection to a range of indices of the collapsed axis.
    ///
    /// The range is truncated to the length of the axis. `None` projects the whole axis.
    pub slab: Option<Range<usize>>,
}

impl Projector {
    /// A projector collapsing the whole `axis`.
    pub fn new(axis: usize, mode: ProjectionMode) -> Self {
        Self {
            axis,
            mode,
            slab: None,
        }
    }

    /// Restricts this projector to the indices `slab` of the collapsed axis.
    pub fn with_slab(mut self, slab: Range<usize>) -> Self {
        self.slab = Some(slab);
        self
    }

    /// The top-down preview of the floor area: the 70 lowest layers of axis 1 (or all of
    /// them on shorter grids), averaged, with empty regions in white.
    pub fn floor_preview() -> Self {
        Self::new(1, ProjectionMode::Average(ToneMap::InvertedLinear)).with_slab(0..70)
    }

    /// Projects `grid` along the axis of this projector.
    ///
    /// Fails if `grid` is not 3-dimensional, if the axis is not 0, 1 or 2, or if the slab
    /// is empty or starts past the end of the collapsed axis.
    pub fn project<S, D>(&self, grid: &ArrayBase<S, D>) -> Result<ProjectionImage, ProjectionError>
    where
        S: Data,
        S::Elem: Occupancy,
        D: Dimension,
    {
        let ndim = grid.ndim();
        let grid = grid
            .view()
            .into_dimensionality::<Ix3>()
            .map_err(|_| ShapeError::NotThreeDimensional { ndim })?;

        if self.axis > 2 {
            return Err(ShapeError::InvalidAxis(self.axis).into());
        }

        let axis = Axis(self.axis);
        let len = grid.len_of(axis);
        let slab = self.slab.clone().unwrap_or(0..len);

        if slab.start >= slab.end || slab.start >= len {
            return Err(ShapeError::InvalidSlab {
                start: slab.start,
                end: slab.end,
                len,
            }
            .into());
        }

        let slab = slab.start..slab.end.min(len);

        let depth = slab.len() as Real;
        let grid = grid.slice_axis(axis, Slice::from(slab));

        let image = match self.mode {
            ProjectionMode::Max => {
                let pixels = grid.map_axis(axis, |lane| {
                    if lane.iter().any(|v| v.is_occupied()) {
                        255
                    } else {
                        0
                    }
                });
                ProjectionImage::new(pixels, Channels::Luma)
            }
            ProjectionMode::Average(tone_map) => {
                let means = grid.map_axis(axis, |lane| {
                    lane.iter().map(|v| v.to_occupancy()).sum::<Real>() / depth
                });
                ProjectionImage::new(tone_map.apply(&means)?, tone_map.channels())
            }
        };

        log::debug!(
            "projected {:?} along axis {} into a {}x{} image",
            grid.shape(),
            self.axis,
            image.width(),
            image.height()
        );

        Ok(image)
    }
}

fn normalize_linear(values: &Array2<Real>) -> Array2<u8> {
    let min = values.iter().copied().fold(Real::INFINITY, Real::min);
    let max = values.iter().copied().fold(Real::NEG_INFINITY, Real::max);
    let range = max - min;

    if !(range > 0.0 && range.is_finite()) {
        return Array2::zeros(values.raw_dim());
    }

    values.mapv(|v| to_intensity((v - min) / range * 255.0))
}

fn to_intensity(value: Real) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
