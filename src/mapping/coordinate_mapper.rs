use super::{PixelCalibration, RatioStore, SharedRatioTable};
use crate::math::Real;
use na::Point2;
use core::fmt;
use std::path::Path;

/// The identity of a generated projection image, usually its file path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(String);

impl ImageId {
    /// Creates an image identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity of the image written at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().into_owned())
    }

    /// This identity as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Errors raised by a [`CoordinateMapper`].
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum MappingError {
    /// No calibration was recorded for this image.
    #[error("no pixel ratio was recorded for the image `{0}`")]
    UnknownImage(ImageId),
    /// Pixel ratios must be positive and finite.
    #[error("invalid pixel ratio {0}")]
    InvalidRatio(Real),
    /// A calibration was already recorded for this image.
    #[error("a pixel ratio was already recorded for the image `{0}`")]
    AlreadyRecorded(ImageId),
}

/// Maps annotated pixels of projection images to scene coordinates and back.
///
/// The mapper is meant to be shared, through an `Arc`, between all the threads generating
/// or annotating images. Each image must be recorded once, before any conversion.
#[derive(Debug, Default)]
pub struct CoordinateMapper<S = SharedRatioTable> {
    store: S,
}

impl CoordinateMapper {
    /// A mapper backed by an empty [`SharedRatioTable`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: RatioStore> CoordinateMapper<S> {
    /// A mapper backed by the given store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// The store of this mapper.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records the calibration of a newly generated image.
    pub fn record_ratio(
        &self,
        id: impl Into<ImageId>,
        calibration: PixelCalibration,
    ) -> Result<(), MappingError> {
        let id = id.into();

        if !(calibration.ratio.is_finite() && calibration.ratio > 0.0) {
            return Err(MappingError::InvalidRatio(calibration.ratio));
        }

        log::debug!("recording the pixel ratio {} of `{}`", calibration.ratio, id);

        if self.store.try_insert(id.clone(), calibration) {
            Ok(())
        } else {
            Err(MappingError::AlreadyRecorded(id))
        }
    }

    /// The calibration recorded for the image `id`.
    pub fn calibration(&self, id: &ImageId) -> Result<PixelCalibration, MappingError> {
        self.store
            .get(id)
            .ok_or_else(|| MappingError::UnknownImage(id.clone()))
    }

    /// The pixel of the image `id` showing the scene point `scene`.
    pub fn to_pixel(&self, id: &ImageId, scene: &Point2<Real>) -> Result<Point2<Real>, MappingError> {
        Ok(self.calibration(id)?.to_pixel(scene))
    }

    /// The scene point shown by the pixel `pixel` of the image `id`.
    pub fn to_scene(&self, id: &ImageId, pixel: &Point2<Real>) -> Result<Point2<Real>, MappingError> {
        Ok(self.calibration(id)?.to_scene(pixel))
    }
}
