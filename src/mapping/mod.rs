//! Conversions between the pixels of projection images and scene coordinates.
//!
//! Each projection image gets a [`PixelCalibration`] when it is generated. The
//! [`CoordinateMapper`] keeps these calibrations in a [`RatioStore`], keyed by [`ImageId`],
//! so that points annotated on an image can be mapped back to the scene.

pub use self::calibration::{pixel_to_scene_ratio, PixelCalibration};
pub use self::coordinate_mapper::{CoordinateMapper, ImageId, MappingError};
pub use self::ratio_store::{RatioStore, SharedRatioTable};

mod calibration;
mod coordinate_mapper;
mod ratio_store;
