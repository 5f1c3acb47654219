use super::ProjectionError;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array2;
use std::path::Path;

/// The number of color channels of an image file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channels {
    /// A single gray channel.
    Luma,
    /// The gray value replicated on red, green and blue.
    Rgb,
}

/// A 2D array of intensities in `[0, 255]`, produced by a [`super::Projector`].
///
/// The array is indexed `[row, column]` and is independent of the grid it was projected
/// from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectionImage {
    pixels: Array2<u8>,
    channels: Channels,
}

impl ProjectionImage {
    /// Wraps an array of intensities.
    pub fn new(pixels: Array2<u8>, channels: Channels) -> Self {
        Self { pixels, channels }
    }

    /// The intensities of this image, indexed `[row, column]`.
    pub fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    /// Unwraps the intensities of this image.
    pub fn into_pixels(self) -> Array2<u8> {
        self.pixels
    }

    /// The number of channels written to image files.
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Converts this projection into an 8-bit image.
    pub fn to_dynamic_image(&self) -> DynamicImage {
        let (width, height) = (self.width() as u32, self.height() as u32);
        let value = |x: u32, y: u32| self.pixels[[y as usize, x as usize]];

        match self.channels {
            Channels::Luma => {
                DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
                    Luma([value(x, y)])
                }))
            }
            Channels::Rgb => DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
                let v = value(x, y);
                Rgb([v, v, v])
            })),
        }
    }

    /// Writes this projection to an image file, with a format deduced from the extension of
    /// `path` (typically `.png`).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProjectionError> {
        let path = path.as_ref();
        self.to_dynamic_image().save(path)?;
        log::debug!(
            "saved a {}x{} projection to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}
