use crate::math::{Real, Vector};
use na::Point2;

/// The number of image pixels per scene unit for a mesh of the given extents voxelized into
/// a grid of shape `grid_shape`.
///
/// `grid_shape` counts cells, so it already accounts for the voxel pitch. Only the two
/// horizontal axes (0 and 2) are considered, since projection images are top-down views.
/// Returns infinity if both horizontal extents are zero.
pub fn pixel_to_scene_ratio(grid_shape: [usize; 3], extents: &Vector<Real>) -> Real {
    (grid_shape[0] as Real / extents.x).min(grid_shape[2] as Real / extents.z)
}

/// Relates the pixels of one image to scene coordinates.
///
/// The scene origin is at the center of the image, and the scene `y` axis points up while
/// image rows go down.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelCalibration {
    /// The number of pixels per scene unit.
    pub ratio: Real,
    /// The width of the image, in pixels.
    pub width: usize,
    /// The height of the image, in pixels.
    pub height: usize,
}

impl PixelCalibration {
    /// Creates a new calibration.
    pub fn new(ratio: Real, width: usize, height: usize) -> Self {
        Self {
            ratio,
            width,
            height,
        }
    }

    fn center(&self) -> Point2<Real> {
        Point2::new(self.width as Real / 2.0, self.height as Real / 2.0)
    }

    /// The pixel showing the scene point `scene`.
    #[inline]
    pub fn to_pixel(&self, scene: &Point2<Real>) -> Point2<Real> {
        let center = self.center();
        Point2::new(
            center.x + scene.x * self.ratio,
            center.y - scene.y * self.ratio,
        )
    }

    /// The scene point shown by the pixel `pixel`.
    #[inline]
    pub fn to_scene(&self, pixel: &Point2<Real>) -> Point2<Real> {
        let center = self.center();
        Point2::new(
            (pixel.x - center.x) / self.ratio,
            (center.y - pixel.y) / self.ratio,
        )
    }
}
