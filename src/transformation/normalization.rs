use crate::math::{Real, Vector, DIM};
use crate::shape::TriMesh;

/// Errors raised when a mesh cannot be fitted into a voxel grid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The mesh is flat, or has non-finite coordinates, along one axis.
    #[error("the mesh extent along axis {axis} is {extent}, expected a positive finite value")]
    DegenerateExtent {
        /// The faulty axis.
        axis: usize,
        /// The extent of the mesh along `axis`.
        extent: Real,
    },
    /// A dimension of the target grid is zero.
    #[error("the target shape along axis {axis} is {shape}, expected a positive value")]
    InvalidTargetShape {
        /// The faulty axis.
        axis: usize,
        /// The target dimension along `axis`.
        shape: usize,
    },
    /// The safety margin applied to the scale factor is not in `(0, 1]`.
    #[error("the scaling margin {0} must lie in (0, 1]")]
    InvalidMargin(Real),
}

/// Parameters controlling [`MeshNormalizer`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationParameters {
    /// Multiplier applied to the tightest per-axis scale factor.
    ///
    /// Values slightly below 1 keep the boundary triangles from landing exactly on the
    /// last grid plane, where rounding errors would clip them.
    ///
    /// Default: `0.995`
    pub margin: Real,
    /// Offset added along axis 1 after centering, lifting the mesh off the floor plane.
    ///
    /// It is reduced to the room left between the top of the centered mesh and the
    /// top of the target box, so the normalized mesh never leaves the target box.
    ///
    /// Default: `0.2`
    pub floor_clearance: Real,
    /// Whether small holes should be closed before computing the mesh extents.
    ///
    /// Default: `true`
    pub repair_holes: bool,
    /// Largest number of boundary edges of a hole closed by the repair step.
    ///
    /// Default: `4`
    pub max_hole_edges: usize,
}

impl Default for NormalizationParameters {
    fn default() -> Self {
        Self {
            margin: 0.995,
            floor_clearance: 0.2,
            repair_holes: true,
            max_hole_edges: 4,
        }
    }
}

/// A mesh fitted into a voxel grid.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedMesh {
    /// The scaled and translated mesh.
    pub mesh: TriMesh,
    /// The uniform scale factor applied to the input mesh.
    pub scale_factor: Real,
    /// The extents of the input mesh, before any scaling.
    pub source_extents: Vector<Real>,
}

/// Fits meshes into a voxel grid while preserving their aspect ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MeshNormalizer {
    params: NormalizationParameters,
}

impl MeshNormalizer {
    /// A normalizer using the given parameters.
    pub fn new(params: NormalizationParameters) -> Self {
        Self { params }
    }

    /// The parameters of this normalizer.
    pub fn parameters(&self) -> &NormalizationParameters {
        &self.params
    }

    /// Scales and translates `mesh` so it fits, centered, inside `[0, target_shape]`.
    ///
    /// The mesh is uniformly scaled by the tightest of the per-axis ratios between
    /// `target_shape` and its extents (times the safety margin), moved so its AABB is
    /// centered in the target box, and lifted by the floor clearance along axis 1.
    /// The AABB of the result lies inside `[0, target_shape]`.
    ///
    /// Boundary chains the hole repair cannot close are logged and left open.
    pub fn normalize(
        &self,
        mesh: TriMesh,
        target_shape: [usize; 3],
    ) -> Result<NormalizedMesh, GeometryError> {
        if !(self.params.margin > 0.0 && self.params.margin <= 1.0) {
            return Err(GeometryError::InvalidMargin(self.params.margin));
        }

        for (axis, shape) in target_shape.iter().enumerate() {
            if *shape == 0 {
                return Err(GeometryError::InvalidTargetShape {
                    axis,
                    shape: *shape,
                });
            }
        }

        let mesh = if self.params.repair_holes {
            mesh.with_filled_holes(self.params.max_hole_edges)
        } else {
            mesh
        };

        let source_extents = mesh.extents();

        for axis in 0..DIM {
            let extent = source_extents[axis];
            if !(extent.is_finite() && extent > 0.0) {
                return Err(GeometryError::DegenerateExtent { axis, extent });
            }
        }

        let target = Vector::new(
            target_shape[0] as Real,
            target_shape[1] as Real,
            target_shape[2] as Real,
        );
        let scale_factor = target.component_div(&source_extents).min() * self.params.margin;
        log::debug!(
            "mesh extents {:?}, scale factor {}",
            source_extents.as_slice(),
            scale_factor
        );

        let mesh = mesh.scaled(&Vector::repeat(scale_factor));
        let mins = mesh.local_aabb().mins;
        let mesh = mesh.translated(&-mins.coords);

        // The clearance cannot exceed the room left above the centered mesh.
        let slack = (target - mesh.extents()) / 2.0;
        let clearance = self.params.floor_clearance.clamp(0.0, slack.y.max(0.0));
        if clearance < self.params.floor_clearance {
            log::debug!(
                "floor clearance reduced from {} to {} to fit the target box",
                self.params.floor_clearance,
                clearance
            );
        }

        let mesh = mesh.translated(&(slack + Vector::y() * clearance));

        Ok(NormalizedMesh {
            mesh,
            scale_factor,
            source_extents,
        })
    }
}
