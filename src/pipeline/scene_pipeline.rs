use super::{ConfigError, PipelineConfig};
use crate::mapping::{
    pixel_to_scene_ratio, CoordinateMapper, ImageId, MappingError, PixelCalibration, RatioStore,
    SharedRatioTable,
};
use crate::math::{Real, Vector};
use crate::projection::{ProjectionError, ProjectionImage};
use crate::shape::TriMesh;
use crate::transformation::voxelization::{self, GridIoError, VoxelGrid, VoxelizationError};
use crate::transformation::{GeometryError, MeshNormalizer, WavefrontError};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Errors raised by any stage of a [`ScenePipeline`].
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// The pipeline configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The scene mesh could not be loaded.
    #[error(transparent)]
    Wavefront(#[from] WavefrontError),
    /// The scene mesh cannot be fitted into the grid.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The scene mesh does not touch the grid.
    #[error(transparent)]
    Voxelization(#[from] VoxelizationError),
    /// The voxel grid could not be written.
    #[error(transparent)]
    GridIo(#[from] GridIoError),
    /// The preview image could not be computed or written.
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    /// The preview image could not be registered.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Where a [`ScenePipeline`] writes its results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneOutputs {
    /// The path of the preview image. It also identifies the image in the coordinate mapper.
    pub image_path: PathBuf,
    /// The path of the voxel grid file, if the grid should be persisted.
    pub grid_path: Option<PathBuf>,
}

impl SceneOutputs {
    /// Outputs writing only the preview image.
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            grid_path: None,
        }
    }

    /// Also persists the voxel grid at `grid_path`.
    pub fn with_grid_path(mut self, grid_path: impl Into<PathBuf>) -> Self {
        self.grid_path = Some(grid_path.into());
        self
    }
}

/// The results of processing one scene.
#[derive(Clone, Debug)]
pub struct ProcessedScene {
    /// The identity of the preview image in the coordinate mapper.
    pub image_id: ImageId,
    /// The voxelized scene.
    pub grid: VoxelGrid,
    /// The uniform scale factor applied to the scene mesh.
    pub scale_factor: Real,
    /// The extents of the scene mesh before normalization.
    pub source_extents: Vector<Real>,
    /// The calibration recorded for the preview image.
    pub calibration: PixelCalibration,
    /// The preview image.
    pub preview: ProjectionImage,
}

/// Converts scene meshes into voxel grids and annotatable preview images.
///
/// Each call is synchronous and independent from the others. The only state shared
/// between calls, possibly from several threads, is the coordinate mapper.
pub struct ScenePipeline<S = SharedRatioTable> {
    config: PipelineConfig,
    mapper: Arc<CoordinateMapper<S>>,
}

impl<S: RatioStore> ScenePipeline<S> {
    /// A pipeline recording the calibration of its preview images into `mapper`.
    pub fn new(config: PipelineConfig, mapper: Arc<CoordinateMapper<S>>) -> Self {
        Self { config, mapper }
    }

    /// The configuration of this pipeline.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The coordinate mapper of this pipeline.
    pub fn mapper(&self) -> &Arc<CoordinateMapper<S>> {
        &self.mapper
    }

    /// Loads a Wavefront scene and processes it with [`Self::process_mesh`].
    pub fn process_file(
        &self,
        mesh_path: impl AsRef<Path>,
        outputs: &SceneOutputs,
    ) -> Result<ProcessedScene, PipelineError> {
        let mesh = TriMesh::from_obj_file(mesh_path)?;
        self.process_mesh(mesh, outputs)
    }

    /// Normalizes, voxelizes and projects a scene mesh.
    ///
    /// The grid is saved if `outputs` has a grid path, the preview image is saved, and its
    /// calibration is recorded in the coordinate mapper under the image path.
    pub fn process_mesh(
        &self,
        mesh: TriMesh,
        outputs: &SceneOutputs,
    ) -> Result<ProcessedScene, PipelineError> {
        let config = &self.config;
        let target_shape = config.target_shape;

        let normalized = MeshNormalizer::new(config.normalization).normalize(mesh, target_shape)?;
        let mut grid = voxelization::voxelize(&normalized.mesh, target_shape, config.pitch)?;
        // One pixel per cell: the ratio follows the grid resolution, not the target box.
        let ratio = pixel_to_scene_ratio(grid.shape(), &normalized.source_extents);

        if config.fill_interior {
            grid = grid.fill_interior();
        }

        if let Some(grid_path) = &outputs.grid_path {
            grid.save(grid_path)?;
        }

        let preview = config.preview.project(grid.cells())?;
        preview.save(&outputs.image_path)?;

        let image_id = ImageId::from_path(&outputs.image_path);
        let calibration = PixelCalibration::new(ratio, preview.width(), preview.height());
        self.mapper.record_ratio(image_id.clone(), calibration)?;

        log::info!(
            "processed `{}`: scale factor {}, {} occupied voxels, pixel ratio {}",
            image_id,
            normalized.scale_factor,
            grid.num_occupied(),
            ratio
        );

        Ok(ProcessedScene {
            image_id,
            grid,
            scale_factor: normalized.scale_factor,
            source_extents: normalized.source_extents,
            calibration,
            preview,
        })
    }
}
