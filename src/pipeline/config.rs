use crate::math::Real;
use crate::projection::Projector;
use crate::transformation::NormalizationParameters;
use std::path::Path;

/// Errors raised while loading a [`PipelineConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read the configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parameters of a [`super::ScenePipeline`].
///
/// Missing fields take their default values, so a configuration file only needs to list
/// the parameters it changes:
///
/// ```toml
/// target_shape = [200, 50, 300]
/// fill_interior = true
///
/// [normalization]
/// floor_clearance = 0.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// The extents of the box the scene is fitted into, in scene units after normalization.
    ///
    /// Default: `[400, 100, 600]`
    pub target_shape: [usize; 3],
    /// The size of a voxel.
    ///
    /// Default: `1.0`
    pub pitch: Real,
    /// Whether the voxelized shell is turned into a solid.
    ///
    /// Default: `false`
    pub fill_interior: bool,
    /// How the scene is fitted into the target box.
    pub normalization: NormalizationParameters,
    /// The projection generating the preview image.
    ///
    /// Default: [`Projector::floor_preview`]
    pub preview: Projector,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_shape: [400, 100, 600],
            pitch: 1.0,
            fill_interior: false,
            normalization: NormalizationParameters::default(),
            preview: Projector::floor_preview(),
        }
    }
}

impl PipelineConfig {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Serializes this configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
