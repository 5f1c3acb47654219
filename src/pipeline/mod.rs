//! End-to-end processing of an uploaded scene.

pub use self::config::{ConfigError, PipelineConfig};
pub use self::scene_pipeline::{PipelineError, ProcessedScene, SceneOutputs, ScenePipeline};

mod config;
mod scene_pipeline;
