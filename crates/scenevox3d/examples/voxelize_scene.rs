//! Voxelizes a Wavefront scene and writes its grid and preview image next to it.
//!
//! ```text
//! RUST_LOG=debug cargo run --example voxelize_scene -- scene.obj [config.toml]
//! ```

use scenevox3d::mapping::CoordinateMapper;
use scenevox3d::na::Point2;
use scenevox3d::pipeline::{PipelineConfig, PipelineError, SceneOutputs, ScenePipeline};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(mesh_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: voxelize_scene <scene.obj> [config.toml]");
        std::process::exit(2);
    };
    let config = match args.next() {
        Some(config_path) => PipelineConfig::load(config_path)?,
        None => PipelineConfig::default(),
    };

    let outputs = SceneOutputs::new(mesh_path.with_extension("png"))
        .with_grid_path(mesh_path.with_extension("svxg"));
    let mapper = Arc::new(CoordinateMapper::new());
    let pipeline = ScenePipeline::new(config, mapper.clone());
    let scene = pipeline.process_file(&mesh_path, &outputs)?;

    println!("scale factor: {}", scene.scale_factor);
    println!("occupied voxels: {}", scene.grid.num_occupied());
    println!("preview: {}", outputs.image_path.display());

    // The scene point shown by the top-left corner of the preview.
    let corner = mapper.to_scene(&scene.image_id, &Point2::origin())?;
    println!("top-left corner: ({:.3}, {:.3})", corner.x, corner.y);

    Ok(())
}
