use crate::{centered_cube, temp_path};
use scenevox3d::mapping::{CoordinateMapper, MappingError};
use scenevox3d::na::Point2;
use scenevox3d::pipeline::{PipelineConfig, PipelineError, SceneOutputs, ScenePipeline};
use scenevox3d::projection::{ProjectionMode, Projector};
use scenevox3d::transformation::voxelization::VoxelGrid;
use std::sync::Arc;

// A 4 x 1 x 6 room without ceiling, made of quads.
const ROOM_OBJ: &str = "\
o room
v -2.0 0.0 -3.0
v 2.0 0.0 -3.0
v 2.0 0.0 3.0
v -2.0 0.0 3.0
v -2.0 1.0 -3.0
v 2.0 1.0 -3.0
v 2.0 1.0 3.0
v -2.0 1.0 3.0
g floor
f 1 2 3 4
g walls
f 1 5 6 2
f 2 6 7 3
f 3 7 8 4
f 4 8 5 1
";

fn small_config() -> PipelineConfig {
    let mut config = PipelineConfig {
        target_shape: [40, 10, 60],
        preview: Projector::new(1, ProjectionMode::Max),
        ..Default::default()
    };
    config.normalization.floor_clearance = 0.0;
    config
}

#[test]
fn scene_file_is_voxelized_projected_and_registered() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mesh_path = temp_path("room.obj");
    std::fs::write(&mesh_path, ROOM_OBJ).unwrap();

    let outputs = SceneOutputs::new(temp_path("room.png")).with_grid_path(temp_path("room.svxg"));
    let mapper = Arc::new(CoordinateMapper::new());
    let pipeline = ScenePipeline::new(small_config(), mapper.clone());

    let scene = pipeline.process_file(&mesh_path, &outputs).unwrap();

    approx::assert_relative_eq!(scene.scale_factor, 9.95, epsilon = 1.0e-9);
    approx::assert_relative_eq!(scene.calibration.ratio, 10.0, epsilon = 1.0e-9);
    assert_eq!(scene.grid.shape(), [40, 10, 60]);
    assert_eq!((scene.preview.width(), scene.preview.height()), (60, 40));

    // The open ceiling is a small hole: it is closed before voxelization.
    let (mins, maxs) = scene.grid.occupied_bounds().unwrap();
    assert_eq!(mins[1], 0);
    assert_eq!(maxs[1], 9);
    assert!(scene.grid.get([20, 9, 30]));

    let saved = VoxelGrid::load(outputs.grid_path.as_ref().unwrap()).unwrap();
    assert_eq!(saved, scene.grid);
    assert!(outputs.image_path.exists());

    let image = image::open(&outputs.image_path).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (60, 40));
    assert_eq!(image.get_pixel(30, 20).0, [255]);

    // Annotations on the preview map back to the scene.
    let corner = mapper
        .to_scene(&scene.image_id, &Point2::new(30.0 + 15.0, 20.0 - 5.0))
        .unwrap();
    approx::assert_relative_eq!(corner, Point2::new(1.5, 0.5), epsilon = 1.0e-9);

    // Ratios are never overwritten.
    assert!(matches!(
        pipeline.process_file(&mesh_path, &outputs),
        Err(PipelineError::Mapping(MappingError::AlreadyRecorded(_)))
    ));

    for path in [mesh_path, outputs.image_path, outputs.grid_path.unwrap()] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn pixel_ratio_follows_the_voxel_pitch() {
    let mesh_path = temp_path("coarse-room.obj");
    std::fs::write(&mesh_path, ROOM_OBJ).unwrap();

    let config = PipelineConfig {
        pitch: 2.0,
        ..small_config()
    };
    let outputs = SceneOutputs::new(temp_path("coarse-room.png"));
    let mapper = Arc::new(CoordinateMapper::new());
    let pipeline = ScenePipeline::new(config, mapper.clone());

    let scene = pipeline.process_file(&mesh_path, &outputs).unwrap();
    assert_eq!(scene.grid.shape(), [20, 5, 30]);
    assert_eq!((scene.preview.width(), scene.preview.height()), (30, 20));
    approx::assert_relative_eq!(scene.calibration.ratio, 5.0, epsilon = 1.0e-9);

    // The corner of the room lands on the corner of the image.
    let corner = mapper
        .to_pixel(&scene.image_id, &Point2::new(3.0, 2.0))
        .unwrap();
    approx::assert_relative_eq!(corner, Point2::new(30.0, 0.0), epsilon = 1.0e-9);
    let (_, maxs) = scene.grid.occupied_bounds().unwrap();
    assert_eq!((maxs[0], maxs[2]), (19, 29));

    for path in [mesh_path, outputs.image_path] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn default_preview_handles_short_grids() {
    let config = PipelineConfig::from_toml_str("target_shape = [20, 5, 30]\nfill_interior = true")
        .unwrap();
    assert_eq!(config.preview, Projector::floor_preview());

    let outputs = SceneOutputs::new(temp_path("short-grid.png"));
    let pipeline = ScenePipeline::new(config, Arc::new(CoordinateMapper::new()));
    let scene = pipeline.process_mesh(centered_cube(1.0), &outputs).unwrap();

    assert_eq!(scene.grid.shape(), [20, 5, 30]);
    assert_eq!((scene.preview.width(), scene.preview.height()), (30, 20));
    // Empty columns are white, the footprint of the cube is darker.
    assert_eq!(scene.preview.pixels()[[0, 0]], 255);
    assert!(scene.preview.pixels()[[10, 15]] < 255);

    let _ = std::fs::remove_file(outputs.image_path);
}

#[test]
fn configuration_errors_surface_as_pipeline_errors() {
    let path = temp_path("missing-config.toml");
    let err: PipelineError = PipelineConfig::load(&path).unwrap_err().into();
    assert!(matches!(err, PipelineError::Config(_)));

    let pipeline = ScenePipeline::new(small_config(), Arc::new(CoordinateMapper::new()));
    let outputs = SceneOutputs::new(temp_path("never-written.png"));
    assert!(matches!(
        pipeline.process_file(temp_path("missing.obj"), &outputs),
        Err(PipelineError::Wavefront(_))
    ));
}
