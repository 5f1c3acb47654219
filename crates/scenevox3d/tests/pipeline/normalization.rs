use crate::centered_cube;
use scenevox3d::bounding_volume::Aabb;
use scenevox3d::math::{Point, Vector};
use scenevox3d::shape::TriMesh;
use scenevox3d::transformation::voxelization::{self, VoxelGrid};
use scenevox3d::transformation::{GeometryError, MeshNormalizer};

const TARGET_SHAPE: [usize; 3] = [400, 100, 600];

#[test]
fn normalized_meshes_fit_the_target_box() {
    let mut rng = oorandom::Rand64::new(7);
    let normalizer = MeshNormalizer::default();
    let target = Aabb::new(
        Point::origin(),
        Point::new(400.0, 100.0, 600.0),
    );

    for _ in 0..200 {
        let mins = Point::new(
            rng.rand_float() * 20.0 - 10.0,
            rng.rand_float() * 20.0 - 10.0,
            rng.rand_float() * 20.0 - 10.0,
        );
        let extents = Vector::new(
            0.1 + rng.rand_float() * 50.0,
            0.1 + rng.rand_float() * 5.0,
            0.1 + rng.rand_float() * 50.0,
        );
        let mesh = TriMesh::from(Aabb::new(mins, mins + extents));
        let result = normalizer.normalize(mesh, TARGET_SHAPE).unwrap();

        assert!(result.scale_factor > 0.0);
        assert!(
            target.contains_with_tolerance(result.mesh.local_aabb(), 1.0e-9),
            "{:?} exceeds the target box",
            result.mesh.local_aabb()
        );
        // The aspect ratio is preserved.
        let scaled = result.mesh.extents();
        approx::assert_relative_eq!(
            scaled,
            extents * result.scale_factor,
            max_relative = 1.0e-9
        );
    }
}

#[test]
fn default_floor_clearance_fits_small_targets() {
    let mut rng = oorandom::Rand64::new(11);
    let normalizer = MeshNormalizer::default();

    for _ in 0..200 {
        let shape = [
            1 + rng.rand_range(0..8) as usize,
            1 + rng.rand_range(0..8) as usize,
            1 + rng.rand_range(0..8) as usize,
        ];
        let extents = Vector::new(
            0.1 + rng.rand_float() * 10.0,
            0.1 + rng.rand_float() * 10.0,
            0.1 + rng.rand_float() * 10.0,
        );
        let mesh = TriMesh::from(Aabb::new(Point::origin(), Point::from(extents)));
        let result = normalizer.normalize(mesh, shape).unwrap();

        let target = Aabb::new(
            Point::origin(),
            Point::new(shape[0] as f64, shape[1] as f64, shape[2] as f64),
        );
        assert!(
            target.contains_with_tolerance(result.mesh.local_aabb(), 1.0e-9),
            "{:?} exceeds the target box {:?}",
            result.mesh.local_aabb(),
            shape
        );
    }

    // Large targets keep the full clearance.
    let result = normalizer.normalize(centered_cube(1.0), TARGET_SHAPE).unwrap();
    approx::assert_relative_eq!(
        result.mesh.local_aabb().center().y,
        50.2,
        epsilon = 1.0e-9
    );
}

#[test]
fn cube_is_centered_in_the_grid_and_flush_after_padding() {
    let result = MeshNormalizer::default()
        .normalize(centered_cube(1.0), TARGET_SHAPE)
        .unwrap();
    approx::assert_relative_eq!(result.scale_factor, 49.75, epsilon = 1.0e-9);

    let grid = voxelization::voxelize(&result.mesh, TARGET_SHAPE, 1.0).unwrap();
    assert_eq!(grid.shape(), TARGET_SHAPE);

    let (mins, maxs) = grid.occupied_bounds().unwrap();
    assert_eq!(mins, [150, 0, 250]);
    assert_eq!(maxs, [249, 99, 349]);

    for axis in 0..3 {
        assert_eq!(
            mins[axis],
            TARGET_SHAPE[axis] - 1 - maxs[axis],
            "the occupied region is off-center along axis {}",
            axis
        );
    }

    let padded = grid.pad([500, 150, 700]).unwrap();
    let offsets = VoxelGrid::pad_offsets(TARGET_SHAPE, [500, 150, 700]).unwrap();
    assert_eq!(offsets, [50, 0, 50]);
    assert_eq!(
        padded.occupied_bounds(),
        Some(([200, 0, 300], [299, 99, 399]))
    );
    assert_eq!(padded.num_occupied(), grid.num_occupied());
}

#[test]
fn degenerate_meshes_are_rejected() {
    // A single horizontal quad.
    let vertices = vec![
        Point::new(0.0, 1.0, 0.0),
        Point::new(2.0, 1.0, 0.0),
        Point::new(2.0, 1.0, 3.0),
        Point::new(0.0, 1.0, 3.0),
    ];
    let mesh = TriMesh::new(vertices, vec![[0, 1, 2], [0, 2, 3]]).unwrap();
    let err = MeshNormalizer::default()
        .normalize(mesh, TARGET_SHAPE)
        .unwrap_err();

    match err {
        GeometryError::DegenerateExtent { axis, extent } => {
            assert_eq!(axis, 1);
            assert_eq!(extent, 0.0);
        }
        other => panic!("unexpected error: {}", other),
    }

    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(f64::NAN, 1.0, 0.0),
        Point::new(0.0, 1.0, 1.0),
    ];
    let mesh = TriMesh::new(vertices, vec![[0, 1, 2]]).unwrap();
    assert!(matches!(
        MeshNormalizer::default().normalize(mesh, TARGET_SHAPE),
        Err(GeometryError::DegenerateExtent { .. })
    ));
}
