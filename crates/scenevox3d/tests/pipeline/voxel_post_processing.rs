use scenevox3d::bounding_volume::Aabb;
use scenevox3d::math::Point;
use scenevox3d::ndarray::Array3;
use scenevox3d::shape::TriMesh;
use scenevox3d::transformation::voxelization::{self, ShapeError, VoxelGrid};

fn random_grid(rng: &mut oorandom::Rand32, shape: [usize; 3], density: f32) -> VoxelGrid {
    let cells = Array3::from_shape_fn(shape, |_| rng.rand_float() < density);
    VoxelGrid::from_cells(cells)
}

#[test]
fn pad_then_crop_recovers_the_grid() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..50 {
        let shape = [
            1 + rng.rand_range(0..12) as usize,
            1 + rng.rand_range(0..12) as usize,
            1 + rng.rand_range(0..12) as usize,
        ];
        let target = [
            shape[0] + rng.rand_range(0..7) as usize,
            shape[1] + rng.rand_range(0..7) as usize,
            shape[2] + rng.rand_range(0..7) as usize,
        ];
        let grid = random_grid(&mut rng, shape, 0.3);

        let padded = grid.pad(target).unwrap();
        let offsets = VoxelGrid::pad_offsets(shape, target).unwrap();

        assert_eq!(padded.shape(), target);
        assert_eq!(padded.num_occupied(), grid.num_occupied());
        assert_eq!(offsets[1], 0);
        // Odd remainders go to the trailing side.
        for axis in [0, 2] {
            let leading = offsets[axis];
            let trailing = target[axis] - shape[axis] - leading;
            assert!(trailing == leading || trailing == leading + 1);
        }
        assert_eq!(padded.crop(offsets, shape).unwrap(), grid);
    }
}

#[test]
fn pad_never_shrinks() {
    let grid = VoxelGrid::new([10, 10, 10]);
    assert_eq!(
        grid.pad([12, 12, 9]),
        Err(ShapeError::TargetTooSmall {
            axis: 2,
            size: 10,
            target: 9
        })
    );
}

#[test]
fn fill_interior_is_idempotent() {
    let mut rng = oorandom::Rand32::new(3);

    for density in [0.1, 0.3, 0.5, 0.7] {
        let grid = random_grid(&mut rng, [9, 7, 11], density);
        let filled = grid.fill_interior();

        assert_eq!(filled.fill_interior(), filled);
        // Filling only adds cells.
        assert!(grid
            .cells()
            .iter()
            .zip(filled.cells().iter())
            .all(|(before, after)| !*before || *after));
    }
}

#[test]
fn voxelized_box_shell_fills_to_a_solid() {
    let mesh = TriMesh::from(Aabb::new(
        Point::new(2.5, 0.5, 3.5),
        Point::new(17.5, 9.5, 12.5),
    ));
    let shell = voxelization::voxelize(&mesh, [20, 10, 16], 1.0).unwrap();
    let (mins, maxs) = shell.occupied_bounds().unwrap();
    assert_eq!((mins, maxs), ([2, 0, 3], [17, 9, 12]));

    let solid = shell.fill_interior();
    let dims: Vec<_> = (0..3).map(|a| maxs[a] - mins[a] + 1).collect();
    assert_eq!(solid.num_occupied(), dims.iter().product::<usize>());
    assert!(solid.get([10, 5, 8]));
    assert!(!shell.get([10, 5, 8]));
}
