use scenevox3d::ndarray::Array3;
use scenevox3d::projection::{Channels, ProjectionMode, Projector, ToneMap};

fn random_columns(rng: &mut oorandom::Rand32) -> Array3<bool> {
    let heights = scenevox3d::ndarray::Array2::from_shape_fn((16, 24), |_| rng.rand_range(0..21));
    Array3::from_shape_fn((16, 20, 24), |(i, j, k)| (j as u32) < heights[[i, k]])
}

#[test]
fn max_projection_is_a_binary_silhouette() {
    let mut rng = oorandom::Rand32::new(5);
    let grid = random_columns(&mut rng);

    for axis in 0..3 {
        let image = Projector::new(axis, ProjectionMode::Max).project(&grid).unwrap();
        assert_eq!(image.channels(), Channels::Luma);
        assert!(image.pixels().iter().all(|v| *v == 0 || *v == 255));
    }

    let top = Projector::new(1, ProjectionMode::Max).project(&grid).unwrap();
    assert_eq!((top.height(), top.width()), (16, 24));
}

#[test]
fn average_projection_is_monotonic_in_occupancy() {
    let mut rng = oorandom::Rand32::new(11);
    let grid = random_columns(&mut rng);
    let counts = grid.map_axis(scenevox3d::ndarray::Axis(1), |lane| {
        lane.iter().filter(|v| **v).count()
    });

    for tone_map in [ToneMap::Linear, ToneMap::InvertedLinear, ToneMap::side_view()] {
        let image = Projector::new(1, ProjectionMode::Average(tone_map))
            .project(&grid)
            .unwrap();
        let pixels = image.pixels();
        let increasing = tone_map == ToneMap::Linear;

        if tone_map != ToneMap::side_view() {
            assert_eq!(pixels.iter().min(), Some(&0));
            assert_eq!(pixels.iter().max(), Some(&255));
        }

        for (a, ca) in counts.indexed_iter() {
            for (b, cb) in counts.indexed_iter() {
                if ca < cb {
                    let (pa, pb) = (pixels[a], pixels[b]);
                    assert!(if increasing { pa <= pb } else { pa >= pb });
                }
            }
        }
    }
}

#[test]
fn numeric_grids_are_projected_like_boolean_grids() {
    let mut rng = oorandom::Rand32::new(13);
    let grid = random_columns(&mut rng);
    let as_u8 = grid.mapv(|v| v as u8);
    let as_f32 = grid.mapv(|v| if v { 1.0f32 } else { 0.0 });
    let projector = Projector::floor_preview().with_slab(0..20);

    let expected = projector.project(&grid).unwrap();
    assert_eq!(projector.project(&as_u8).unwrap(), expected);
    assert_eq!(projector.project(&as_f32.into_dyn()).unwrap(), expected);
}
