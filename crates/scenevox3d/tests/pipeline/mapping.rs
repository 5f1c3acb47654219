use scenevox3d::mapping::{
    pixel_to_scene_ratio, CoordinateMapper, ImageId, MappingError, PixelCalibration, RatioStore,
};
use scenevox3d::math::Vector;
use scenevox3d::na::Point2;
use std::sync::Arc;
use std::thread;

#[test]
fn scene_to_pixel_round_trip() {
    let mut rng = oorandom::Rand64::new(1234);
    let mapper = CoordinateMapper::new();

    for i in 0..20 {
        let extents = Vector::new(
            0.5 + rng.rand_float() * 20.0,
            0.5 + rng.rand_float() * 3.0,
            0.5 + rng.rand_float() * 20.0,
        );
        let ratio = pixel_to_scene_ratio([400, 100, 600], &extents);
        let id = ImageId::new(format!("scene-{}.png", i));
        mapper
            .record_ratio(id.clone(), PixelCalibration::new(ratio, 600, 400))
            .unwrap();

        for _ in 0..50 {
            let scene = Point2::new(
                rng.rand_float() * 100.0 - 50.0,
                rng.rand_float() * 100.0 - 50.0,
            );
            let pixel = mapper.to_pixel(&id, &scene).unwrap();
            let back = mapper.to_scene(&id, &pixel).unwrap();
            approx::assert_relative_eq!(back, scene, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn unknown_images_are_reported() {
    let mapper = CoordinateMapper::new();
    let id = ImageId::new("never-generated.png");
    assert_eq!(
        mapper.to_pixel(&id, &Point2::origin()),
        Err(MappingError::UnknownImage(id.clone()))
    );
    assert_eq!(
        mapper.calibration(&id),
        Err(MappingError::UnknownImage(id))
    );
}

#[test]
fn concurrent_sessions_share_the_mapper() {
    let mapper = Arc::new(CoordinateMapper::new());

    let handles: Vec<_> = (0..8)
        .map(|session| {
            let mapper = mapper.clone();
            thread::spawn(move || {
                for image in 0..100 {
                    let id = ImageId::new(format!("session-{}/image-{}.png", session, image));
                    let ratio = 1.0 + session as f64 + image as f64 / 100.0;
                    mapper
                        .record_ratio(id.clone(), PixelCalibration::new(ratio, 600, 400))
                        .unwrap();

                    let pixel = mapper.to_pixel(&id, &Point2::new(1.0, 1.0)).unwrap();
                    approx::assert_relative_eq!(pixel, Point2::new(300.0 + ratio, 200.0 - ratio));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(mapper.store().len(), 800);
}
