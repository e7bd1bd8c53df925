use furniture_configurator::configurator::configure;
use furniture_configurator::math::AABB;
use furniture_configurator::types::{ConfigInput, FurnitureType};
use glam::Vec3;

#[cfg(test)]
mod aabb_tests {
    use super::*;

    #[test]
    fn test_aabb_union_creates_bounding_box() {
        let aabb1 = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let aabb2 = AABB::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.5, 1.5, 1.5));

        let union = aabb1.union(&aabb2);

        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn test_aabb_union_with_contained_box() {
        let outer = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let inner = AABB::from_center_size(Vec3::ZERO, Vec3::splat(0.5));

        let union = outer.union(&inner);

        assert_eq!(union, outer);
    }

    #[test]
    fn test_center_and_size() {
        let aabb = AABB::from_center_size(Vec3::new(0.0, 0.4, 0.0), Vec3::new(1.2, 0.8, 0.4));
        assert!(aabb.center().abs_diff_eq(Vec3::new(0.0, 0.4, 0.0), 1e-6));
        assert!(aabb.size().abs_diff_eq(Vec3::new(1.2, 0.8, 0.4), 1e-6));
        assert!(aabb.contains(Vec3::new(0.6, 0.0, 0.2), 1e-6));
        assert!(!aabb.contains(Vec3::new(0.7, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_every_piece_stands_on_the_floor_centred() {
        for furniture_type in FurnitureType::ALL {
            let config = configure(&ConfigInput::for_type(furniture_type));
            let bounds = config.scene.bounds().expect("non-empty scene");
            let size = config.dimensions().to_meters();

            assert!(bounds.min.y >= -1e-4, "{furniture_type} sinks below the floor");
            assert!(bounds.max.y <= size.y + 1e-3, "{furniture_type} is taller than requested");
            assert!(
                bounds.center().x.abs() < 1e-3,
                "{furniture_type} is not centred on x: {:?}",
                bounds
            );
        }
    }
}
