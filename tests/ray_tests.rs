use furniture_configurator::math::{intersect_aabb, intersect_frustum, intersect_sphere};
use furniture_configurator::scene::{Axis, PlacedMesh, Shape};
use glam::Vec3;

#[cfg(test)]
mod ray_intersection_tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_from_outside() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Ray should hit AABB");

        assert!((t - 5.0).abs() < 0.001, "Hit distance should be ~5.0, got {}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let t = intersect_aabb(Vec3::ZERO, Vec3::X, Vec3::splat(5.0), Vec3::splat(10.0));
        assert_eq!(t, None, "Ray should miss AABB");
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let t = intersect_aabb(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::X,
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        );
        assert_eq!(t, Some(5.0), "Should return exit distance when ray starts inside");
    }

    #[test]
    fn test_box_behind_ray_is_missed() {
        let t = intersect_aabb(Vec3::ZERO, Vec3::X, Vec3::new(-10.0, -1.0, -1.0), Vec3::new(-5.0, 1.0, 1.0));
        assert_eq!(t, None);
    }

    #[test]
    fn test_sphere_near_and_far_hits() {
        let t = intersect_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-5);

        // From inside, the far side is hit
        let t = intersect_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 1.0);
        assert!((t.unwrap() - 1.0).abs() < 1e-5);

        assert!(intersect_sphere(Vec3::new(0.0, 3.0, 5.0), Vec3::NEG_Z, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_tapered_cylinder_side_and_caps() {
        // Radius 0.1 at the top, 0.15 at the bottom, 1 m tall
        let (t, normal) =
            intersect_frustum(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_X, 0.1, 0.15, 1.0).unwrap();
        assert!((t - (2.0 - 0.125)).abs() < 1e-4);
        assert!(normal.x > 0.9);

        let (t, normal) =
            intersect_frustum(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y, 0.1, 0.15, 1.0).unwrap();
        assert!((t - 1.5).abs() < 1e-4);
        assert_eq!(normal, Vec3::Y);

        // Misses the narrow top cap and meets the flaring side where the radius reaches 0.12
        let (t, normal) =
            intersect_frustum(Vec3::new(0.12, 2.0, 0.0), Vec3::NEG_Y, 0.1, 0.15, 1.0).unwrap();
        assert!((t - 1.9).abs() < 1e-3);
        assert!(normal.x > 0.9);
        assert!(intersect_frustum(Vec3::new(0.2, 2.0, 0.0), Vec3::NEG_Y, 0.1, 0.15, 1.0).is_none());
    }

    #[test]
    fn test_horizontal_cylinder_mesh() {
        let bar = PlacedMesh {
            label: "hanging-bar",
            shape: Shape::Cylinder {
                radius_top: 0.02,
                radius_bottom: 0.02,
                length: 1.0,
                axis: Axis::X,
            },
            center: Vec3::new(0.0, 1.5, 0.0),
            material_override: None,
        };

        let (t, normal) = bar.intersect(Vec3::new(0.3, 1.5, 2.0), Vec3::NEG_Z).unwrap();
        assert!((t - 1.98).abs() < 1e-4);
        assert!(normal.z > 0.9);

        // Beyond the end cap
        assert!(bar.intersect(Vec3::new(0.6, 1.5, 2.0), Vec3::NEG_Z).is_none());
    }

    #[test]
    fn test_box_mesh_normal_faces_the_ray() {
        let panel = PlacedMesh {
            label: "panel",
            shape: Shape::Box { size: Vec3::new(1.2, 0.03, 0.4) },
            center: Vec3::new(0.0, 0.4, 0.0),
            material_override: None,
        };

        let (t, normal) = panel.intersect(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y).unwrap();
        assert!((t - (2.0 - 0.415)).abs() < 1e-4);
        assert_eq!(normal, Vec3::Y);
    }
}
