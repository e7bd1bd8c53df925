use glam::Vec3;

/// Smallest accepted hit distance, keeps rays from re-hitting their origin surface
pub const HIT_EPSILON: f32 = 1e-4;

pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Clamp near-zero components so the slab test never divides by zero
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.x) } else { 1.0 / ray_dir.x },
        if ray_dir.y.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.y) } else { 1.0 / ray_dir.y },
        if ray_dir.z.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.z) } else { 1.0 / ray_dir.z },
    );

    let t_min = (box_min - ray_origin) * inv_dir;
    let t_max = (box_max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < HIT_EPSILON {
        (t_far > HIT_EPSILON).then_some(t_far)
    } else {
        Some(t_near)
    }
}

pub fn intersect_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let half_b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-half_b - sqrt_d) / a;
    if near > HIT_EPSILON {
        return Some(near);
    }
    let far = (-half_b + sqrt_d) / a;
    (far > HIT_EPSILON).then_some(far)
}

/// Capped, possibly tapered cylinder centred on the origin with its axis along +Y.
///
/// Inputs are in the cylinder's local frame. Returns the hit distance and the
/// local surface normal.
pub fn intersect_frustum(
    ray_origin: Vec3,
    ray_dir: Vec3,
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
) -> Option<(f32, Vec3)> {
    let half = height * 0.5;
    // r(y) = a + b * y over y in [-half, half]
    let b = (radius_top - radius_bottom) / height;
    let a = (radius_top + radius_bottom) * 0.5;

    let (o, d) = (ray_origin, ray_dir);
    let r_o = a + b * o.y;
    let qa = d.x * d.x + d.z * d.z - b * b * d.y * d.y;
    let qb = 2.0 * (o.x * d.x + o.z * d.z - r_o * b * d.y);
    let qc = o.x * o.x + o.z * o.z - r_o * r_o;

    let mut best: Option<(f32, Vec3)> = None;
    let mut consider = |t: f32, normal: Vec3| {
        if t > HIT_EPSILON && best.map_or(true, |(bt, _)| t < bt) {
            best = Some((t, normal));
        }
    };

    let side_roots: [Option<f32>; 2] = if qa.abs() < 1e-8 {
        [(qb.abs() > 1e-8).then(|| -qc / qb), None]
    } else {
        let disc = qb * qb - 4.0 * qa * qc;
        if disc < 0.0 {
            [None, None]
        } else {
            let sqrt_d = disc.sqrt();
            [Some((-qb - sqrt_d) / (2.0 * qa)), Some((-qb + sqrt_d) / (2.0 * qa))]
        }
    };

    for t in side_roots.into_iter().flatten() {
        let p = o + d * t;
        let r = a + b * p.y;
        if p.y.abs() <= half && r >= 0.0 {
            consider(t, Vec3::new(p.x, -b * r, p.z).normalize_or_zero());
        }
    }

    if d.y.abs() > 1e-8 {
        for (cap_y, radius, normal) in [(half, radius_top, Vec3::Y), (-half, radius_bottom, Vec3::NEG_Y)] {
            let t = (cap_y - o.y) / d.y;
            let p = o + d * t;
            if p.x * p.x + p.z * p.z <= radius * radius {
                consider(t, normal);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_aabb_hit() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        )
        .unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let t = intersect_aabb(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(5.0, 2.0, 2.0),
            Vec3::new(10.0, 3.0, 3.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_intersect_aabb_inside() {
        let t = intersect_aabb(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::X,
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(10.0, 1.0, 1.0),
        )
        .unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_intersect_sphere_front_and_behind() {
        let t = intersect_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -5.0), 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-4);
        assert!(intersect_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    }

    #[test]
    fn test_frustum_side_hit_at_mid_radius() {
        // Straight cylinder of radius 0.5, ray along -X at mid height
        let (t, normal) =
            intersect_frustum(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, 0.5, 0.5, 2.0).unwrap();
        assert!((t - 4.5).abs() < 1e-4);
        assert!(normal.abs_diff_eq(Vec3::X, 1e-4));
    }

    #[test]
    fn test_frustum_top_cap_hit() {
        let (t, normal) =
            intersect_frustum(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 0.1, 0.15, 1.0).unwrap();
        assert!((t - 4.5).abs() < 1e-4);
        assert_eq!(normal, Vec3::Y);
    }

    #[test]
    fn test_frustum_taper_changes_radius() {
        // Radius 0.1 at the top, 0.3 at the bottom; probe near the bottom
        let hit = intersect_frustum(Vec3::new(5.0, -0.9, 0.0), Vec3::NEG_X, 0.1, 0.3, 2.0);
        let (t, _) = hit.unwrap();
        let expected_radius = 0.3 - (0.2 * 0.1 / 2.0);
        assert!((5.0 - t - expected_radius).abs() < 1e-3);

        // Passing beside the narrow top misses
        assert!(intersect_frustum(Vec3::new(5.0, 0.9, 0.2), Vec3::NEG_X, 0.1, 0.3, 2.0).is_none());
    }

    #[test]
    fn test_frustum_miss_above() {
        assert!(intersect_frustum(Vec3::new(5.0, 3.0, 0.0), Vec3::NEG_X, 0.5, 0.5, 2.0).is_none());
    }
}
