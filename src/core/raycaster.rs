use glam::Vec3;

use super::display_context::DisplayContext;
use super::frame::Frame;
use crate::camera::OrbitCamera;
use crate::configurator::Configuration;
use crate::materials::{Shading, SurfaceMaterial};
use crate::math::{intersect_aabb, Rgb, AABB};
use crate::scene::PlacedMesh;

pub const BACKGROUND: Rgb = Rgb::from_u32(0xF0F0F0);
const AMBIENT_COLOR: Rgb = Rgb::from_u32(0x404040);
const AMBIENT_INTENSITY: f32 = 0.6;
const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
const LIGHT_INTENSITY: f32 = 0.8;
/// Reflectance of non-metals at normal incidence
const DIELECTRIC_SPECULAR: f32 = 0.04;

/// CPU ray caster for the configurator scene
///
/// Primary rays only. Opaque surfaces stop the ray, transparent ones are
/// blended front to back over whatever lies behind them.
pub struct Raycaster {
    meshes: Vec<(PlacedMesh, SurfaceMaterial)>,
    bounds: Option<AABB>,
    light_dir: Vec3,
}

impl Raycaster {
    pub fn new(configuration: &Configuration) -> Self {
        let meshes = configuration.surfaces();
        let bounds = meshes
            .iter()
            .map(|(mesh, _)| mesh.bounds())
            .reduce(|acc, b| acc.union(&b));
        Self {
            meshes,
            bounds,
            light_dir: LIGHT_POSITION.normalize(),
        }
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Render the scene as seen from `camera`
    pub fn render(&self, camera: &OrbitCamera, context: &DisplayContext, revision: u64) -> Frame {
        let (width, height) = (context.width, context.height);
        let origin = camera.position();
        let (forward, right, up) = (camera.forward(), camera.right(), camera.up());
        let half_height = (camera.fov() * 0.5).tan();
        let half_width = half_height * context.aspect();

        let mut pixels = Vec::with_capacity(context.pixel_count());
        for y in 0..height {
            let v = 1.0 - 2.0 * (y as f32 + 0.5) / height as f32;
            for x in 0..width {
                let u = 2.0 * (x as f32 + 0.5) / width as f32 - 1.0;
                let dir = (forward + right * (u * half_width) + up * (v * half_height)).normalize();
                pixels.push(to_rgba8(self.trace(origin, dir)));
            }
        }

        Frame::new(revision, width, height, pixels)
    }

    /// Colour seen along one ray, channels in 0..=1
    pub fn trace(&self, origin: Vec3, dir: Vec3) -> Vec3 {
        let background = Vec3::from_array(BACKGROUND.to_array());
        let inside_bounds = self.bounds.is_some_and(|b| {
            b.contains(origin, 0.0)
                || intersect_aabb(origin, dir, b.min, b.max).is_some()
        });
        if !inside_bounds {
            return background;
        }

        let mut hits: Vec<(f32, Vec3, &SurfaceMaterial)> = self
            .meshes
            .iter()
            .filter_map(|(mesh, surface)| {
                mesh.intersect(origin, dir).map(|(t, normal)| (t, normal, surface))
            })
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut color = Vec3::ZERO;
        let mut coverage = 0.0_f32;
        for (_, normal, surface) in hits {
            // Shade the face turned towards the viewer
            let normal = if normal.dot(dir) > 0.0 { -normal } else { normal };
            let alpha = if surface.transparent { surface.opacity } else { 1.0 };
            color += (1.0 - coverage) * alpha * self.shade(surface, normal, -dir);
            coverage += (1.0 - coverage) * alpha;
            if coverage >= 0.999 {
                return color;
            }
        }
        color + (1.0 - coverage) * background
    }

    fn shade(&self, surface: &SurfaceMaterial, normal: Vec3, to_eye: Vec3) -> Vec3 {
        let base = Vec3::from_array(surface.color.to_array());
        let ambient = Vec3::from_array(AMBIENT_COLOR.to_array()) * AMBIENT_INTENSITY;
        let n_dot_l = normal.dot(self.light_dir).max(0.0);

        match surface.shading {
            Shading::Lambert => base * (ambient + Vec3::splat(n_dot_l * LIGHT_INTENSITY)),
            Shading::Standard | Shading::Physical => {
                let diffuse = base * (1.0 - surface.metalness * 0.5);
                let specular_color = Vec3::splat(DIELECTRIC_SPECULAR).lerp(base, surface.metalness);
                let half = (self.light_dir + to_eye).normalize_or_zero();
                let shininess = 2.0 / (surface.roughness * surface.roughness).max(1e-4);
                let highlight = if n_dot_l > 0.0 {
                    normal.dot(half).max(0.0).powf(shininess)
                } else {
                    0.0
                };
                diffuse * (ambient + Vec3::splat(n_dot_l * LIGHT_INTENSITY))
                    + specular_color * highlight * LIGHT_INTENSITY
            }
        }
    }
}

fn to_rgba8(color: Vec3) -> [u8; 4] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, 255]
}
