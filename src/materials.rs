use serde::Serialize;

use crate::math::{Rgb, HARDWARE_GRAY};
use crate::scene::MaterialOverride;
use crate::types::MaterialKind;

/// Lighting model a surface is shaded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// Diffuse only
    Lambert,
    /// Metal/roughness with specular highlights
    Standard,
    /// Standard plus transmission
    Physical,
}

/// Render-ready surface description
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceMaterial {
    pub shading: Shading,
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    pub transmission: f32,
    pub transparent: bool,
}

impl SurfaceMaterial {
    pub fn wood(color: Rgb) -> Self {
        Self {
            shading: Shading::Lambert,
            color,
            metalness: 0.0,
            roughness: 1.0,
            opacity: 1.0,
            transmission: 0.0,
            transparent: false,
        }
    }

    pub fn metal(color: Rgb) -> Self {
        Self {
            shading: Shading::Standard,
            color,
            metalness: 0.8,
            roughness: 0.2,
            opacity: 1.0,
            transmission: 0.0,
            transparent: false,
        }
    }

    pub fn glass(color: Rgb) -> Self {
        Self {
            shading: Shading::Physical,
            color,
            metalness: 0.0,
            roughness: 0.05,
            opacity: 0.3,
            transmission: 0.9,
            transparent: true,
        }
    }
}

/// Surface for the customer's material choice
pub fn surface_for(color: Rgb, kind: MaterialKind) -> SurfaceMaterial {
    match kind {
        MaterialKind::Wood => SurfaceMaterial::wood(color),
        MaterialKind::Metal => SurfaceMaterial::metal(color),
        MaterialKind::Glass => SurfaceMaterial::glass(color),
    }
}

/// Surface for one mesh: tags win over the customer's choice
pub fn resolve(tag: Option<MaterialOverride>, color: Rgb, kind: MaterialKind) -> SurfaceMaterial {
    match tag {
        Some(MaterialOverride::Metal) => SurfaceMaterial::metal(HARDWARE_GRAY),
        Some(MaterialOverride::Glass) => SurfaceMaterial::glass(color),
        None => surface_for(color, kind),
    }
}
