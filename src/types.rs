use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Rgb;

/// Furniture families the configurator knows how to build and price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureType {
    #[default]
    Shelf,
    DrawerUnit,
    Desk,
    Closet,
    EntertainmentCenter,
    Kitchen,
    Table,
}

impl FurnitureType {
    pub const ALL: [FurnitureType; 7] = [
        FurnitureType::Shelf,
        FurnitureType::DrawerUnit,
        FurnitureType::Desk,
        FurnitureType::Closet,
        FurnitureType::EntertainmentCenter,
        FurnitureType::Kitchen,
        FurnitureType::Table,
    ];

    /// Canonical kebab-case identifier
    pub const fn name(self) -> &'static str {
        match self {
            FurnitureType::Shelf => "shelf",
            FurnitureType::DrawerUnit => "drawer-unit",
            FurnitureType::Desk => "desk",
            FurnitureType::Closet => "closet",
            FurnitureType::EntertainmentCenter => "entertainment-center",
            FurnitureType::Kitchen => "kitchen",
            FurnitureType::Table => "table",
        }
    }

    /// Human readable label for the UI
    pub const fn label(self) -> &'static str {
        match self {
            FurnitureType::Shelf => "Shelf",
            FurnitureType::DrawerUnit => "Drawer unit",
            FurnitureType::Desk => "Desk",
            FurnitureType::Closet => "Closet",
            FurnitureType::EntertainmentCenter => "Entertainment center",
            FurnitureType::Kitchen => "Kitchen",
            FurnitureType::Table => "Table",
        }
    }

    /// Parse a type name, falling back to the shelf profile for anything unknown
    pub fn parse_lossy(value: &str) -> Self {
        value.parse().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to shelf");
            FurnitureType::Shelf
        })
    }
}

impl fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FurnitureType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "shelf" | "repisa" | "repisas" => Ok(FurnitureType::Shelf),
            "drawer-unit" | "drawer" | "drawers" | "gavetero" | "gaveteros" => {
                Ok(FurnitureType::DrawerUnit)
            }
            "desk" | "escritorio" | "escritorios" => Ok(FurnitureType::Desk),
            "closet" | "closets" | "wardrobe" => Ok(FurnitureType::Closet),
            "entertainment-center" | "entertainment" | "tv-unit" | "entretenimiento" => {
                Ok(FurnitureType::EntertainmentCenter)
            }
            "kitchen" | "cocina" | "cocinas" => Ok(FurnitureType::Kitchen),
            "table" | "mesa" | "mesas" => Ok(FurnitureType::Table),
            _ => Err(anyhow!("unknown furniture type '{}'", s.trim())),
        }
    }
}

/// Base material picked by the customer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Wood,
    Metal,
    Glass,
}

impl MaterialKind {
    /// Ordered by price rank
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Wood, MaterialKind::Metal, MaterialKind::Glass];

    pub const fn name(self) -> &'static str {
        match self {
            MaterialKind::Wood => "wood",
            MaterialKind::Metal => "metal",
            MaterialKind::Glass => "glass",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaterialKind::Wood => "Wood",
            MaterialKind::Metal => "Metal",
            MaterialKind::Glass => "Glass",
        }
    }

    /// Multiplier applied to the raw price
    pub const fn price_multiplier(self) -> f64 {
        match self {
            MaterialKind::Wood => 1.0,
            MaterialKind::Metal => 1.3,
            MaterialKind::Glass => 1.8,
        }
    }

    pub fn parse_lossy(value: &str) -> Self {
        value.parse().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to wood");
            MaterialKind::Wood
        })
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wood" | "madera" => Ok(MaterialKind::Wood),
            "metal" => Ok(MaterialKind::Metal),
            "glass" | "vidrio" => Ok(MaterialKind::Glass),
            other => Err(anyhow!("unknown material '{}'", other)),
        }
    }
}

/// Width, height and depth in centimetres, as entered on the sliders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    /// Same dimensions in metres (scene units)
    pub fn to_meters(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth) / 100.0
    }

    /// Footprint in m² (width × height, the face the customer sees)
    pub fn area_m2(&self) -> f64 {
        self.width as f64 * self.height as f64 / 10_000.0
    }

    pub fn volume_m3(&self) -> f64 {
        self.width as f64 * self.height as f64 * self.depth as f64 / 1_000_000.0
    }

    pub fn linear_meters(&self) -> f64 {
        self.width as f64 / 100.0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}cm", self.width, self.height, self.depth)
    }
}

/// Everything the customer picks in the configurator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInput {
    pub furniture_type: FurnitureType,
    pub dimensions: Dimensions,
    pub material: MaterialKind,
    pub color: Rgb,
}

impl ConfigInput {
    /// Default input for a furniture type: its default dimensions, wood, walnut
    pub fn for_type(furniture_type: FurnitureType) -> Self {
        Self {
            furniture_type,
            dimensions: crate::ranges::dimension_ranges(furniture_type).defaults(),
            material: MaterialKind::default(),
            color: Rgb::default(),
        }
    }
}

impl Default for ConfigInput {
    fn default() -> Self {
        Self::for_type(FurnitureType::default())
    }
}
