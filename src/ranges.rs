//! Slider bounds per furniture type.
//!
//! All values are centimetres. Switching the furniture type in a session
//! resets the sliders to [`DimensionProfile::defaults`].

use serde::Serialize;

use crate::types::{Dimensions, FurnitureType};

/// Largest dimension accepted outside the sliders (10 m); keeps part counts bounded
pub const MAX_DIMENSION: f32 = 1000.0;

/// Bounds of one slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl DimensionRange {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Keep usable values, replace NaN, infinities and non-positive values with the default.
    /// Values above [`MAX_DIMENSION`] are cut down to it.
    pub fn sanitize(&self, value: f32) -> f32 {
        if value.is_finite() && value > 0.0 {
            value.min(MAX_DIMENSION)
        } else {
            self.default
        }
    }
}

/// Width, height and depth slider bounds for one furniture type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionProfile {
    pub width: DimensionRange,
    pub height: DimensionRange,
    pub depth: DimensionRange,
}

impl DimensionProfile {
    pub fn defaults(&self) -> Dimensions {
        Dimensions::new(self.width.default, self.height.default, self.depth.default)
    }

    pub fn clamp(&self, dims: Dimensions) -> Dimensions {
        Dimensions::new(
            self.width.clamp(dims.width),
            self.height.clamp(dims.height),
            self.depth.clamp(dims.depth),
        )
    }

    pub fn sanitize(&self, dims: Dimensions) -> Dimensions {
        Dimensions::new(
            self.width.sanitize(dims.width),
            self.height.sanitize(dims.height),
            self.depth.sanitize(dims.depth),
        )
    }
}

const fn profile(width: [f32; 3], height: [f32; 3], depth: [f32; 3]) -> DimensionProfile {
    DimensionProfile {
        width: DimensionRange::new(width[0], width[1], width[2]),
        height: DimensionRange::new(height[0], height[1], height[2]),
        depth: DimensionRange::new(depth[0], depth[1], depth[2]),
    }
}

// [min, max, default]
const SHELF: DimensionProfile = profile([50.0, 200.0, 120.0], [30.0, 200.0, 80.0], [20.0, 60.0, 40.0]);
const DRAWER_UNIT: DimensionProfile =
    profile([40.0, 120.0, 80.0], [60.0, 180.0, 100.0], [35.0, 60.0, 45.0]);
const DESK: DimensionProfile = profile([80.0, 200.0, 120.0], [65.0, 85.0, 75.0], [50.0, 90.0, 60.0]);
const CLOSET: DimensionProfile =
    profile([100.0, 300.0, 180.0], [180.0, 260.0, 220.0], [50.0, 70.0, 60.0]);
const ENTERTAINMENT_CENTER: DimensionProfile =
    profile([120.0, 300.0, 180.0], [50.0, 200.0, 120.0], [35.0, 60.0, 45.0]);
const KITCHEN: DimensionProfile =
    profile([200.0, 500.0, 300.0], [180.0, 260.0, 220.0], [55.0, 65.0, 60.0]);
const TABLE: DimensionProfile = profile([60.0, 240.0, 160.0], [70.0, 80.0, 75.0], [60.0, 120.0, 90.0]);

pub fn dimension_ranges(furniture_type: FurnitureType) -> DimensionProfile {
    match furniture_type {
        FurnitureType::Shelf => SHELF,
        FurnitureType::DrawerUnit => DRAWER_UNIT,
        FurnitureType::Desk => DESK,
        FurnitureType::Closet => CLOSET,
        FurnitureType::EntertainmentCenter => ENTERTAINMENT_CENTER,
        FurnitureType::Kitchen => KITCHEN,
        FurnitureType::Table => TABLE,
    }
}

/// Profile lookup by name; unknown names get the shelf profile
pub fn dimension_ranges_for_name(name: &str) -> DimensionProfile {
    dimension_ranges(FurnitureType::parse_lossy(name))
}
