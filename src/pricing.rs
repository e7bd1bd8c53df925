//! Price estimation. Pure functions of type, dimensions and material.

use std::fmt;

use serde::Serialize;

use crate::types::{Dimensions, FurnitureType, MaterialKind};

/// Size measure the base price is multiplied by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceBasis {
    /// m² of front face
    Area,
    /// m³
    Volume,
    /// Metres of run
    LinearMeters,
}

impl PriceBasis {
    pub fn measure(self, dims: &Dimensions) -> f64 {
        match self {
            PriceBasis::Area => dims.area_m2(),
            PriceBasis::Volume => dims.volume_m3(),
            PriceBasis::LinearMeters => dims.linear_meters(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingRule {
    pub base_price: f64,
    pub basis: PriceBasis,
    /// Lowest price ever quoted for the type
    pub minimum: f64,
}

impl PricingRule {
    const fn new(base_price: f64, basis: PriceBasis, minimum: f64) -> Self {
        Self { base_price, basis, minimum }
    }
}

pub fn rule_for(furniture_type: FurnitureType) -> PricingRule {
    match furniture_type {
        FurnitureType::Shelf => PricingRule::new(35_000.0, PriceBasis::Area, 45_000.0),
        FurnitureType::Desk => PricingRule::new(320_000.0, PriceBasis::Area, 280_000.0),
        FurnitureType::DrawerUnit => PricingRule::new(500_000.0, PriceBasis::Volume, 180_000.0),
        FurnitureType::Closet => PricingRule::new(400_000.0, PriceBasis::Volume, 850_000.0),
        FurnitureType::EntertainmentCenter => {
            PricingRule::new(350_000.0, PriceBasis::Volume, 320_000.0)
        }
        FurnitureType::Table => PricingRule::new(200_000.0, PriceBasis::Volume, 150_000.0),
        FurnitureType::Kitchen => {
            PricingRule::new(1_200_000.0, PriceBasis::LinearMeters, 1_500_000.0)
        }
    }
}

/// Extra charge for oversized builds
pub fn complexity_surcharge(furniture_type: FurnitureType, dims: &Dimensions) -> f64 {
    match furniture_type {
        FurnitureType::Closet if dims.width > 200.0 => 1.2,
        FurnitureType::Kitchen if dims.width > 300.0 => 1.3,
        FurnitureType::DrawerUnit if dims.height > 150.0 => 1.15,
        _ => 1.0,
    }
}

/// Estimated price in whole currency units, always a multiple of 1 000
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PriceEstimate(pub u64);

impl PriceEstimate {
    pub fn amount(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PriceEstimate {
    /// `$6.480.000`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "${}", grouped)
    }
}

pub fn estimate_price(
    furniture_type: FurnitureType,
    dims: &Dimensions,
    material: MaterialKind,
) -> PriceEstimate {
    let rule = rule_for(furniture_type);
    let raw = rule.base_price * rule.basis.measure(dims);
    let adjusted = raw * material.price_multiplier() * complexity_surcharge(furniture_type, dims);
    let floored = adjusted.max(rule.minimum);
    let rounded = (floored / 1000.0).round() * 1000.0;
    log::trace!(
        "price {} {} {}: raw {:.0} -> {:.0}",
        furniture_type,
        dims,
        material,
        raw,
        rounded
    );
    PriceEstimate(rounded as u64)
}
