//! Parametric geometry for every furniture family.

mod builder;
mod closet;
mod desk;
mod drawer;
mod entertainment;
mod kitchen;
mod shelf;
mod table;

pub use builder::{
    box_at, handle, knob, slot_centers, spread, PartBuilder, FRONT_THICKNESS, HANDLE_RADIUS,
    KNOB_RADIUS, PANEL_THICKNESS,
};
pub use closet::ClosetParams;
pub use desk::DeskParams;
pub use drawer::DrawerParams;
pub use entertainment::EntertainmentParams;
pub use kitchen::KitchenParams;
pub use shelf::ShelfParams;
pub use table::TableParams;

use crate::scene::SceneNode;
use crate::types::{Dimensions, FurnitureType};

/// Geometry construction abstraction
pub trait FurnitureGeometry {
    /// Build a fresh scene tree for this piece
    fn build_geometry(&self) -> SceneNode;
}

/// Per-type parameters, one variant per furniture family
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FurnitureParams {
    Shelf(ShelfParams),
    DrawerUnit(DrawerParams),
    Desk(DeskParams),
    Closet(ClosetParams),
    EntertainmentCenter(EntertainmentParams),
    Kitchen(KitchenParams),
    Table(TableParams),
}

impl FurnitureParams {
    pub fn new(furniture_type: FurnitureType, dimensions: Dimensions) -> Self {
        match furniture_type {
            FurnitureType::Shelf => FurnitureParams::Shelf(ShelfParams::new(dimensions)),
            FurnitureType::DrawerUnit => FurnitureParams::DrawerUnit(DrawerParams::new(dimensions)),
            FurnitureType::Desk => FurnitureParams::Desk(DeskParams::new(dimensions)),
            FurnitureType::Closet => FurnitureParams::Closet(ClosetParams::new(dimensions)),
            FurnitureType::EntertainmentCenter => {
                FurnitureParams::EntertainmentCenter(EntertainmentParams::new(dimensions))
            }
            FurnitureType::Kitchen => FurnitureParams::Kitchen(KitchenParams::new(dimensions)),
            FurnitureType::Table => FurnitureParams::Table(TableParams::new(dimensions)),
        }
    }

    pub fn furniture_type(&self) -> FurnitureType {
        match self {
            FurnitureParams::Shelf(_) => FurnitureType::Shelf,
            FurnitureParams::DrawerUnit(_) => FurnitureType::DrawerUnit,
            FurnitureParams::Desk(_) => FurnitureType::Desk,
            FurnitureParams::Closet(_) => FurnitureType::Closet,
            FurnitureParams::EntertainmentCenter(_) => FurnitureType::EntertainmentCenter,
            FurnitureParams::Kitchen(_) => FurnitureType::Kitchen,
            FurnitureParams::Table(_) => FurnitureType::Table,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            FurnitureParams::Shelf(p) => p.dimensions,
            FurnitureParams::DrawerUnit(p) => p.dimensions,
            FurnitureParams::Desk(p) => p.dimensions,
            FurnitureParams::Closet(p) => p.dimensions,
            FurnitureParams::EntertainmentCenter(p) => p.dimensions,
            FurnitureParams::Kitchen(p) => p.dimensions,
            FurnitureParams::Table(p) => p.dimensions,
        }
    }
}

impl FurnitureGeometry for FurnitureParams {
    fn build_geometry(&self) -> SceneNode {
        match self {
            FurnitureParams::Shelf(p) => p.build_geometry(),
            FurnitureParams::DrawerUnit(p) => p.build_geometry(),
            FurnitureParams::Desk(p) => p.build_geometry(),
            FurnitureParams::Closet(p) => p.build_geometry(),
            FurnitureParams::EntertainmentCenter(p) => p.build_geometry(),
            FurnitureParams::Kitchen(p) => p.build_geometry(),
            FurnitureParams::Table(p) => p.build_geometry(),
        }
    }
}
