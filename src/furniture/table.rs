use glam::Vec3;

use super::builder::PartBuilder;
use super::desk::TOP_THICKNESS;
use super::FurnitureGeometry;
use crate::scene::{Axis, SceneNode};
use crate::types::Dimensions;

const PEDESTAL_TOP_RADIUS: f32 = 0.1;
const PEDESTAL_BOTTOM_RADIUS: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableParams {
    pub dimensions: Dimensions,
}

impl TableParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }
}

impl FurnitureGeometry for TableParams {
    fn build_geometry(&self) -> SceneNode {
        let size = self.dimensions.to_meters();
        let (w, h, d) = (size.x, size.y, size.z);
        let pedestal_height = h - TOP_THICKNESS;

        PartBuilder::new("table")
            .add_box(
                "top",
                Vec3::new(0.0, h - TOP_THICKNESS * 0.5, 0.0),
                Vec3::new(w, TOP_THICKNESS, d),
            )
            .add_cylinder(
                "pedestal",
                Vec3::new(0.0, pedestal_height * 0.5, 0.0),
                PEDESTAL_TOP_RADIUS,
                PEDESTAL_BOTTOM_RADIUS,
                pedestal_height,
                Axis::Y,
            )
            .build()
    }
}
