use glam::Vec3;

use super::builder::{box_at, spread, PartBuilder, PANEL_THICKNESS};
use super::FurnitureGeometry;
use crate::scene::SceneNode;
use crate::types::Dimensions;

/// Vertical spacing between shelf panels (cm)
const PANEL_SPACING_CM: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfParams {
    pub dimensions: Dimensions,
}

impl ShelfParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    /// One panel per 30 cm of height, at least one
    pub fn panel_count(&self) -> usize {
        ((self.dimensions.height / PANEL_SPACING_CM).floor() as usize).max(1)
    }
}

impl FurnitureGeometry for ShelfParams {
    fn build_geometry(&self) -> SceneNode {
        let size = self.dimensions.to_meters();
        let (w, h, d) = (size.x, size.y, size.z);
        let panels = self.panel_count();
        let panel_size = Vec3::new(w, PANEL_THICKNESS, d);
        let builder = PartBuilder::new("shelf");

        if panels == 1 {
            // Floating shelf
            return builder
                .add_box("panel", Vec3::new(0.0, h * 0.5, 0.0), panel_size)
                .build();
        }

        let half_t = PANEL_THICKNESS * 0.5;
        let side_x = w * 0.5 - half_t;
        builder
            .add_nodes(spread(half_t, h - half_t, panels).map(|y| {
                box_at("panel", Vec3::new(0.0, y, 0.0), panel_size)
            }))
            .add_box("side", Vec3::new(-side_x, h * 0.5, 0.0), Vec3::new(PANEL_THICKNESS, h, d))
            .add_box("side", Vec3::new(side_x, h * 0.5, 0.0), Vec3::new(PANEL_THICKNESS, h, d))
            .build()
    }
}
