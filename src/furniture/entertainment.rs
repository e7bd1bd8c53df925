use glam::Vec3;

use super::builder::{box_at, knob, PartBuilder, FRONT_THICKNESS, KNOB_RADIUS, PANEL_THICKNESS};
use super::FurnitureGeometry;
use crate::scene::SceneNode;
use crate::types::Dimensions;

// Fractions of the overall width/height
const BASE_HEIGHT: f32 = 0.15;
const BAY_WIDTH: f32 = 0.6;
const BAY_HEIGHT: f32 = 0.4;
const BAY_CENTER: f32 = 0.45;
const SHELF_LEVEL: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntertainmentParams {
    pub dimensions: Dimensions,
}

impl EntertainmentParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }
}

impl FurnitureGeometry for EntertainmentParams {
    fn build_geometry(&self) -> SceneNode {
        let size = self.dimensions.to_meters();
        let (w, h, d) = (size.x, size.y, size.z);
        let t = PANEL_THICKNESS;
        let bay_w = w * BAY_WIDTH;
        let bay_h = h * BAY_HEIGHT;
        let bay_y = h * BAY_CENTER;
        let bar_depth = d * 0.3;

        // TV bay outline, no cut-out
        let frame = [
            (Vec3::new(0.0, bay_y + (bay_h + t) * 0.5, 0.0), Vec3::new(bay_w + 2.0 * t, t, bar_depth)),
            (Vec3::new(0.0, bay_y - (bay_h + t) * 0.5, 0.0), Vec3::new(bay_w + 2.0 * t, t, bar_depth)),
            (Vec3::new(-(bay_w + t) * 0.5, bay_y, 0.0), Vec3::new(t, bay_h, bar_depth)),
            (Vec3::new((bay_w + t) * 0.5, bay_y, 0.0), Vec3::new(t, bay_h, bar_depth)),
        ]
        .map(|(center, size)| box_at("frame", center, size));

        // Side compartments fill the width left beside the bay
        let side_w = (w - bay_w) * 0.5;
        let door_z = d * 0.5 + FRONT_THICKNESS * 0.5;
        let compartments = [-1.0_f32, 1.0].into_iter().flat_map(|side| {
            let door_x = side * (bay_w * 0.5 + side_w * 0.5);
            let knob_x = door_x - side * side_w * 0.3;
            [
                box_at(
                    "door",
                    Vec3::new(door_x, bay_y, door_z),
                    Vec3::new(side_w * 0.9, h * 0.5, FRONT_THICKNESS),
                ),
                knob(Vec3::new(knob_x, bay_y, door_z + FRONT_THICKNESS * 0.5 + KNOB_RADIUS)),
            ]
        });

        PartBuilder::new("entertainment-center")
            .add_box("base", Vec3::new(0.0, h * BASE_HEIGHT * 0.5, 0.0), Vec3::new(w, h * BASE_HEIGHT, d))
            .add_nodes(frame)
            .add_nodes(compartments)
            .add_box("shelf", Vec3::new(0.0, h * SHELF_LEVEL, 0.0), Vec3::new(bay_w, 0.02, d * 0.8))
            .build()
    }
}
