use glam::Vec3;

use super::builder::{box_at, handle, slot_centers, PartBuilder, FRONT_THICKNESS, HANDLE_RADIUS};
use super::FurnitureGeometry;
use crate::scene::{Axis, MaterialOverride, SceneNode, Shape};
use crate::types::Dimensions;

/// Widest closet (m) that still gets two doors
const TWO_DOOR_MAX_WIDTH: f32 = 1.5;
const HANGING_BAR_RADIUS: f32 = 0.015;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosetParams {
    pub dimensions: Dimensions,
}

impl ClosetParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    pub fn door_count(&self) -> usize {
        if self.dimensions.to_meters().x <= TWO_DOOR_MAX_WIDTH {
            2
        } else {
            3
        }
    }
}

impl FurnitureGeometry for ClosetParams {
    fn build_geometry(&self) -> SceneNode {
        let size = self.dimensions.to_meters();
        let (w, h, d) = (size.x, size.y, size.z);
        let doors = self.door_count();
        let door_width = w / doors as f32 * 0.95;
        let door_z = d * 0.5 + FRONT_THICKNESS * 0.5;
        let handle_z = door_z + FRONT_THICKNESS * 0.5 + HANDLE_RADIUS;

        let fronts = slot_centers(-w * 0.5, w, doors).flat_map(|x| {
            [
                box_at(
                    "door",
                    Vec3::new(x, h * 0.5, door_z),
                    Vec3::new(door_width, h * 0.9, FRONT_THICKNESS),
                ),
                handle(Vec3::new(x + door_width * 0.35, h * 0.5, handle_z), h * 0.15, Axis::Y),
            ]
        });

        let hanging_bar = SceneNode::tagged_mesh(
            "hanging-bar",
            Shape::Cylinder {
                radius_top: HANGING_BAR_RADIUS,
                radius_bottom: HANGING_BAR_RADIUS,
                length: w * 0.9,
                axis: Axis::X,
            },
            Vec3::new(0.0, h * 0.75, 0.0),
            MaterialOverride::Metal,
        );

        PartBuilder::new("closet")
            .add_box("body", Vec3::new(0.0, h * 0.5, 0.0), size)
            .add_nodes(fronts)
            .add_node(hanging_bar)
            .add_box("shelf", Vec3::new(0.0, h * 0.3, 0.0), Vec3::new(w * 0.95, 0.02, d * 0.9))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_count_switches_above_150cm() {
        assert_eq!(ClosetParams::new(Dimensions::new(150.0, 220.0, 60.0)).door_count(), 2);
        assert_eq!(ClosetParams::new(Dimensions::new(151.0, 220.0, 60.0)).door_count(), 3);
        assert_eq!(ClosetParams::new(Dimensions::new(100.0, 220.0, 60.0)).door_count(), 2);
    }

    #[test]
    fn test_hardware_is_metal_tagged() {
        let node = ClosetParams::new(Dimensions::new(180.0, 220.0, 60.0)).build_geometry();
        assert_eq!(node.leaf_count(), 1 + 2 * 3 + 2);

        let bar = node.meshes_labelled("hanging-bar")[0];
        assert_eq!(bar.material_override, Some(MaterialOverride::Metal));
        assert!((bar.center.y - 1.65).abs() < 1e-5);
        for handle in node.meshes_labelled("handle") {
            assert_eq!(handle.material_override, Some(MaterialOverride::Metal));
        }
    }
}
