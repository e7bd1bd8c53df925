use glam::Vec3;

use super::builder::{box_at, handle, slot_centers, PartBuilder, FRONT_THICKNESS, HANDLE_RADIUS};
use super::FurnitureGeometry;
use crate::scene::{Axis, SceneNode};
use crate::types::Dimensions;

/// Height budget per drawer (cm)
const DRAWER_HEIGHT_CM: f32 = 25.0;
const DIVIDER_THICKNESS: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerParams {
    pub dimensions: Dimensions,
}

impl DrawerParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    /// One drawer per 25 cm of height, at least two
    pub fn drawer_count(&self) -> usize {
        ((self.dimensions.height / DRAWER_HEIGHT_CM).floor() as usize).max(2)
    }
}

impl FurnitureGeometry for DrawerParams {
    fn build_geometry(&self) -> SceneNode {
        let size = self.dimensions.to_meters();
        let (w, h, d) = (size.x, size.y, size.z);
        let drawers = self.drawer_count();
        let slot = h / drawers as f32;
        let front_z = d * 0.5;
        let handle_z = front_z + FRONT_THICKNESS * 0.5 + HANDLE_RADIUS;

        let fronts = slot_centers(0.0, h, drawers).flat_map(|y| {
            [
                box_at(
                    "drawer-front",
                    Vec3::new(0.0, y, front_z),
                    Vec3::new(w * 0.95, slot * 0.8, FRONT_THICKNESS),
                ),
                handle(Vec3::new(0.0, y, handle_z), w * 0.3, Axis::X),
            ]
        });

        let dividers = (1..drawers).map(|i| {
            box_at(
                "divider",
                Vec3::new(0.0, i as f32 * slot, front_z),
                Vec3::new(w * 0.95, DIVIDER_THICKNESS, FRONT_THICKNESS),
            )
        });

        PartBuilder::new("drawer-unit")
            .add_box("body", Vec3::new(0.0, h * 0.5, 0.0), size)
            .add_nodes(fronts)
            .add_nodes(dividers)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_count_has_floor_of_two() {
        assert_eq!(DrawerParams::new(Dimensions::new(80.0, 100.0, 45.0)).drawer_count(), 4);
        assert_eq!(DrawerParams::new(Dimensions::new(80.0, 40.0, 45.0)).drawer_count(), 2);
        assert_eq!(DrawerParams::new(Dimensions::new(80.0, 180.0, 45.0)).drawer_count(), 7);
    }

    #[test]
    fn test_one_handle_per_drawer_and_dividers_between() {
        let params = DrawerParams::new(Dimensions::new(80.0, 100.0, 45.0));
        let node = params.build_geometry();
        assert_eq!(node.meshes_labelled("drawer-front").len(), 4);
        assert_eq!(node.meshes_labelled("handle").len(), 4);
        assert_eq!(node.meshes_labelled("divider").len(), 3);
        assert_eq!(node.leaf_count(), 12);
    }

    #[test]
    fn test_fronts_sit_on_front_face() {
        let node = DrawerParams::new(Dimensions::new(80.0, 100.0, 40.0)).build_geometry();
        for front in node.meshes_labelled("drawer-front") {
            assert!((front.center.z - 0.2).abs() < 1e-6);
        }
    }
}
