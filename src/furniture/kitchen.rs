use glam::Vec3;

use super::builder::{box_at, handle, slot_centers, PartBuilder, FRONT_THICKNESS, HANDLE_RADIUS};
use super::FurnitureGeometry;
use crate::scene::{Axis, MaterialOverride, SceneNode, Shape};
use crate::types::Dimensions;

const LOWER_HEIGHT: f32 = 0.4;
const UPPER_HEIGHT: f32 = 0.35;
/// Upper cabinets are this fraction of the full depth
const UPPER_DEPTH: f32 = 0.55;
const COUNTERTOP_THICKNESS: f32 = 0.04;
const COUNTERTOP_OVERHANG: f32 = 0.02;
const HANDLE_LENGTH: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KitchenParams {
    pub dimensions: Dimensions,
}

impl KitchenParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    /// Two lower doors per metre of run
    pub fn lower_door_count(&self) -> usize {
        ((self.dimensions.to_meters().x * 2.0).floor() as usize).max(1)
    }

    /// One and a half upper doors per metre of run, at least one
    pub fn upper_door_count(&self) -> usize {
        ((self.dimensions.to_meters().x * 1.5).floor() as usize).max(1)
    }
}

/// Cabinet doors across the run, each with a horizontal handle `handle_dy` above its centre
fn cabinet_doors(
    width: f32,
    count: usize,
    center_y: f32,
    door_height: f32,
    front_z: f32,
    handle_dy: f32,
) -> impl Iterator<Item = SceneNode> {
    let door_width = width / count as f32 * 0.95;
    let door_z = front_z + FRONT_THICKNESS * 0.5;
    let handle_z = door_z + FRONT_THICKNESS * 0.5 + HANDLE_RADIUS;
    slot_centers(-width * 0.5, width, count).flat_map(move |x| {
        [
            box_at(
                "door",
                Vec3::new(x, center_y, door_z),
                Vec3::new(door_width, door_height, FRONT_THICKNESS),
            ),
            handle(Vec3::new(x, center_y + handle_dy, handle_z), HANDLE_LENGTH, Axis::X),
        ]
    })
}

impl FurnitureGeometry for KitchenParams {
    fn build_geometry(&self) -> SceneNode {
        let size = self.dimensions.to_meters();
        let (w, h, d) = (size.x, size.y, size.z);

        let lower_h = h * LOWER_HEIGHT;
        let lower_door_h = lower_h * 0.85;
        let lower = PartBuilder::new("lower-run")
            .add_box("cabinet", Vec3::new(0.0, lower_h * 0.5, 0.0), Vec3::new(w, lower_h, d))
            .add_nodes(cabinet_doors(
                w,
                self.lower_door_count(),
                lower_h * 0.5,
                lower_door_h,
                d * 0.5,
                lower_door_h * 0.5 - 0.04,
            ))
            .build();

        let counter_top_y = lower_h + COUNTERTOP_THICKNESS;
        let countertop = SceneNode::tagged_mesh(
            "countertop",
            Shape::Box {
                size: Vec3::new(w + COUNTERTOP_OVERHANG, COUNTERTOP_THICKNESS, d + COUNTERTOP_OVERHANG),
            },
            Vec3::new(0.0, lower_h + COUNTERTOP_THICKNESS * 0.5, 0.0),
            MaterialOverride::Glass,
        );

        // Upper run hangs against the back wall, top flush with the overall height
        let upper_h = h * UPPER_HEIGHT;
        let upper_d = d * UPPER_DEPTH;
        let upper_y = h - upper_h * 0.5;
        let upper_z = -d * 0.5 + upper_d * 0.5;
        let upper_door_h = upper_h * 0.85;
        let upper = PartBuilder::new("upper-run")
            .add_box("cabinet", Vec3::new(0.0, upper_y, upper_z), Vec3::new(w, upper_h, upper_d))
            .add_nodes(cabinet_doors(
                w,
                self.upper_door_count(),
                upper_y,
                upper_door_h,
                -d * 0.5 + upper_d,
                -(upper_door_h * 0.5 - 0.04),
            ))
            .build();

        let upper_bottom = h - upper_h;
        let splash_h = (upper_bottom - counter_top_y).max(0.0);

        PartBuilder::new("kitchen")
            .add_node(lower)
            .add_node(countertop)
            .add_node(upper)
            .add_plane(
                "backsplash",
                Vec3::new(0.0, counter_top_y + splash_h * 0.5, -d * 0.5 + 0.005),
                w,
                splash_h,
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_counts_follow_run_length() {
        let params = KitchenParams::new(Dimensions::new(300.0, 220.0, 60.0));
        assert_eq!(params.lower_door_count(), 6);
        assert_eq!(params.upper_door_count(), 4);

        let narrow = KitchenParams::new(Dimensions::new(50.0, 220.0, 60.0));
        assert_eq!(narrow.upper_door_count(), 1);
    }

    #[test]
    fn test_countertop_is_glass_tagged_on_lower_run() {
        let node = KitchenParams::new(Dimensions::new(300.0, 220.0, 60.0)).build_geometry();
        let top = node.meshes_labelled("countertop")[0];
        assert_eq!(top.material_override, Some(MaterialOverride::Glass));
        assert!((top.center.y - (0.88 + 0.02)).abs() < 1e-5);
    }

    #[test]
    fn test_upper_run_is_set_back() {
        let node = KitchenParams::new(Dimensions::new(300.0, 220.0, 60.0)).build_geometry();
        let cabinets = node.meshes_labelled("cabinet");
        assert_eq!(cabinets.len(), 2);
        let (lower, upper) = (cabinets[0].bounds(), cabinets[1].bounds());
        assert!(upper.max.z < lower.max.z);
        assert!((upper.min.z - lower.min.z).abs() < 1e-5);
        assert!((upper.max.y - 2.2).abs() < 1e-5);
    }

    #[test]
    fn test_leaf_count() {
        let params = KitchenParams::new(Dimensions::new(300.0, 220.0, 60.0));
        let node = params.build_geometry();
        assert_eq!(node.leaf_count(), 1 + 2 * 6 + 1 + 1 + 2 * 4 + 1);
        assert_eq!(node.meshes_labelled("backsplash").len(), 1);
    }
}
