use glam::Vec3;

use super::builder::PartBuilder;
use super::FurnitureGeometry;
use crate::scene::SceneNode;
use crate::types::Dimensions;

pub(crate) const TOP_THICKNESS: f32 = 0.05;
const LEG_SIZE: f32 = 0.05;
const LEG_INSET: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeskParams {
    pub dimensions: Dimensions,
}

impl DeskParams {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }
}

impl FurnitureGeometry for DeskParams {
    fn build_geometry(&self) -> SceneNode {
        let size = self.dimensions.to_meters();
        let (w, h, d) = (size.x, size.y, size.z);
        let leg_x = w * 0.5 - LEG_INSET;
        let leg_z = d * 0.5 - LEG_INSET;
        let leg_size = Vec3::new(LEG_SIZE, h, LEG_SIZE);

        let mut builder = PartBuilder::new("desk").add_box(
            "top",
            Vec3::new(0.0, h - TOP_THICKNESS * 0.5, 0.0),
            Vec3::new(w, TOP_THICKNESS, d),
        );
        for (sx, sz) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            builder = builder.add_box("leg", Vec3::new(sx * leg_x, h * 0.5, sz * leg_z), leg_size);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_has_top_and_four_inset_legs() {
        let node = DeskParams::new(Dimensions::new(120.0, 75.0, 60.0)).build_geometry();
        assert_eq!(node.leaf_count(), 5);

        let top = node.meshes_labelled("top")[0];
        assert!((top.center.y - 0.725).abs() < 1e-6);

        let legs = node.meshes_labelled("leg");
        assert_eq!(legs.len(), 4);
        for leg in legs {
            assert!((leg.center.x.abs() - 0.5).abs() < 1e-6);
            assert!((leg.center.z.abs() - 0.2).abs() < 1e-6);
        }
    }
}
