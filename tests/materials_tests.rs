use furniture_configurator::configurator::configure;
use furniture_configurator::materials::{resolve, Shading};
use furniture_configurator::math::{HARDWARE_GRAY, PALETTE};
use furniture_configurator::scene::MaterialOverride;
use furniture_configurator::types::{ConfigInput, FurnitureType, MaterialKind};

#[cfg(test)]
mod materials_tests {
    use super::*;

    #[test]
    fn test_metal_tag_wins_over_every_choice() {
        for material in MaterialKind::ALL {
            for swatch in PALETTE {
                let surface = resolve(Some(MaterialOverride::Metal), swatch.color, material);
                assert_eq!(surface.color, HARDWARE_GRAY);
                assert_eq!(surface.shading, Shading::Standard);
                assert_eq!(surface.metalness, 0.8);
            }
        }
    }

    #[test]
    fn test_glass_tag_keeps_customer_colour() {
        let surface = resolve(Some(MaterialOverride::Glass), PALETTE[2].color, MaterialKind::Wood);
        assert_eq!(surface.color, PALETTE[2].color);
        assert!(surface.transparent);
        assert_eq!(surface.opacity, 0.3);
    }

    #[test]
    fn test_untagged_parts_follow_selection() {
        let input = ConfigInput {
            material: MaterialKind::Glass,
            color: PALETTE[4].color,
            ..ConfigInput::for_type(FurnitureType::Closet)
        };
        let config = configure(&input);
        for (mesh, surface) in config.surfaces() {
            match mesh.material_override {
                Some(MaterialOverride::Metal) => assert_eq!(surface.color, HARDWARE_GRAY),
                _ => {
                    assert_eq!(surface, config.base_material, "{}", mesh.label);
                    assert_eq!(surface.shading, Shading::Physical);
                }
            }
        }
    }
}
