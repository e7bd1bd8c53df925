use furniture_configurator::pricing::{estimate_price, rule_for, PriceEstimate};
use furniture_configurator::ranges::{dimension_ranges, DimensionRange};
use furniture_configurator::types::{Dimensions, FurnitureType, MaterialKind};

/// Evenly spaced slider positions from min to max
fn steps(range: DimensionRange) -> Vec<f32> {
    (0..=10)
        .map(|i| range.min + (range.max - range.min) * i as f32 / 10.0)
        .collect()
}

#[cfg(test)]
mod pricing_tests {
    use super::*;

    #[test]
    fn test_price_never_decreases_along_any_dimension() {
        for furniture_type in FurnitureType::ALL {
            let profile = dimension_ranges(furniture_type);
            let base = profile.defaults();
            for material in MaterialKind::ALL {
                let along = |dims: &dyn Fn(f32) -> Dimensions, range: DimensionRange| {
                    let prices: Vec<PriceEstimate> = steps(range)
                        .into_iter()
                        .map(|v| estimate_price(furniture_type, &dims(v), material))
                        .collect();
                    assert!(
                        prices.windows(2).all(|w| w[0] <= w[1]),
                        "{furniture_type}/{material}: {prices:?}"
                    );
                };
                along(&|w: f32| Dimensions { width: w, ..base }, profile.width);
                along(&|h: f32| Dimensions { height: h, ..base }, profile.height);
                along(&|d: f32| Dimensions { depth: d, ..base }, profile.depth);
            }
        }
    }

    #[test]
    fn test_material_order_glass_metal_wood() {
        for furniture_type in FurnitureType::ALL {
            let profile = dimension_ranges(furniture_type);
            for dims in [
                profile.defaults(),
                Dimensions::new(profile.width.max, profile.height.max, profile.depth.max),
            ] {
                let wood = estimate_price(furniture_type, &dims, MaterialKind::Wood);
                let metal = estimate_price(furniture_type, &dims, MaterialKind::Metal);
                let glass = estimate_price(furniture_type, &dims, MaterialKind::Glass);
                assert!(glass >= metal && metal >= wood, "{furniture_type} {dims}");
            }
        }
    }

    #[test]
    fn test_price_is_rounded_and_floored() {
        for furniture_type in FurnitureType::ALL {
            let floor = rule_for(furniture_type).minimum as u64;
            let profile = dimension_ranges(furniture_type);
            for width in steps(profile.width) {
                for height in steps(profile.height) {
                    let dims = Dimensions::new(width, height, profile.depth.min);
                    let price = estimate_price(furniture_type, &dims, MaterialKind::Wood).amount();
                    assert_eq!(price % 1000, 0, "{furniture_type} {dims}: {price}");
                    assert!(price >= floor, "{furniture_type} {dims}: {price} < {floor}");
                }
            }
        }
    }

    #[test]
    fn test_smallest_pieces_cost_the_floor() {
        let tiny = Dimensions::new(1.0, 1.0, 1.0);
        for furniture_type in FurnitureType::ALL {
            let price = estimate_price(furniture_type, &tiny, MaterialKind::Wood);
            assert_eq!(price.amount(), rule_for(furniture_type).minimum as u64);
        }
    }

    #[test]
    fn test_documented_examples() {
        let shelf = estimate_price(FurnitureType::Shelf, &Dimensions::new(120.0, 80.0, 40.0), MaterialKind::Wood);
        assert_eq!(shelf.to_string(), "$45.000");

        let kitchen =
            estimate_price(FurnitureType::Kitchen, &Dimensions::new(300.0, 220.0, 60.0), MaterialKind::Glass);
        assert_eq!(kitchen.to_string(), "$6.480.000");
    }
}
