// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::math::Rgb;
use crate::quote::ContactDetails;
use crate::ranges::dimension_ranges;
use crate::types::{ConfigInput, Dimensions, FurnitureType, MaterialKind};

#[derive(Parser, Debug, Clone)]
#[command(name = "furniture-configurator")]
#[command(about = "Parametric furniture configurator", long_about = None)]
pub struct Cli {
    /// Furniture type (shelf, drawer-unit, desk, closet, entertainment-center, kitchen, table)
    #[arg(short = 't', long = "type", env = "FURNITURE_TYPE", default_value = "shelf")]
    pub furniture_type: String,

    /// Width in cm (defaults to the type's default)
    #[arg(long, env = "FURNITURE_WIDTH")]
    pub width: Option<f32>,

    /// Height in cm
    #[arg(long, env = "FURNITURE_HEIGHT")]
    pub height: Option<f32>,

    /// Depth in cm
    #[arg(long, env = "FURNITURE_DEPTH")]
    pub depth: Option<f32>,

    /// Base material (wood, metal, glass)
    #[arg(short = 'm', long, env = "FURNITURE_MATERIAL", default_value = "wood")]
    pub material: String,

    /// Finish colour as #RRGGBB
    #[arg(short = 'c', long, env = "FURNITURE_COLOR", default_value = "#8B4513")]
    pub color: String,

    /// Print the configuration and exit instead of opening the viewer
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Print the configuration as JSON (with --no-ui)
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Customer name for a quote request (with --no-ui)
    #[arg(long)]
    pub quote_name: Option<String>,

    /// Customer email for a quote request
    #[arg(long)]
    pub quote_email: Option<String>,

    /// Customer phone for a quote request
    #[arg(long)]
    pub quote_phone: Option<String>,
}

impl Cli {
    /// Input described by the flags; unknown names fall back with a warning
    pub fn config_input(&self) -> ConfigInput {
        let furniture_type = FurnitureType::parse_lossy(&self.furniture_type);
        let defaults = dimension_ranges(furniture_type).defaults();
        ConfigInput {
            furniture_type,
            dimensions: Dimensions::new(
                self.width.unwrap_or(defaults.width),
                self.height.unwrap_or(defaults.height),
                self.depth.unwrap_or(defaults.depth),
            ),
            material: MaterialKind::parse_lossy(&self.material),
            color: Rgb::parse_lossy(&self.color),
        }
    }

    /// Contact details when a quote was asked for on the command line
    pub fn contact(&self) -> Option<ContactDetails> {
        if self.quote_name.is_none() && self.quote_email.is_none() {
            return None;
        }
        let contact = ContactDetails::new(
            self.quote_name.clone().unwrap_or_default(),
            self.quote_email.clone().unwrap_or_default(),
        );
        Some(match &self.quote_phone {
            Some(phone) => contact.with_phone(phone.as_str()),
            None => contact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_walnut_wood_shelf() {
        let cli = Cli::try_parse_from(["furniture-configurator"]).unwrap();
        assert_eq!(cli.config_input(), ConfigInput::default());
        assert!(!cli.no_ui);
        assert!(cli.contact().is_none());
    }

    #[test]
    fn test_missing_dimensions_use_type_defaults() {
        let cli = Cli::try_parse_from(["furniture-configurator", "-t", "closet", "--width", "180"]).unwrap();
        let input = cli.config_input();
        assert_eq!(input.furniture_type, FurnitureType::Closet);
        assert_eq!(input.dimensions.width, 180.0);
        assert_eq!(input.dimensions.height, dimension_ranges(FurnitureType::Closet).height.default);
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let cli = Cli::try_parse_from([
            "furniture-configurator",
            "--type",
            "sofa",
            "--material",
            "marble",
            "--color",
            "blue",
        ])
        .unwrap();
        let input = cli.config_input();
        assert_eq!(input, ConfigInput::default());
    }

    #[test]
    fn test_quote_flags() {
        let cli = Cli::try_parse_from([
            "furniture-configurator",
            "--no-ui",
            "--quote-name",
            "Ana",
            "--quote-email",
            "ana@example.com",
            "--quote-phone",
            "555-0100",
        ])
        .unwrap();
        let contact = cli.contact().unwrap();
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.phone.as_deref(), Some("555-0100"));
    }
}
