//! Configuration pipeline and the interactive session that owns it.

use serde::Serialize;

use crate::camera::OrbitCamera;
use crate::furniture::{FurnitureGeometry, FurnitureParams};
use crate::materials::{resolve, surface_for, SurfaceMaterial};
use crate::math::Rgb;
use crate::pricing::{estimate_price, PriceEstimate};
use crate::quote::{ContactDetails, QuoteRequest};
use crate::ranges::{dimension_ranges, DimensionProfile};
use crate::scene::{PlacedMesh, SceneNode};
use crate::types::{ConfigInput, Dimensions, FurnitureType, MaterialKind};

/// Everything derived from one [`ConfigInput`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Input after sanitizing
    pub input: ConfigInput,
    #[serde(skip)]
    pub params: FurnitureParams,
    pub scene: SceneNode,
    pub base_material: SurfaceMaterial,
    pub price: PriceEstimate,
}

impl Configuration {
    pub fn furniture_type(&self) -> FurnitureType {
        self.input.furniture_type
    }

    pub fn dimensions(&self) -> Dimensions {
        self.input.dimensions
    }

    /// World-space meshes paired with the surface each one renders with
    pub fn surfaces(&self) -> Vec<(PlacedMesh, SurfaceMaterial)> {
        self.scene
            .meshes()
            .into_iter()
            .map(|mesh| {
                let surface = resolve(mesh.material_override, self.input.color, self.input.material);
                (mesh, surface)
            })
            .collect()
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} {}: {} meshes, {}",
            self.input.furniture_type.label(),
            self.input.dimensions,
            self.input.material,
            self.input.color,
            self.scene.leaf_count(),
            self.price
        )
    }
}

/// Build geometry, base surface and price for an input.
///
/// Non-finite or non-positive dimensions are replaced by the type's defaults;
/// positive values outside the slider ranges are used as given, up to
/// [`MAX_DIMENSION`](crate::ranges::MAX_DIMENSION).
pub fn configure(input: &ConfigInput) -> Configuration {
    let profile = dimension_ranges(input.furniture_type);
    let dimensions = profile.sanitize(input.dimensions);
    if dimensions != input.dimensions {
        log::warn!(
            "Unusable dimensions {:?} for {}; using {}",
            input.dimensions,
            input.furniture_type,
            dimensions
        );
    }

    let input = ConfigInput { dimensions, ..*input };
    let params = FurnitureParams::new(input.furniture_type, dimensions);
    let scene = params.build_geometry();
    let price = estimate_price(input.furniture_type, &dimensions, input.material);

    Configuration {
        input,
        params,
        scene,
        base_material: surface_for(input.color, input.material),
        price,
    }
}

/// Interactive configurator state: the current input, its configuration and the view
#[derive(Debug, Clone)]
pub struct ConfiguratorSession {
    input: ConfigInput,
    configuration: Configuration,
    pub camera: OrbitCamera,
    revision: u64,
}

impl ConfiguratorSession {
    /// Start from an input; dimensions are clamped to the sliders like the setters do
    pub fn new(input: ConfigInput) -> Self {
        let profile = dimension_ranges(input.furniture_type);
        let dimensions = profile.clamp(profile.sanitize(input.dimensions));
        let configuration = configure(&ConfigInput { dimensions, ..input });
        Self {
            input: configuration.input,
            configuration,
            camera: OrbitCamera::new(),
            revision: 0,
        }
    }

    pub fn input(&self) -> &ConfigInput {
        &self.input
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Bumped every time the configuration is rebuilt
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn profile(&self) -> DimensionProfile {
        dimension_ranges(self.input.furniture_type)
    }

    /// Switch type; the dimensions go back to the new type's defaults
    pub fn set_furniture_type(&mut self, furniture_type: FurnitureType) {
        if furniture_type == self.input.furniture_type {
            return;
        }
        self.input = ConfigInput {
            furniture_type,
            dimensions: dimension_ranges(furniture_type).defaults(),
            ..self.input
        };
        self.regenerate();
    }

    pub fn set_width(&mut self, width: f32) {
        let width = self.profile().width.clamp(width);
        self.set_dimensions(Dimensions { width, ..self.input.dimensions });
    }

    pub fn set_height(&mut self, height: f32) {
        let height = self.profile().height.clamp(height);
        self.set_dimensions(Dimensions { height, ..self.input.dimensions });
    }

    pub fn set_depth(&mut self, depth: f32) {
        let depth = self.profile().depth.clamp(depth);
        self.set_dimensions(Dimensions { depth, ..self.input.dimensions });
    }

    /// Set all three dimensions, clamped to the active profile
    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        let profile = self.profile();
        let dimensions = profile.clamp(profile.sanitize(dimensions));
        if dimensions == self.input.dimensions {
            return;
        }
        self.input.dimensions = dimensions;
        self.regenerate();
    }

    pub fn set_material(&mut self, material: MaterialKind) {
        if material == self.input.material {
            return;
        }
        self.input.material = material;
        self.regenerate();
    }

    pub fn set_color(&mut self, color: Rgb) {
        if color == self.input.color {
            return;
        }
        self.input.color = color;
        self.regenerate();
    }

    pub fn reset_view(&mut self) {
        self.camera.reset();
    }

    /// Quote request for the current configuration
    pub fn quote_request(&self, contact: ContactDetails) -> anyhow::Result<QuoteRequest> {
        let request = QuoteRequest::from_configuration(&self.configuration, contact);
        request.validate()?;
        Ok(request)
    }

    fn regenerate(&mut self) {
        self.configuration = configure(&self.input);
        self.revision += 1;
        log::debug!("Configuration #{}: {}", self.revision, self.configuration.summary());
    }
}

impl Default for ConfiguratorSession {
    fn default() -> Self {
        Self::new(ConfigInput::default())
    }
}
