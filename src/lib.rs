pub mod camera;
pub mod cli;
pub mod configurator;
pub mod core;
pub mod furniture;
pub mod materials;
pub mod math;
pub mod pricing;
pub mod quote;
pub mod ranges;
pub mod scene;
pub mod types;
pub mod ui;

pub use configurator::{configure, Configuration, ConfiguratorSession};
pub use types::{ConfigInput, Dimensions, FurnitureType, MaterialKind};
