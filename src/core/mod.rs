// Viewer: CPU ray casting of the configured piece, shown on a wgpu surface with an egui panel
pub mod clock;
pub mod controller;
pub mod display_context;
pub mod frame;
pub mod gpu_context;
pub mod input_adapter;
pub mod overlay;
pub mod raycaster;
pub mod surface_renderer;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use display_context::DisplayContext;
pub use frame::Frame;
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use overlay::EguiOverlay;
pub use raycaster::Raycaster;
pub use surface_renderer::{SurfaceFrame, SurfaceRenderer};
