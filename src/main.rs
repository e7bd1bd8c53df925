use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use furniture_configurator::camera::OrbitCamera;
use furniture_configurator::cli::Cli;
use furniture_configurator::configurator::{configure, ConfiguratorSession};
use furniture_configurator::core::{
    Button, Clock, Controller, DisplayContext, EguiOverlay, Raycaster, SurfaceRenderer,
    WinitController,
};
use furniture_configurator::quote::QuoteRequest;
use furniture_configurator::ui::{apply_actions, configurator_panel, QuoteForm};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
/// Ray-cast resolution relative to the surface
const RENDER_SCALE: f32 = 0.5;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Inputs that decide whether the ray-cast frame is stale
#[derive(Debug, Clone, Copy, PartialEq)]
struct RenderKey {
    revision: u64,
    camera: OrbitCamera,
    context: DisplayContext,
}

/// GPU side of the application: surface, egui overlay and the CPU ray caster
struct Viewer {
    renderer: SurfaceRenderer,
    overlay: EguiOverlay,
    raycaster: Raycaster,
    raycaster_revision: u64,
    rendered: Option<RenderKey>,
}

impl Viewer {
    fn new(window: Arc<Window>, session: &ConfiguratorSession) -> Result<Self> {
        let renderer = SurfaceRenderer::new(window.clone())?;
        let overlay = EguiOverlay::new(&window, renderer.gpu().device(), renderer.format());
        let raycaster = Raycaster::new(session.configuration());

        log::info!("Viewer initialized: {} meshes", raycaster.mesh_count());

        Ok(Self {
            renderer,
            overlay,
            raycaster,
            raycaster_revision: session.revision(),
            rendered: None,
        })
    }

    fn render_context(&self) -> DisplayContext {
        let (width, height) = self.renderer.dimensions();
        DisplayContext::new(
            ((width as f32 * RENDER_SCALE) as u32).max(1),
            ((height as f32 * RENDER_SCALE) as u32).max(1),
        )
    }

    /// Ray cast again if the configuration, camera or window changed
    fn refresh(&mut self, session: &ConfiguratorSession, clock: &mut Clock) -> Result<()> {
        if self.raycaster_revision != session.revision() {
            self.raycaster = Raycaster::new(session.configuration());
            self.raycaster_revision = session.revision();
        }

        let key = RenderKey {
            revision: session.revision(),
            camera: session.camera,
            context: self.render_context(),
        };
        if self.rendered == Some(key) {
            return Ok(());
        }

        clock.reset();
        let frame = self.raycaster.render(&key.camera, &key.context, key.revision);
        log::debug!(
            "Ray cast {}x{} ({} meshes) in {:.1} ms",
            frame.width,
            frame.height,
            self.raycaster.mesh_count(),
            clock.elapsed_ms()
        );

        self.renderer.upload(&frame)?;
        self.rendered = Some(key);
        Ok(())
    }
}

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    viewer: Option<Viewer>,
    session: ConfiguratorSession,
    form: QuoteForm,
    controller: WinitController,
    clock: Clock,
}

impl App {
    fn new(session: ConfiguratorSession) -> Self {
        Self {
            window: None,
            viewer: None,
            session,
            form: QuoteForm::default(),
            controller: WinitController::new(),
            clock: Clock::new(),
        }
    }

    fn redraw(&mut self) {
        let (Some(viewer), Some(window)) = (self.viewer.as_mut(), self.window.as_ref()) else {
            return;
        };

        // Camera input
        if self.controller.is_down(Button::KeyR) {
            self.session.reset_view();
        }
        if !viewer.overlay.wants_pointer() {
            if self.controller.is_down(Button::MouseLeft) {
                let (dx, dy) = self.controller.drag_delta();
                self.session.camera.rotate(dx, dy);
            }
            self.session.camera.zoom(self.controller.wheel_delta());
        }
        self.controller.reset_deltas();

        // UI pass
        let mut actions = Vec::new();
        let full_output = viewer.overlay.run(window, |ctx| {
            actions = configurator_panel(ctx, &self.session, &mut self.form);
        });
        if let Some(request) = apply_actions(&mut self.session, &mut self.form, actions) {
            print_quote(&request);
        }

        if let Err(e) = viewer.refresh(&self.session, &mut self.clock) {
            log::error!("Frame upload failed: {}", e);
        }

        let mut frame = match viewer.renderer.begin_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Render error: {}", e);
                return;
            }
        };
        let (width, height) = viewer.renderer.dimensions();
        viewer
            .overlay
            .paint(window, viewer.renderer.gpu(), &mut frame, [width, height], full_output);
        viewer.renderer.present(frame);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Furniture Configurator")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let viewer = match Viewer::new(window.clone(), &self.session) {
                Ok(viewer) => viewer,
                Err(e) => {
                    log::error!("Failed to initialize viewer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.viewer = Some(viewer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(viewer), Some(window)) = (&mut self.viewer, &self.window) {
            if viewer.overlay.handle_event(window, &event) {
                // Releases still end a drag that started over the scene
                if let WindowEvent::MouseInput {
                    state: ElementState::Released,
                    ..
                } = event
                {
                    self.controller.process_event(&event);
                }
                return;
            }
        }

        self.controller.process_event(&event);
        if self.controller.is_down(Button::Escape) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn print_quote(request: &QuoteRequest) {
    match request.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize quote request: {}", e),
    }
}

/// Print the configuration (and an optional quote request) without opening a window
fn run_headless(cli: &Cli) -> anyhow::Result<()> {
    let configuration = configure(&cli.config_input());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&configuration)?);
    } else {
        println!("{}", configuration.summary());
    }

    if let Some(contact) = cli.contact() {
        let request = QuoteRequest::from_configuration(&configuration, contact);
        request.validate()?;
        print_quote(&request);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.no_ui {
        return run_headless(&cli);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(ConfiguratorSession::new(cli.config_input()));

    println!("Furniture Configurator - Controls: drag to orbit, wheel to zoom, R to reset view, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
