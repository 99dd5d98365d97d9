use crate::app_state::State;
use crate::config::BoardConfig;
use crate::error::SetupError;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Id of the page element the canvas is appended to; the body is used when
/// the page has no such element.
#[cfg(target_arch = "wasm32")]
const CANVAS_CONTAINER_ID: &str = "sketchboard";

struct App {
    config: BoardConfig,
    state: Option<State>,
    #[cfg(target_arch = "wasm32")]
    proxy: Option<winit::event_loop::EventLoopProxy<State>>,
}

impl App {
    fn new(_event_loop: &EventLoop<State>, config: BoardConfig) -> Self {
        Self {
            config,
            state: None,
            #[cfg(target_arch = "wasm32")]
            proxy: Some(_event_loop.create_proxy()),
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, SetupError> {
        let window_attributes = Window::default_attributes().with_title(&self.config.title);
        let window = event_loop.create_window(window_attributes)?;

        #[cfg(target_arch = "wasm32")]
        attach_canvas(&window);

        Ok(Arc::new(window))
    }
}

impl ApplicationHandler<State> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                if let Some(proxy) = self.proxy.take() {
                    let config = self.config.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match State::new(window, &config).await {
                            Ok(state) => {
                                if proxy.send_event(state).is_err() {
                                    log::error!("Event loop closed before the renderer was ready");
                                }
                            }
                            Err(e) => log::error!("Renderer setup failed: {}", e),
                        }
                    });
                }
            } else {
                match pollster::block_on(State::new(window, &self.config)) {
                    Ok(state) => {
                        state.window().request_redraw();
                        self.state = Some(state);
                    }
                    Err(e) => {
                        log::error!("Renderer setup failed: {}", e);
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, mut state: State) {
        // The page may have resized the canvas while the adapter was being requested.
        let size = state.window().inner_size();
        state.resize(size);
        state.window().request_redraw();
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        // Nothing to draw on until the renderer exists.
        let Some(state) = &mut self.state else {
            return;
        };
        if window_id != state.window().id() {
            return;
        }

        if state.input(&event) {
            state.window().request_redraw();
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                log::debug!(
                    "WindowEvent::Resized: {}x{}",
                    physical_size.width,
                    physical_size.height
                );
                state.resize(physical_size);
                state.window().request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                state.rescale(scale_factor);
                state.window().request_redraw();
            }
            WindowEvent::RedrawRequested => {
                state.update();
                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.reconfigure();
                        state.window().request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Surface out of memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => log::error!("Dropped frame: {:?}", e),
                }
            }
            _ => {}
        }
    }
}

/// Puts the winit canvas into the page and stretches it over the viewport.
#[cfg(target_arch = "wasm32")]
fn attach_canvas(window: &Window) {
    use winit::dpi::LogicalSize;
    use winit::platform::web::WindowExtWebSys;

    let Some(canvas) = window.canvas() else {
        log::warn!("Window has no canvas element");
        return;
    };
    let Some(web_window) = web_sys::window() else {
        return;
    };
    let Some(document) = web_window.document() else {
        return;
    };

    let parent: Option<web_sys::Element> = document
        .get_element_by_id(CANVAS_CONTAINER_ID)
        .or_else(|| document.body().map(Into::into));
    match parent {
        Some(parent) => {
            if parent.append_child(&canvas).is_err() {
                log::warn!("Couldn't append canvas to the document");
            }
        }
        None => log::warn!("Document has no #{} element or body", CANVAS_CONTAINER_ID),
    }

    let style = canvas.style();
    for (property, value) in [("width", "100vw"), ("height", "100vh"), ("display", "block")] {
        if style.set_property(property, value).is_err() {
            log::warn!("Couldn't set canvas style {}", property);
        }
    }

    let css_width = web_window.inner_width().ok().and_then(|w| w.as_f64());
    let css_height = web_window.inner_height().ok().and_then(|h| h.as_f64());
    if let (Some(width), Some(height)) = (css_width, css_height) {
        log::info!(
            "Viewport {}x{} (DPR {})",
            width,
            height,
            web_window.device_pixel_ratio()
        );
        let _ = window.request_inner_size(LogicalSize::new(width, height));
    }
}

pub fn run() -> anyhow::Result<()> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Info)?;
        } else {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
        }
    }

    let config = BoardConfig::load().unwrap_or_else(|e| {
        log::warn!("{:#}; using default config", e);
        BoardConfig::default()
    });

    let event_loop = EventLoop::<State>::with_user_event().build()?;
    let app = App::new(&event_loop, config);

    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            // Returns immediately; the browser drives the loop from here on.
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        } else {
            let mut app = app;
            event_loop.run_app(&mut app)?;
        }
    }
    Ok(())
}
