use crate::app_state::State;
use crate::canvas::ScreenUniforms;
use crate::drawing::Tool;

use winit::dpi::PhysicalSize;
use winit::event::*;
use winit::keyboard::{KeyCode, PhysicalKey};

impl State {
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if !self.viewport.resize(new_size) {
            return;
        }
        self.reconfigure();
    }

    pub fn rescale(&mut self, scale_factor: f64) {
        log::info!(
            "Scale factor changed from {} to {}",
            self.viewport.scale_factor(),
            scale_factor
        );
        self.viewport.set_scale_factor(scale_factor);
        self.reconfigure();
    }

    /// Pushes the current viewport to the surface and the screen uniform.
    pub fn reconfigure(&mut self) {
        let size = self.viewport.physical_size();
        self.gpu.config.width = size.width;
        self.gpu.config.height = size.height;
        self.gpu
            .surface
            .configure(&self.gpu.device, &self.gpu.config);

        let uniforms = ScreenUniforms::new(self.viewport.logical_size());
        self.gpu
            .queue
            .write_buffer(&self.screen.uniform, 0, bytemuck::cast_slice(&[uniforms]));

        self.sketch.needs_rebuild = true;
    }

    fn select_tool(&mut self, tool: Tool) -> bool {
        if self.sketch.select_tool(tool) {
            self.window.set_cursor(tool.cursor());
        }
        true
    }

    /// Returns `true` when the event was consumed and a redraw may be needed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        let viewport = self.viewport.logical_size();
                        if let Some(tool) = self.sketch.pointer_pressed(viewport) {
                            self.window.set_cursor(tool.cursor());
                        }
                    }
                    ElementState::Released => self.sketch.pointer_released(),
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let at = self.viewport.to_logical(*position);
                self.sketch.pointer_moved(at)
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(keycode),
                        ..
                    },
                ..
            } => match keycode {
                KeyCode::Digit1 => self.select_tool(Tool::Pointer),
                KeyCode::Digit2 => self.select_tool(Tool::Circle),
                KeyCode::Digit3 => self.select_tool(Tool::Square),
                KeyCode::Digit4 => self.select_tool(Tool::Arrow),
                _ => false,
            },
            _ => false,
        }
    }
}
