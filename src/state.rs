use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};

use crate::drawing::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInputState {
    Idle,
    Drawing,
}

pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub render_pipeline: RenderPipeline,
}

pub struct ScreenBuffers {
    pub uniform: Buffer,
    pub bind_group: BindGroup,
}

#[derive(Default)]
pub struct GeometryBuffers {
    pub vertex: Option<Buffer>,
    pub index: Option<Buffer>,
    pub count: u32,
}

pub struct InputState {
    pub mouse_pos: Point,
    pub state: UserInputState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mouse_pos: Point::default(),
            state: UserInputState::Idle,
        }
    }
}
