#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniforms {
    /// Logical viewport size; the shader maps `[0, size]` onto clip space.
    pub screen_size: [f32; 2],
    pub _padding: [f32; 2], // Padding to make it 16-byte aligned
}

impl ScreenUniforms {
    pub fn new(logical_size: [f32; 2]) -> Self {
        Self {
            screen_size: logical_size,
            _padding: [0.0, 0.0],
        }
    }
}
