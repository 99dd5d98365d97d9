use crate::app_state::State;
use wgpu::util::DeviceExt;

impl State {
    /// Rebuilds the frame geometry when the board, toolbar or viewport
    /// changed.
    pub fn update(&mut self) {
        if !self.sketch.take_rebuild() {
            return;
        }
        self.sketch
            .build_mesh(&mut self.mesh, self.viewport.logical_size());
        self.upload_mesh();
    }

    fn upload_mesh(&mut self) {
        if self.mesh.is_empty() {
            self.geometry.vertex = None;
            self.geometry.index = None;
            self.geometry.count = 0;
            return;
        }

        self.geometry.vertex = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));

        self.geometry.index = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&self.mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));

        self.geometry.count = self.mesh.indices.len() as u32;
    }
}
