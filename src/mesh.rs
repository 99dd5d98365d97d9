use crate::vertex::Vertex;

/// Triangle list built on the CPU and uploaded once per redraw.
#[derive(Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Four corners in winding order, split into two triangles.
    pub fn push_quad(&mut self, corners: [[f32; 2]; 4], color: [f32; 4]) {
        let base = self.next_index();
        self.vertices
            .extend(corners.iter().map(|&position| Vertex { position, color }));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn push_rect(&mut self, position: [f32; 2], size: [f32; 2], color: [f32; 4]) {
        self.push_quad(
            [
                position,
                [position[0] + size[0], position[1]],
                [position[0] + size[0], position[1] + size[1]],
                [position[0], position[1] + size[1]],
            ],
            color,
        );
    }

    pub fn push_triangle(&mut self, corners: [[f32; 2]; 3], color: [f32; 4]) {
        let base = self.next_index();
        self.vertices
            .extend(corners.iter().map(|&position| Vertex { position, color }));
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// A thick line segment. Zero-length segments are skipped.
    pub fn push_line(&mut self, start: [f32; 2], end: [f32; 2], width: f32, color: [f32; 4]) {
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 0.0 {
            return;
        }

        let nx = -dy / len * width * 0.5;
        let ny = dx / len * width * 0.5;
        self.push_quad(
            [
                [start[0] - nx, start[1] - ny],
                [start[0] + nx, start[1] + ny],
                [end[0] + nx, end[1] + ny],
                [end[0] - nx, end[1] - ny],
            ],
            color,
        );
    }

    pub fn push_polyline(&mut self, points: &[[f32; 2]], width: f32, color: [f32; 4]) {
        for pair in points.windows(2) {
            self.push_line(pair[0], pair[1], width, color);
        }
    }
}
