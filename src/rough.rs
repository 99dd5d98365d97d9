use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, PartialEq)]
pub struct HandDrawnOptions {
    pub stroke: [f32; 4],
    pub stroke_width: f32,
    /// Total jitter span; every point moves by at most half of it per axis.
    pub roughness: f32,
    pub segment_count: u32,
}

impl Default for HandDrawnOptions {
    fn default() -> Self {
        Self {
            stroke: [1.0, 1.0, 1.0, 1.0],
            stroke_width: 5.0,
            roughness: 3.0,
            segment_count: 2,
        }
    }
}

pub struct RoughGenerator {
    rng: StdRng,
}

impl RoughGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Uniform offset in `[-roughness / 2, roughness / 2)`.
    pub fn random_offset(&mut self, roughness: f32) -> f32 {
        (self.rng.random::<f32>() - 0.5) * roughness
    }

    /// Splits the line into `segment_count` equal pieces and nudges every
    /// vertex, including both ends, by a random offset.
    pub fn wobbly_line(
        &mut self,
        start: [f32; 2],
        end: [f32; 2],
        roughness: f32,
        segment_count: u32,
    ) -> Vec<[f32; 2]> {
        let segment_count = segment_count.max(1);
        let dx = (end[0] - start[0]) / segment_count as f32;
        let dy = (end[1] - start[1]) / segment_count as f32;

        let mut points = Vec::with_capacity(segment_count as usize + 1);
        points.push([
            start[0] + self.random_offset(roughness),
            start[1] + self.random_offset(roughness),
        ]);

        for i in 1..=segment_count {
            let step = i as f32;
            points.push([
                start[0] + dx * step + self.random_offset(roughness),
                start[1] + dy * step + self.random_offset(roughness),
            ]);
        }

        points
    }

    /// One wobbly polyline per edge, clockwise from the origin corner.
    pub fn hand_drawn_rect(
        &mut self,
        position: [f32; 2],
        size: [f32; 2],
        options: &HandDrawnOptions,
    ) -> Vec<Vec<[f32; 2]>> {
        let corners = [
            position,
            [position[0] + size[0], position[1]],
            [position[0] + size[0], position[1] + size[1]],
            [position[0], position[1] + size[1]],
        ];

        (0..4)
            .map(|i| {
                self.wobbly_line(
                    corners[i],
                    corners[(i + 1) % 4],
                    options.roughness,
                    options.segment_count,
                )
            })
            .collect()
    }
}
