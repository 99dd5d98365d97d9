use winit::dpi::{PhysicalPosition, PhysicalSize};

use crate::drawing::Point;

/// Tracks the window surface in physical pixels and the device pixel
/// ratio. Drawings live in logical pixels so they keep their on-screen
/// size when the window moves between displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    physical: PhysicalSize<u32>,
    scale_factor: f64,
}

impl Viewport {
    /// Used until the window reports a real size (the HTML canvas default).
    pub const FALLBACK_SIZE: PhysicalSize<u32> = PhysicalSize::new(300, 150);

    pub fn new(physical: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let physical = if physical.width == 0 || physical.height == 0 {
            log::warn!(
                "Window reported {}x{}, using {}x{}",
                physical.width,
                physical.height,
                Self::FALLBACK_SIZE.width,
                Self::FALLBACK_SIZE.height
            );
            Self::FALLBACK_SIZE
        } else {
            physical
        };

        Self {
            physical,
            scale_factor: sanitize_scale(scale_factor),
        }
    }

    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.physical
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Returns `false` for sizes the surface cannot be configured with
    /// (minimised windows report zero).
    pub fn resize(&mut self, physical: PhysicalSize<u32>) -> bool {
        if physical.width == 0 || physical.height == 0 {
            return false;
        }
        self.physical = physical;
        log::debug!(
            "Viewport resized to {}x{} (DPR {})",
            physical.width,
            physical.height,
            self.scale_factor
        );
        true
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = sanitize_scale(scale_factor);
    }

    pub fn logical_size(&self) -> [f32; 2] {
        let logical = self.physical.to_logical::<f32>(self.scale_factor);
        [logical.width, logical.height]
    }

    pub fn to_logical(&self, position: PhysicalPosition<f64>) -> Point {
        let logical = position.to_logical::<f32>(self.scale_factor);
        Point::new(logical.x, logical.y)
    }
}

fn sanitize_scale(scale_factor: f64) -> f64 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    }
}
