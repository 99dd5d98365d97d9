mod uniform;
mod viewport;

pub use uniform::ScreenUniforms;
pub use viewport::Viewport;
