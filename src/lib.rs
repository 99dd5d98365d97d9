mod app;
mod app_state;
mod board;
mod canvas;
mod config;
mod drawing;
mod error;
mod event_handler;
mod mesh;
mod renderer;
mod rough;
mod selection;
mod sketch;
mod state;
mod ui;
mod update_logic;
mod vertex;

// Re-export the main public interface
pub use app::run;
pub use board::Board;
pub use config::BoardConfig;
pub use drawing::{Drawing, Point, Tool};
pub use error::SetupError;
pub use rough::{HandDrawnOptions, RoughGenerator};
pub use selection::ToolSelection;
pub use vertex::Vertex;

// Re-export for WASM compatibility
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() {
    if let Err(e) = run() {
        log::error!("{:#}", e);
    }
}
