//! Sandesh web engine - newsletter site widgets in WASM
//!
//! - Flow-field background: a particle simulation painted behind the hero
//!   section, reacting to the pointer
//! - Flipbook viewer: paginated edition pages with thumbnails, zoom,
//!   fullscreen, swipe and sharing
//!
//! Architecture:
//! - core/        - Math and randomness
//! - domain/      - Configuration and the edition catalog
//! - systems/     - Flow-field forces and particles
//! - simulation/  - Field orchestration, frame loop, background
//! - render/      - Drawing surfaces
//! - flipbook/    - Viewer state and input mapping
//! - api/         - Browser glue (wasm32 only)

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod render;
pub mod flipbook;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic reporting and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
    }

    log::info!("Sandesh web engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::catalog::{Catalog, Edition};
pub use domain::config::FlowFieldConfig;
pub use flipbook::FlipbookViewer;
pub use render::{DrawList, Surface};
pub use simulation::{FieldEvents, FlowField, FlowFieldBackground, FrameLoop, FrameToken};
