//! Browser-facing API: wasm-bindgen exports and DOM glue
//!
//! Everything here is compiled for `wasm32` only; the state it drives lives
//! in `simulation` and `flipbook` and is tested natively.

#[cfg(target_arch = "wasm32")]
pub mod background;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod flipbook;
#[cfg(target_arch = "wasm32")]
pub mod menu;
