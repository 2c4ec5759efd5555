//! Drawing surfaces the flow field paints onto

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use surface::{DrawCommand, DrawList, Surface};
