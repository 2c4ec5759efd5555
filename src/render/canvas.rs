use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::Surface;

/// `<canvas>` backed surface, positioned to sit behind its container's content
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into()?;

        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("pointer-events", "none")?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        // Assigning width/height also resets the context transform
        self.canvas.set_width((width * device_pixel_ratio) as u32);
        self.canvas.set_height((height * device_pixel_ratio) as u32);
        if let Err(err) = self
            .ctx
            .set_transform(device_pixel_ratio, 0.0, 0.0, device_pixel_ratio, 0.0, 0.0)
        {
            log::warn!("canvas transform rejected: {:?}", err);
        }

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }
}
