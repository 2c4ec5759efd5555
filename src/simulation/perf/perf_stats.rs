use wasm_bindgen::prelude::*;

/// Timing and counters for the last simulated frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) step_ms: f64,
    pub(super) particles_stepped: u32,
    pub(super) respawns: u32,
    pub(super) frame: u64,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }

    #[wasm_bindgen(getter)]
    pub fn particles_stepped(&self) -> u32 { self.particles_stepped }

    #[wasm_bindgen(getter)]
    pub fn respawns(&self) -> u32 { self.respawns }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
