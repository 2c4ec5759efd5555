//! Flow field - the particle simulation behind the page background
//!
//! `FlowField` owns the particle pool and the pointer; it knows nothing about
//! the DOM. `FlowFieldBackground` pairs it with a `Surface` and a `FrameLoop`
//! and is what the browser glue drives once per animation frame.

use crate::core::{Rng, Vec2};
use crate::domain::config::FlowFieldConfig;
use crate::render::Surface;
use crate::systems::Particle;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render.rs"]
mod render;
#[path = "events/events.rs"]
mod events;
mod background;
mod frame_loop;

pub use background::FlowFieldBackground;
pub use events::FieldEvents;
pub use frame_loop::{FrameLoop, FrameToken};
pub use perf_stats::FrameStats;

use perf_timer::PerfTimer;

/// Pointer position while nothing is tracked; far enough outside any
/// surface that no particle is ever within the interaction radius
pub const POINTER_SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Overlay color painted every frame to fade previous frames into trails
pub const TRAIL_COLOR: &str = "rgb(30, 58, 138)";

pub struct FlowField {
    config: FlowFieldConfig,
    width: f64,
    height: f64,
    pointer: Vec2,
    particles: Vec<Particle>,
    rng: Rng,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl FlowField {
    /// Create a field of `width x height` CSS pixels and spawn its particles
    pub fn new(width: f64, height: f64, config: FlowFieldConfig) -> Self {
        init::create_flow_field(width, height, config, Rng::from_entropy())
    }

    /// Same as `new` with a fixed random seed
    pub fn with_seed(width: f64, height: f64, config: FlowFieldConfig, seed: u32) -> Self {
        init::create_flow_field(width, height, config, Rng::new(seed))
    }

    /// Re-measure and respawn the whole pool. In-flight state is discarded.
    pub fn reset(&mut self, width: f64, height: f64) {
        init::reset(self, width, height);
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn pointer(&self) -> Vec2 { self.pointer }

    pub fn config(&self) -> &FlowFieldConfig { &self.config }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        settings::set_pointer(self, x, y);
    }

    pub fn clear_pointer(&mut self) {
        settings::clear_pointer(self);
    }

    pub fn is_pointer_tracked(&self) -> bool {
        self.pointer != POINTER_SENTINEL
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> FrameStats {
        settings::get_perf_stats(self)
    }

    /// Advance every particle by one frame without drawing
    pub fn step(&mut self) {
        step::step(self);
    }

    /// One animation frame: trail overlay, then step and draw each particle
    pub fn frame_on<S: Surface>(&mut self, surface: &mut S) {
        step::step_and_render(self, surface);
    }

    /// Draw the current state without advancing it
    pub fn render<S: Surface>(&self, surface: &mut S) {
        render::paint_trail(self, surface);
        render::paint_particles(self, surface);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
