use crate::core::Rng;
use crate::domain::config::FlowFieldConfig;
use crate::systems::Particle;

use super::perf_stats::FrameStats;
use super::{FlowField, POINTER_SENTINEL};

pub(super) fn create_flow_field(width: f64, height: f64, config: FlowFieldConfig, rng: Rng) -> FlowField {
    let config = config.sanitized();
    let mut field = FlowField {
        particles: Vec::with_capacity(config.particle_count),
        config,
        width: 0.0,
        height: 0.0,
        pointer: POINTER_SENTINEL,
        rng,
        frame: 0,
        perf_enabled: false,
        perf_stats: FrameStats::default(),
    };
    reset(&mut field, width, height);
    field
}

pub(super) fn reset(field: &mut FlowField, width: f64, height: f64) {
    field.width = sanitize_extent(width);
    field.height = sanitize_extent(height);

    let (w, h, speed) = (field.width, field.height, field.config.speed);
    let count = field.config.particle_count;
    let rng = &mut field.rng;

    field.particles.clear();
    field
        .particles
        .extend((0..count).map(|_| Particle::spawn(w, h, speed, rng)));

    log::debug!("flow field reset: {}x{} with {} particles", w, h, count);
}

/// Containers report non-negative sizes; anything else is treated as empty
fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
