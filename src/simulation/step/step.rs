use crate::render::Surface;

use super::{render, FlowField, PerfTimer};

pub(super) fn step(field: &mut FlowField) {
    let timer = field.perf_enabled.then(PerfTimer::start);

    let (w, h, pointer) = (field.width, field.height, field.pointer);
    let mut respawns = 0u32;
    for particle in field.particles.iter_mut() {
        if particle.step(pointer, w, h, &mut field.rng) {
            respawns += 1;
        }
    }

    finish_frame(field, respawns, timer);
}

/// Step and draw are interleaved per particle, so each square is painted at
/// the position it reached this frame
pub(super) fn step_and_render<S: Surface>(field: &mut FlowField, surface: &mut S) {
    let timer = field.perf_enabled.then(PerfTimer::start);

    render::paint_trail(field, surface);

    let (w, h, pointer) = (field.width, field.height, field.pointer);
    let color = field.config.color.as_str();
    let mut respawns = 0u32;
    for particle in field.particles.iter_mut() {
        if particle.step(pointer, w, h, &mut field.rng) {
            respawns += 1;
        }
        particle.render(surface, color);
    }

    finish_frame(field, respawns, timer);
}

fn finish_frame(field: &mut FlowField, respawns: u32, timer: Option<PerfTimer>) {
    field.frame += 1;

    if let Some(timer) = timer {
        let stats = &mut field.perf_stats;
        stats.step_ms = timer.elapsed_ms();
        stats.particles_stepped = field.particles.len() as u32;
        stats.respawns = respawns;
        stats.frame = field.frame;
    }
}
