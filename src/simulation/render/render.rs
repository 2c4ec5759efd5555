use crate::render::Surface;

use super::{FlowField, TRAIL_COLOR};

/// Partially cover the previous frame instead of clearing it
pub(super) fn paint_trail<S: Surface>(field: &FlowField, surface: &mut S) {
    surface.fill_rect(
        0.0,
        0.0,
        field.width,
        field.height,
        TRAIL_COLOR,
        field.config.trail_opacity,
    );
}

pub(super) fn paint_particles<S: Surface>(field: &FlowField, surface: &mut S) {
    let color = field.config.color.as_str();
    for particle in field.particles.iter() {
        particle.render(surface, color);
    }
}
