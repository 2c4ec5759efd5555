use super::perf_stats::FrameStats;
use super::{FlowField, POINTER_SENTINEL};
use crate::core::Vec2;

pub(super) fn set_pointer(field: &mut FlowField, x: f64, y: f64) {
    field.pointer = if x.is_finite() && y.is_finite() {
        Vec2::new(x, y)
    } else {
        POINTER_SENTINEL
    };
}

pub(super) fn clear_pointer(field: &mut FlowField) {
    field.pointer = POINTER_SENTINEL;
}

pub(super) fn enable_perf_metrics(field: &mut FlowField, enabled: bool) {
    field.perf_enabled = enabled;
    if !enabled {
        field.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(field: &FlowField) -> FrameStats {
    field.perf_stats.clone()
}
