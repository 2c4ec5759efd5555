/// Wall-clock milliseconds; `Date.now()` in the browser
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_at_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started_at_ms: now_ms() }
    }

    /// Clamped at zero; the wall clock may step backwards
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_at_ms).max(0.0)
    }
}
