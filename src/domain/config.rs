//! Flow-field background options

use serde::Deserialize;

pub const DEFAULT_COLOR: &str = "#6366f1";
pub const DEFAULT_TRAIL_OPACITY: f64 = 0.15;
pub const DEFAULT_PARTICLE_COUNT: usize = 600;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Options handed over from the page, e.g. `{"color": "#fff", "particleCount": 300}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlowFieldConfig {
    /// CSS color used to paint particles
    pub color: String,
    /// Alpha of the overlay painted each frame; lower keeps longer trails
    pub trail_opacity: f64,
    pub particle_count: usize,
    /// Multiplier on the field force
    pub speed: f64,
}

impl Default for FlowFieldConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            trail_opacity: DEFAULT_TRAIL_OPACITY,
            particle_count: DEFAULT_PARTICLE_COUNT,
            speed: DEFAULT_SPEED,
        }
    }
}

impl FlowFieldConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: FlowFieldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    /// Replace unset-looking values (empty, zero, negative, NaN) with defaults
    pub fn sanitized(mut self) -> Self {
        if self.color.trim().is_empty() {
            self.color = DEFAULT_COLOR.to_string();
        }
        if !(self.trail_opacity > 0.0) {
            self.trail_opacity = DEFAULT_TRAIL_OPACITY;
        }
        self.trail_opacity = self.trail_opacity.min(1.0);
        if self.particle_count == 0 {
            self.particle_count = DEFAULT_PARTICLE_COUNT;
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            self.speed = DEFAULT_SPEED;
        }
        self
    }
}
