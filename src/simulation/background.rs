use crate::domain::config::FlowFieldConfig;
use crate::render::Surface;

use super::events::FieldEvents;
use super::frame_loop::{FrameLoop, FrameToken};
use super::FlowField;

/// The animated page background: a flow field painted onto a surface
///
/// Host-agnostic: the browser glue owns the actual `requestAnimationFrame`
/// handles and passes the tokens issued here back into `on_frame`.
pub struct FlowFieldBackground<S: Surface> {
    field: FlowField,
    surface: S,
    frames: FrameLoop,
    device_pixel_ratio: f64,
    attached: bool,
}

impl<S: Surface> FlowFieldBackground<S> {
    /// Size `surface` to the container and spawn the particle pool
    pub fn attach(
        surface: S,
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
        config: FlowFieldConfig,
    ) -> Self {
        Self::with_field(surface, FlowField::new(width, height, config), device_pixel_ratio)
    }

    /// Attach around an existing field, e.g. one built with a fixed seed
    pub fn with_field(mut surface: S, field: FlowField, device_pixel_ratio: f64) -> Self {
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        surface.resize(field.width(), field.height(), device_pixel_ratio);
        log::debug!(
            "flow field attached: {}x{} @{}x, {} particles",
            field.width(),
            field.height(),
            device_pixel_ratio,
            field.particle_count()
        );

        Self {
            field,
            surface,
            frames: FrameLoop::new(),
            device_pixel_ratio,
            attached: true,
        }
    }

    /// Begin animating. Returns the first frame to schedule.
    pub fn start(&mut self) -> Option<FrameToken> {
        if !self.attached {
            return None;
        }
        self.frames.start()
    }

    /// Run the frame for `token` and return the next one to schedule.
    /// Tokens that are stale or arrive after `detach` are ignored.
    pub fn on_frame(&mut self, token: FrameToken) -> Option<FrameToken> {
        if !self.attached || !self.frames.begin(token) {
            return None;
        }
        self.field.frame_on(&mut self.surface);
        self.frames.reschedule()
    }

    /// Stop the loop. Returns the still-pending frame so the host can cancel
    /// it. Safe to call repeatedly and before `start`.
    pub fn detach(&mut self) -> Option<FrameToken> {
        if self.attached {
            log::debug!("flow field detached after {} frames", self.field.frame());
        }
        self.attached = false;
        self.frames.cancel()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_running(&self) -> bool {
        self.attached && self.frames.is_running()
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.frames.pending()
    }

    pub fn field(&self) -> &FlowField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut FlowField {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Browser zoom changes the ratio; it takes effect on the next resize
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio > 0.0 {
            self.device_pixel_ratio = ratio;
        }
    }
}

impl<S: Surface> FieldEvents for FlowFieldBackground<S> {
    fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.attached {
            self.field.on_pointer_move(x, y);
        }
    }

    fn on_pointer_leave(&mut self) {
        if self.attached {
            self.field.on_pointer_leave();
        }
    }

    /// Full reinitialization: surface resized, every particle respawned
    fn on_resize(&mut self, width: f64, height: f64) {
        if !self.attached {
            return;
        }
        self.field.on_resize(width, height);
        self.surface
            .resize(self.field.width(), self.field.height(), self.device_pixel_ratio);
        log::debug!("flow field resized to {}x{}", self.field.width(), self.field.height());
    }
}
