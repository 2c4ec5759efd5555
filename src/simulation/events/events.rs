use super::FlowField;

/// Host notifications the flow field reacts to
///
/// Browser glue translates DOM events into these calls; tests call them
/// directly.
pub trait FieldEvents {
    /// Pointer moved to `(x, y)`, relative to the surface's top-left corner
    fn on_pointer_move(&mut self, x: f64, y: f64);

    fn on_pointer_leave(&mut self);

    /// Host container now measures `width x height`
    fn on_resize(&mut self, width: f64, height: f64);
}

impl FieldEvents for FlowField {
    fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.set_pointer(x, y);
    }

    fn on_pointer_leave(&mut self) {
        self.clear_pointer();
    }

    fn on_resize(&mut self, width: f64, height: f64) {
        self.reset(width, height);
    }
}
