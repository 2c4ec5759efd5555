//! Touch and keyboard input for the flipbook

/// Minimum horizontal travel, in CSS pixels, that counts as a swipe
pub const SWIPE_THRESHOLD: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved leftwards: turn to the next page
    Next,
    /// Finger moved rightwards: turn to the previous page
    Prev,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
    }

    pub fn end(&self, x: f64) -> Option<SwipeDirection> {
        if self.start_x - x > SWIPE_THRESHOLD {
            Some(SwipeDirection::Next)
        } else if x - self.start_x > SWIPE_THRESHOLD {
            Some(SwipeDirection::Prev)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Prev,
    ExitFullscreen,
}

/// Keyboard shortcuts are only live while the flipbook is fullscreen
pub fn key_action(key: &str, fullscreen: bool) -> Option<KeyAction> {
    if !fullscreen {
        return None;
    }
    match key {
        "ArrowRight" | "ArrowDown" => Some(KeyAction::Next),
        "ArrowLeft" | "ArrowUp" => Some(KeyAction::Prev),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}
