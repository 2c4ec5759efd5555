//! Flipbook viewer: pagination over an edition's page images
//!
//! Pure state; the DOM glue in `api` renders it and feeds it events.

pub mod input;
pub mod viewer;

pub use input::{key_action, KeyAction, SwipeDirection, SwipeTracker};
pub use viewer::{FlipbookViewer, PageSlot, ShareData};
