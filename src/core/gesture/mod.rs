//! Swipe gesture recognition.
//!
//! - [`GestureController`] - press/move/release state machine for one row
//! - [`GestureThresholds`] - pixel thresholds with validation
//! - [`GestureSnapshot`] - render-facing state
//! - [`keyboard`] - Escape cancellation and row shortcuts

mod controller;
pub mod keyboard;
mod thresholds;
mod types;

pub use controller::GestureController;
pub use thresholds::GestureThresholds;
pub use types::{
    Direction, DragFeedback, GestureSnapshot, MenuAction, Stage, SwipeAction, SwipeVariant,
};
