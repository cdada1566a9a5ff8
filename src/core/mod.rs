//! Core logic, independent of the browser.
//!
//! This module provides:
//! - [`gesture`] - swipe gesture state machine
//! - [`haptic`] - haptic cue model and sink trait
//! - [`list`] - shopping list state transitions
//! - [`error`] - error types

pub mod error;
pub mod gesture;
pub mod haptic;
pub mod list;
