//! UI components built with Leptos.
//!
//! - [`Shell`] - header, view tabs and screen container
//! - [`list`] - current list and new-list screens
//! - [`swipe`] - swipeable rows with the progressive action menu
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod list;
mod shell;
pub mod swipe;

pub use shell::Shell;
