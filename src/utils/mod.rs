//! Browser-facing utilities.
//!
//! Provides:
//! - [`dom`] - window, document and localStorage access
//! - [`haptic`] - Vibration API haptic sink
//! - [`listener`] - scoped event listener guards
//! - [`storage`] - JSON persistence in localStorage

pub mod dom;
pub mod haptic;
pub mod listener;
pub mod storage;
