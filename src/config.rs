//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "cesta";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Gesture Configuration
// =============================================================================

/// Swipe gesture thresholds in CSS pixels.
///
/// Relationships that must hold (checked by
/// [`GestureThresholds::validate`](crate::core::gesture::GestureThresholds::validate)):
/// `SENSITIVITY < MENU_REVEAL < MENU_COMPLETE` and `DRAG > SENSITIVITY`.
pub mod gesture {
    /// Minimum horizontal travel before any direction or preview is shown.
    pub const SENSITIVITY_THRESHOLD: f64 = 30.0;
    /// Leftward travel that reveals the action menu.
    pub const MENU_REVEAL_THRESHOLD: f64 = 60.0;
    /// Leftward travel that commits the left action.
    pub const MENU_COMPLETE_THRESHOLD: f64 = 120.0;
    /// Rightward travel that commits the right action.
    pub const DRAG_THRESHOLD: f64 = 120.0;
    /// Fraction of `DRAG_THRESHOLD` at which the right preview icon appears.
    pub const PREVIEW_RATIO: f64 = 0.6;
    /// Travel after which row feedback classes are applied.
    pub const FEEDBACK_CLASS_THRESHOLD: f64 = 20.0;
    /// Horizontal touch travel after which native scrolling is suppressed.
    pub const TOUCH_SCROLL_LOCK: f64 = 10.0;
}

// =============================================================================
// Haptic Configuration
// =============================================================================

/// Media query that disables vibration feedback.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage keys for persisted list data.
pub mod storage {
    /// Current shopping list.
    pub const LIST_KEY: &str = "cesta.list";
    /// Previously bought products offered in the new-list view.
    pub const PRODUCTS_KEY: &str = "cesta.products";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
