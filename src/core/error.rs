//! Error types for the application.
//!
//! - [`HapticError`] - vibration feedback could not be delivered
//! - [`ConfigError`] - gesture thresholds violate their ordering
//! - [`StorageError`] - localStorage persistence failures

use thiserror::Error;

/// Haptic feedback delivery errors.
///
/// These never escape the gesture controller; they are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HapticError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Device or browser has no Vibration API
    #[error("vibration not supported on this device")]
    Unsupported,
    /// Browser refused the vibration request (e.g. no user activation yet)
    #[error("vibration request rejected")]
    Rejected,
}

/// Invalid gesture threshold configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A threshold is zero, negative, or not finite.
    #[error("threshold `{name}` must be a positive finite number, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
    /// Two thresholds are not strictly increasing.
    #[error("threshold `{lower}` ({lower_value}) must be less than `{upper}` ({upper_value})")]
    Ordering {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },
    /// Preview ratio outside `(0, 1]`.
    #[error("preview ratio must be in (0, 1], got {0}")]
    PreviewRatio(f64),
}

/// localStorage persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to serialize data to JSON.
    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Failed to write to storage (quota exceeded, private mode).
    #[error("failed to write key `{0}`")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_message_names_both_thresholds() {
        let err = ConfigError::Ordering {
            lower: "menu_reveal",
            lower_value: 80.0,
            upper: "menu_complete",
            upper_value: 60.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("menu_reveal"));
        assert!(msg.contains("menu_complete"));
    }

    #[test]
    fn test_haptic_error_display() {
        assert_eq!(
            HapticError::Unsupported.to_string(),
            "vibration not supported on this device"
        );
    }
}
