//! Gesture thresholds and offset classification.

use crate::config::gesture as defaults;
use crate::core::error::ConfigError;

use super::types::Stage;

/// Where the current offset sits relative to the thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Zone {
    /// Within the sensitivity floor; no direction yet.
    Neutral,
    /// Rightward past the sensitivity floor.
    Right { preview: bool },
    /// Leftward past the sensitivity floor, with the menu stage.
    Left(Stage),
}

impl Zone {
    pub(super) fn stage(self) -> Stage {
        match self {
            Self::Left(stage) => stage,
            _ => Stage::Hidden,
        }
    }

    pub(super) fn is_right_preview(self) -> bool {
        matches!(self, Self::Right { preview: true })
    }
}

/// Pixel thresholds driving the swipe state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Minimum `|offset|` before any direction is reported.
    pub sensitivity: f64,
    /// Leftward `|offset|` at which the action menu is revealed.
    pub menu_reveal: f64,
    /// Leftward `|offset|` at which the left action is committed.
    pub menu_complete: f64,
    /// Rightward offset at which the right action is committed.
    pub drag: f64,
    /// Fraction of `drag` at which the right preview appears.
    pub preview_ratio: f64,
    /// `|offset|` after which row feedback classes apply.
    pub feedback: f64,
    /// Horizontal touch travel after which native scrolling is blocked.
    pub scroll_lock: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            sensitivity: defaults::SENSITIVITY_THRESHOLD,
            menu_reveal: defaults::MENU_REVEAL_THRESHOLD,
            menu_complete: defaults::MENU_COMPLETE_THRESHOLD,
            drag: defaults::DRAG_THRESHOLD,
            preview_ratio: defaults::PREVIEW_RATIO,
            feedback: defaults::FEEDBACK_CLASS_THRESHOLD,
            scroll_lock: defaults::TOUCH_SCROLL_LOCK,
        }
    }
}

impl GestureThresholds {
    /// Known-consistent values used when the configured ones fail
    /// [`validate`](Self::validate).
    pub const FALLBACK: Self = Self {
        sensitivity: 30.0,
        menu_reveal: 60.0,
        menu_complete: 120.0,
        drag: 120.0,
        preview_ratio: 0.6,
        feedback: 20.0,
        scroll_lock: 10.0,
    };

    /// Check the threshold relationships, returning the thresholds unchanged
    /// when they hold.
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("sensitivity", self.sensitivity),
            ("menu_reveal", self.menu_reveal),
            ("menu_complete", self.menu_complete),
            ("drag", self.drag),
            ("feedback", self.feedback),
            ("scroll_lock", self.scroll_lock),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }

        for (lower, lower_value, upper, upper_value) in [
            ("sensitivity", self.sensitivity, "menu_reveal", self.menu_reveal),
            ("menu_reveal", self.menu_reveal, "menu_complete", self.menu_complete),
            ("sensitivity", self.sensitivity, "drag", self.drag),
        ] {
            if lower_value >= upper_value {
                return Err(ConfigError::Ordering {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                });
            }
        }

        if !(self.preview_ratio > 0.0 && self.preview_ratio <= 1.0) {
            return Err(ConfigError::PreviewRatio(self.preview_ratio));
        }

        Ok(self)
    }

    /// Offset at which the right-swipe preview icon appears.
    #[inline]
    pub fn preview_distance(&self) -> f64 {
        self.drag * self.preview_ratio
    }

    pub(super) fn zone_for(&self, offset: f64) -> Zone {
        let magnitude = offset.abs();
        if magnitude <= self.sensitivity {
            Zone::Neutral
        } else if offset > 0.0 {
            Zone::Right {
                preview: magnitude > self.preview_distance(),
            }
        } else if magnitude < self.menu_reveal {
            Zone::Left(Stage::Hidden)
        } else if magnitude < self.menu_complete {
            Zone::Left(Stage::Revealed)
        } else {
            Zone::Left(Stage::Action)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GestureThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_fallback_is_valid() {
        assert!(GestureThresholds::FALLBACK.validate().is_ok());
    }

    #[test]
    fn test_reveal_must_exceed_sensitivity() {
        let thresholds = GestureThresholds {
            menu_reveal: 30.0,
            ..Default::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ConfigError::Ordering {
                lower: "sensitivity",
                upper: "menu_reveal",
                ..
            })
        ));
    }

    #[test]
    fn test_complete_must_exceed_reveal() {
        let thresholds = GestureThresholds {
            menu_complete: 50.0,
            ..Default::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ConfigError::Ordering {
                lower: "menu_reveal",
                upper: "menu_complete",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let thresholds = GestureThresholds {
            drag: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ConfigError::InvalidThreshold { name: "drag", .. })
        ));
    }

    #[test]
    fn test_rejects_preview_ratio_out_of_range() {
        let thresholds = GestureThresholds {
            preview_ratio: 1.5,
            ..Default::default()
        };
        assert_eq!(thresholds.validate(), Err(ConfigError::PreviewRatio(1.5)));
    }

    #[test]
    fn test_zone_boundaries() {
        let t = GestureThresholds::default();
        assert_eq!(t.zone_for(30.0), Zone::Neutral);
        assert_eq!(t.zone_for(-30.0), Zone::Neutral);
        assert_eq!(t.zone_for(31.0), Zone::Right { preview: false });
        assert_eq!(t.zone_for(72.0), Zone::Right { preview: false });
        assert_eq!(t.zone_for(73.0), Zone::Right { preview: true });
        assert_eq!(t.zone_for(-59.0), Zone::Left(Stage::Hidden));
        assert_eq!(t.zone_for(-60.0), Zone::Left(Stage::Revealed));
        assert_eq!(t.zone_for(-119.9), Zone::Left(Stage::Revealed));
        assert_eq!(t.zone_for(-120.0), Zone::Left(Stage::Action));
    }
}
