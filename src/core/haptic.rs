//! Haptic feedback model.
//!
//! The gesture controller reports [`GestureCue`]s to a [`HapticSink`]. Each
//! cue maps to a [`HapticKind`], and each kind to a vibration pattern. The
//! browser implementation lives in [`crate::utils::haptic`].

use crate::core::error::HapticError;
use crate::core::gesture::{Direction, SwipeAction};

/// Gesture event worth a vibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureCue {
    /// A drag session began.
    Started,
    /// The commit threshold was crossed in `direction`.
    ThresholdReached {
        direction: Direction,
        action: SwipeAction,
    },
    /// The leftward action menu appeared.
    MenuRevealed,
    /// A terminal action fired.
    Completed { action: SwipeAction },
    /// A menu button was tapped.
    ButtonTap,
}

/// Feedback intensity families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticKind {
    Success,
    Warning,
    Error,
    Selection,
    ImpactLight,
    ImpactMedium,
    ImpactHeavy,
    NotificationSuccess,
    NotificationWarning,
    NotificationError,
}

/// Vibration pattern in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VibrationPattern {
    /// Single pulse
    Pulse(u32),
    /// Alternating vibrate/pause durations
    Sequence(&'static [u32]),
}

impl HapticKind {
    pub fn pattern(self) -> VibrationPattern {
        use VibrationPattern::{Pulse, Sequence};

        match self {
            Self::Success => Sequence(&[50, 30, 50]),
            Self::Warning => Sequence(&[100, 50, 100, 50, 100]),
            Self::Error => Sequence(&[200, 100, 200]),
            Self::Selection => Pulse(25),
            Self::ImpactLight => Pulse(20),
            Self::ImpactMedium => Pulse(50),
            Self::ImpactHeavy => Pulse(100),
            Self::NotificationSuccess => Sequence(&[30, 20, 30, 20, 60]),
            Self::NotificationWarning => Sequence(&[60, 30, 60, 30, 60]),
            Self::NotificationError => Sequence(&[150, 50, 150, 50, 200]),
        }
    }
}

impl GestureCue {
    /// Feedback kind for this cue.
    pub fn haptic_kind(self) -> HapticKind {
        match self {
            Self::Started | Self::MenuRevealed => HapticKind::ImpactLight,
            Self::ThresholdReached { direction, action } => match (direction, action) {
                (Direction::Right, SwipeAction::Complete) => HapticKind::Success,
                (Direction::Right, SwipeAction::AddToList) => HapticKind::NotificationSuccess,
                (Direction::Left, SwipeAction::MarkMissing | SwipeAction::Delete) => {
                    HapticKind::Warning
                }
                _ => HapticKind::ImpactMedium,
            },
            Self::Completed { action } => match action {
                SwipeAction::Complete | SwipeAction::AddToList => HapticKind::NotificationSuccess,
                SwipeAction::MarkMissing => HapticKind::NotificationWarning,
                SwipeAction::Delete => HapticKind::NotificationError,
                SwipeAction::Edit => HapticKind::ImpactHeavy,
            },
            Self::ButtonTap => HapticKind::Selection,
        }
    }
}

/// Receiver of gesture cues.
///
/// Delivery is best-effort: callers log and discard errors.
pub trait HapticSink {
    fn trigger(&self, cue: GestureCue) -> Result<(), HapticError>;
}

/// Sink that discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticSink for NoHaptics {
    fn trigger(&self, _cue: GestureCue) -> Result<(), HapticError> {
        Ok(())
    }
}

impl<S: HapticSink + ?Sized> HapticSink for std::rc::Rc<S> {
    fn trigger(&self, cue: GestureCue) -> Result<(), HapticError> {
        (**self).trigger(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_cue_depends_on_action() {
        let complete = GestureCue::ThresholdReached {
            direction: Direction::Right,
            action: SwipeAction::Complete,
        };
        let add = GestureCue::ThresholdReached {
            direction: Direction::Right,
            action: SwipeAction::AddToList,
        };
        let missing = GestureCue::ThresholdReached {
            direction: Direction::Left,
            action: SwipeAction::MarkMissing,
        };
        assert_eq!(complete.haptic_kind(), HapticKind::Success);
        assert_eq!(add.haptic_kind(), HapticKind::NotificationSuccess);
        assert_eq!(missing.haptic_kind(), HapticKind::Warning);
    }

    #[test]
    fn test_unmatched_threshold_falls_back_to_medium() {
        let cue = GestureCue::ThresholdReached {
            direction: Direction::Left,
            action: SwipeAction::Complete,
        };
        assert_eq!(cue.haptic_kind(), HapticKind::ImpactMedium);
    }

    #[test]
    fn test_completed_delete_is_error_pattern() {
        let cue = GestureCue::Completed {
            action: SwipeAction::Delete,
        };
        assert_eq!(
            cue.haptic_kind().pattern(),
            VibrationPattern::Sequence(&[150, 50, 150, 50, 200])
        );
    }

    #[test]
    fn test_button_tap_is_short_pulse() {
        assert_eq!(
            GestureCue::ButtonTap.haptic_kind().pattern(),
            VibrationPattern::Pulse(25)
        );
    }
}
