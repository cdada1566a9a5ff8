//! Vibration API haptic sink.

use js_sys::{Array, Reflect};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::dom;
use crate::core::error::HapticError;
use crate::core::haptic::{GestureCue, HapticSink, VibrationPattern};

/// Haptic sink backed by `navigator.vibrate`.
///
/// Does nothing while the user prefers reduced motion.
#[derive(Clone, Copy)]
pub struct VibrationHaptics {
    reduced_motion: Signal<bool>,
}

impl VibrationHaptics {
    pub fn new(reduced_motion: Signal<bool>) -> Self {
        Self { reduced_motion }
    }
}

impl HapticSink for VibrationHaptics {
    fn trigger(&self, cue: GestureCue) -> Result<(), HapticError> {
        if self.reduced_motion.get_untracked() {
            return Ok(());
        }
        vibrate(cue.haptic_kind().pattern())
    }
}

/// Play a vibration pattern.
///
/// Checks for the API first: calling a missing `navigator.vibrate` (iOS
/// Safari) would throw.
pub fn vibrate(pattern: VibrationPattern) -> Result<(), HapticError> {
    let navigator = dom::window().ok_or(HapticError::NoWindow)?.navigator();

    let supported = Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
    if !supported {
        return Err(HapticError::Unsupported);
    }

    let accepted = match pattern {
        VibrationPattern::Pulse(ms) => navigator.vibrate_with_duration(ms),
        VibrationPattern::Sequence(steps) => {
            let steps: Array = steps.iter().map(|&ms| JsValue::from(ms)).collect();
            navigator.vibrate_with_pattern(&steps)
        }
    };

    if accepted {
        Ok(())
    } else {
        Err(HapticError::Rejected)
    }
}
