//! Swipe gesture state machine.
//!
//! One [`GestureController`] tracks one row. Pointer, mouse and touch adapters
//! all feed the same controller: the first `begin` that succeeds owns the
//! session and later `begin` calls are refused until it resets, so duplicate
//! events from the redundant input families are harmless.

use leptos::logging::debug_warn;

use super::thresholds::{GestureThresholds, Zone};
use super::types::{
    Direction, DragFeedback, GestureSnapshot, MenuAction, Stage, SwipeAction, SwipeVariant,
};
use crate::core::haptic::{GestureCue, HapticSink};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// No drag, menu closed.
    Idle,
    /// No drag; the menu stayed open after a release in the revealed zone.
    MenuOpen,
    /// Press in progress.
    Dragging { origin: f64, offset: f64, zone: Zone },
}

/// Gesture state for a single swipeable row.
pub struct GestureController<H> {
    variant: SwipeVariant,
    thresholds: GestureThresholds,
    phase: Phase,
    haptics: H,
}

impl<H: HapticSink> GestureController<H> {
    /// Create a controller with the default thresholds.
    pub fn new(variant: SwipeVariant, haptics: H) -> Self {
        Self::with_thresholds(variant, GestureThresholds::default(), haptics)
    }

    /// Create a controller with custom thresholds.
    ///
    /// Thresholds should come from [`GestureThresholds::validate`].
    pub fn with_thresholds(
        variant: SwipeVariant,
        thresholds: GestureThresholds,
        haptics: H,
    ) -> Self {
        Self {
            variant,
            thresholds,
            phase: Phase::Idle,
            haptics,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    #[inline]
    pub fn is_menu_open(&self) -> bool {
        match self.phase {
            Phase::MenuOpen => true,
            Phase::Dragging { zone, .. } => zone == Zone::Left(Stage::Revealed),
            Phase::Idle => false,
        }
    }

    /// Start a session at `x`.
    ///
    /// Returns `false` without touching state when the subject is not
    /// eligible or a session is already running. A press while the menu is
    /// open closes the menu and starts a fresh drag.
    pub fn begin(&mut self, x: f64, eligible: bool) -> bool {
        if !eligible || self.is_active() {
            return false;
        }

        self.phase = Phase::Dragging {
            origin: x,
            offset: 0.0,
            zone: Zone::Neutral,
        };
        self.emit(GestureCue::Started);
        true
    }

    /// Feed the current pointer position. No-op when no session is active.
    pub fn update(&mut self, x: f64) {
        let Phase::Dragging {
            origin,
            zone: previous,
            ..
        } = self.phase
        else {
            return;
        };

        let offset = x - origin;
        let zone = self.thresholds.zone_for(offset);
        self.phase = Phase::Dragging {
            origin,
            offset,
            zone,
        };

        if zone.is_right_preview() && !previous.is_right_preview() {
            self.emit(GestureCue::ThresholdReached {
                direction: Direction::Right,
                action: self.variant.right_action(),
            });
        }

        match (previous.stage(), zone.stage()) {
            (Stage::Hidden, Stage::Revealed) => self.emit(GestureCue::MenuRevealed),
            (Stage::Revealed, Stage::Action) => self.emit(GestureCue::ThresholdReached {
                direction: Direction::Left,
                action: self.variant.left_action(),
            }),
            _ => {}
        }
    }

    /// Finish the session, returning the terminal action if a commit
    /// threshold was crossed.
    ///
    /// A release inside the revealed zone keeps the menu open.
    pub fn end(&mut self, eligible: bool) -> Option<SwipeAction> {
        let Phase::Dragging { offset, zone, .. } = self.phase else {
            return None;
        };

        if !eligible {
            self.phase = Phase::Idle;
            return None;
        }

        let action = if offset > self.thresholds.drag {
            Some(self.variant.right_action())
        } else if offset < -self.thresholds.menu_complete {
            Some(self.variant.left_action())
        } else {
            None
        };

        if let Some(action) = action {
            self.emit(GestureCue::Completed { action });
        }

        self.phase = if zone == Zone::Left(Stage::Revealed) {
            Phase::MenuOpen
        } else {
            Phase::Idle
        };
        action
    }

    /// Abort everything: drag and menu. Never yields an action.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Handle a tap on one of the revealed menu buttons.
    pub fn invoke_menu_action(&mut self, kind: MenuAction) -> SwipeAction {
        let action = SwipeAction::from(kind);
        let cue = match kind {
            MenuAction::Delete => GestureCue::Completed { action },
            MenuAction::Edit | MenuAction::Add => GestureCue::ButtonTap,
        };
        self.emit(cue);
        self.close_menu();
        action
    }

    /// Close the menu after an interaction elsewhere on the page.
    ///
    /// Only applies while the menu is open and no drag is running; returns
    /// whether anything changed.
    pub fn dismiss_menu(&mut self) -> bool {
        if self.phase == Phase::MenuOpen {
            self.phase = Phase::Idle;
            true
        } else {
            false
        }
    }

    /// Whether a touch at `x` has travelled far enough horizontally that
    /// native scrolling should be suppressed.
    pub fn exceeds_scroll_lock(&self, x: f64) -> bool {
        match self.phase {
            Phase::Dragging { origin, .. } => (x - origin).abs() > self.thresholds.scroll_lock,
            _ => false,
        }
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> GestureSnapshot {
        match self.phase {
            Phase::Idle => GestureSnapshot::default(),
            Phase::MenuOpen => GestureSnapshot {
                stage: Stage::Revealed,
                menu_visible: true,
                ..Default::default()
            },
            Phase::Dragging { offset, zone, .. } => {
                let direction = match zone {
                    Zone::Neutral => None,
                    Zone::Right { .. } => Some(Direction::Right),
                    Zone::Left(_) => Some(Direction::Left),
                };
                GestureSnapshot {
                    active: true,
                    offset,
                    direction,
                    stage: zone.stage(),
                    preview_visible: zone.is_right_preview()
                        || zone == Zone::Left(Stage::Action),
                    menu_visible: zone == Zone::Left(Stage::Revealed),
                    feedback: self.feedback(offset),
                }
            }
        }
    }

    fn feedback(&self, offset: f64) -> Option<DragFeedback> {
        let magnitude = offset.abs();
        if magnitude <= self.thresholds.feedback {
            return None;
        }
        let past_commit = magnitude > self.thresholds.drag;
        Some(match (offset > 0.0, past_commit) {
            (true, false) => DragFeedback::RightPreview,
            (true, true) => DragFeedback::RightComplete,
            (false, false) => DragFeedback::LeftPreview,
            (false, true) => DragFeedback::LeftComplete,
        })
    }

    fn close_menu(&mut self) {
        match &mut self.phase {
            Phase::MenuOpen => self.phase = Phase::Idle,
            Phase::Dragging { zone, .. } if *zone == Zone::Left(Stage::Revealed) => {
                *zone = Zone::Left(Stage::Hidden);
            }
            _ => {}
        }
    }

    fn emit(&self, cue: GestureCue) {
        if let Err(err) = self.haptics.trigger(cue) {
            debug_warn!("haptic feedback skipped for {:?}: {}", cue, err);
        }
    }
}
