//! Swipe gesture hook.
//!
//! Wraps a [`GestureController`] for one row and adapts the three browser
//! input families (pointer, mouse, touch) plus the keyboard onto it. Every
//! adapter funnels into the same controller, so whichever family presses
//! first owns the session and the rest become no-ops.
//!
//! Document-level listeners are scoped:
//! - move/release/cancel/keydown listeners exist only while a drag is active
//! - click/touchstart/keydown listeners exist only while the menu is open and
//!   no drag is running
//!
//! Both sets are held in [`ListenerSet`]s, so clearing the set or disposing
//! the row removes them.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::core::gesture::{
    GestureController, GestureSnapshot, MenuAction, SwipeAction, SwipeVariant, keyboard,
};
use crate::utils::dom;
use crate::utils::haptic::VibrationHaptics;
use crate::utils::listener::{EventListenerGuard, ListenerSet};

type Controller = GestureController<VibrationHaptics>;

/// Reactive gesture state and input adapters for one row.
#[derive(Clone, Copy)]
pub struct SwipeGesture {
    /// Current state for rendering.
    pub state: ReadSignal<GestureSnapshot>,
    set_state: WriteSignal<GestureSnapshot>,
    controller: StoredValue<Controller>,
    drag_listeners: StoredValue<ListenerSet, LocalStorage>,
    menu_listeners: StoredValue<ListenerSet, LocalStorage>,
    eligible: Signal<bool>,
    on_action: Callback<SwipeAction>,
    row: NodeRef<leptos::html::Li>,
}

/// Create the gesture state for a row.
///
/// `eligible` is re-read at press and release; `on_action` runs at most once
/// per session or menu tap. Attach `row` to the row element so outside
/// clicks can be told apart from clicks on the row itself.
pub fn use_swipe_gesture(
    variant: SwipeVariant,
    eligible: Signal<bool>,
    on_action: Callback<SwipeAction>,
    row: NodeRef<leptos::html::Li>,
) -> SwipeGesture {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let haptics = VibrationHaptics::new(ctx.reduced_motion);
    let controller = StoredValue::new(GestureController::with_thresholds(
        variant,
        ctx.thresholds,
        haptics,
    ));
    let (state, set_state) = signal(GestureSnapshot::default());

    let gesture = SwipeGesture {
        state,
        set_state,
        controller,
        drag_listeners: StoredValue::new_local(ListenerSet::new()),
        menu_listeners: StoredValue::new_local(ListenerSet::new()),
        eligible,
        on_action,
        row,
    };

    on_cleanup(move || gesture.release_listeners());

    gesture
}

impl SwipeGesture {
    // ------------------------------------------------------------------------
    // Controller transitions
    // ------------------------------------------------------------------------

    fn begin(&self, x: f64) -> bool {
        let eligible = self.eligible.get_untracked();
        let started = self.transition(|c| c.begin(x, eligible)).unwrap_or(false);
        if started {
            self.attach_drag_listeners();
        }
        started
    }

    fn update(&self, x: f64) {
        if self.is_active() {
            self.transition(|c| c.update(x));
        }
    }

    fn end(&self) {
        if !self.is_active() {
            return;
        }
        let eligible = self.eligible.get_untracked();
        if let Some(action) = self.transition(|c| c.end(eligible)).flatten() {
            self.on_action.run(action);
        }
    }

    /// Abort the drag and close the menu.
    pub fn cancel(&self) {
        self.transition(Controller::cancel);
    }

    fn dismiss_menu(&self) {
        self.transition(Controller::dismiss_menu);
    }

    fn is_active(&self) -> bool {
        self.controller
            .try_with_value(Controller::is_active)
            .unwrap_or(false)
    }

    fn is_menu_open(&self) -> bool {
        self.controller
            .try_with_value(Controller::is_menu_open)
            .unwrap_or(false)
    }

    /// Run `f` on the controller, then publish the new snapshot and bring the
    /// scoped listeners in line with it.
    ///
    /// Returns `None` once the row has been disposed.
    fn transition<U>(&self, f: impl FnOnce(&mut Controller) -> U) -> Option<U> {
        let out = self.controller.try_update_value(f)?;
        let snapshot = self.controller.try_with_value(Controller::snapshot)?;

        if !snapshot.active {
            self.drag_listeners.try_update_value(ListenerSet::clear);
        }
        if snapshot.menu_visible && !snapshot.active {
            self.attach_menu_listeners();
        } else {
            self.menu_listeners.try_update_value(ListenerSet::clear);
        }

        self.set_state.try_set(snapshot);
        Some(out)
    }

    fn release_listeners(&self) {
        self.drag_listeners.try_update_value(ListenerSet::clear);
        self.menu_listeners.try_update_value(ListenerSet::clear);
    }

    // ------------------------------------------------------------------------
    // Scoped document listeners
    // ------------------------------------------------------------------------

    fn attach_drag_listeners(&self) {
        let Some(document) = dom::document() else {
            return;
        };
        let gesture = *self;
        let mut set = ListenerSet::new();

        set.push(EventListenerGuard::attach(
            &document,
            "mousemove",
            true,
            move |ev: ev::MouseEvent| gesture.update(f64::from(ev.client_x())),
        ));
        set.push(EventListenerGuard::attach(
            &document,
            "mouseup",
            true,
            move |_: ev::MouseEvent| gesture.end(),
        ));
        set.push(EventListenerGuard::attach(
            &document,
            "touchmove",
            false,
            move |ev: ev::TouchEvent| gesture.on_touch_move(ev),
        ));
        set.push(EventListenerGuard::attach(
            &document,
            "touchend",
            true,
            move |_: ev::TouchEvent| gesture.end(),
        ));
        set.push(EventListenerGuard::attach(
            &document,
            "touchcancel",
            true,
            move |_: ev::TouchEvent| gesture.cancel(),
        ));
        set.push(EventListenerGuard::attach(
            &document,
            "keydown",
            true,
            move |ev: ev::KeyboardEvent| {
                gesture.on_key_down(ev);
            },
        ));

        self.drag_listeners.try_update_value(|current| *current = set);
    }

    fn attach_menu_listeners(&self) {
        let already = self
            .menu_listeners
            .try_with_value(|set| !set.is_empty())
            .unwrap_or(true);
        if already {
            return;
        }
        let Some(document) = dom::document() else {
            return;
        };
        let gesture = *self;
        let mut set = ListenerSet::new();

        set.push(EventListenerGuard::attach(
            &document,
            "click",
            true,
            move |ev: ev::MouseEvent| gesture.on_outside_press(&ev),
        ));
        set.push(EventListenerGuard::attach(
            &document,
            "touchstart",
            true,
            move |ev: ev::TouchEvent| gesture.on_outside_press(&ev),
        ));
        set.push(EventListenerGuard::attach(
            &document,
            "keydown",
            true,
            move |ev: ev::KeyboardEvent| {
                gesture.on_key_down(ev);
            },
        ));

        self.menu_listeners.try_update_value(|current| *current = set);
    }

    fn on_outside_press(&self, event: &web_sys::Event) {
        if self.is_active() || !self.is_menu_open() {
            return;
        }
        let outside = self
            .row
            .get_untracked()
            .is_none_or(|row| dom::event_is_outside(event, &row));
        if outside {
            self.dismiss_menu();
        }
    }

    // ------------------------------------------------------------------------
    // Row adapters
    // ------------------------------------------------------------------------

    pub fn on_pointer_down(&self, ev: ev::PointerEvent) {
        if self.begin(f64::from(ev.client_x()))
            && let Some(target) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            let _ = target.set_pointer_capture(ev.pointer_id());
        }
    }

    pub fn on_pointer_move(&self, ev: ev::PointerEvent) {
        self.update(f64::from(ev.client_x()));
    }

    pub fn on_pointer_up(&self, ev: ev::PointerEvent) {
        if !self.is_active() {
            return;
        }
        if let Some(target) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            let _ = target.release_pointer_capture(ev.pointer_id());
        }
        self.end();
    }

    pub fn on_pointer_cancel(&self, _ev: ev::PointerEvent) {
        if self.is_active() {
            self.cancel();
        }
    }

    pub fn on_mouse_down(&self, ev: ev::MouseEvent) {
        self.begin(f64::from(ev.client_x()));
    }

    pub fn on_touch_start(&self, ev: ev::TouchEvent) {
        if let Some(touch) = ev.touches().get(0) {
            self.begin(f64::from(touch.client_x()));
        }
    }

    fn on_touch_move(&self, ev: ev::TouchEvent) {
        if !self.is_active() {
            return;
        }
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let x = f64::from(touch.client_x());
        let lock_scroll = self
            .controller
            .try_with_value(|c| c.exceeds_scroll_lock(x))
            .unwrap_or(false);
        if lock_scroll && ev.cancelable() {
            ev.prevent_default();
        }
        self.update(x);
    }

    /// Escape aborts a drag or closes the menu.
    ///
    /// Returns whether the key was consumed.
    pub fn on_key_down(&self, ev: ev::KeyboardEvent) -> bool {
        if keyboard::is_cancel_key(&ev.key()) && (self.is_active() || self.is_menu_open()) {
            self.cancel();
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------------
    // Menu buttons
    // ------------------------------------------------------------------------

    /// Click on a revealed menu button.
    pub fn on_menu_click(&self, kind: MenuAction, ev: ev::MouseEvent) {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(action) = self.transition(|c| c.invoke_menu_action(kind)) {
            self.on_action.run(action);
        }
    }
}
