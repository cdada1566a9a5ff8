//! Scoped DOM event listeners.
//!
//! [`EventListenerGuard`] registers a listener on construction and removes it
//! when dropped, so a listener lives exactly as long as the guard value.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A registered event listener, removed on drop.
pub struct EventListenerGuard {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    /// Register `handler` for `event_type` on `target`.
    ///
    /// `passive: false` is needed for listeners that call `prevent_default`
    /// (touch scrolling). Returns `None` if the browser rejects the
    /// registration.
    pub fn attach<E, F>(
        target: &EventTarget,
        event_type: &'static str,
        passive: bool,
        mut handler: F,
    ) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handler(event.unchecked_into::<E>());
        }) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            web_sys::console::warn_2(&format!("failed to listen for {event_type}").into(), &err);
            return None;
        }

        Some(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}

/// A set of guards released together.
#[derive(Default)]
pub struct ListenerSet(Vec<EventListenerGuard>);

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `guard` if registration succeeded.
    pub fn push(&mut self, guard: Option<EventListenerGuard>) {
        self.0.extend(guard);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove every listener now.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}
