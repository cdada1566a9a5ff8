//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Check whether an event happened outside `owner`.
///
/// Events without a node target count as outside.
pub fn event_is_outside(event: &Event, owner: &Element) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    !owner.contains(target.as_ref())
}
