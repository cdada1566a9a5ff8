//! cesta: a swipe-driven shopping list.
//!
//! Client-side Leptos app. Rows are swiped right to check items off, left to
//! reveal edit/delete and further left to mark items missing.

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("missing #app mount element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
