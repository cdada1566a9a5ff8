//! Main shell component.
//!
//! Header with the view tabs and the container that switches between the
//! current list and the new-list screen.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::list::{NewListView, ShoppingListView};
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::{ItemStatus, ViewMode};

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let pending = Memo::new(move |_| {
        ctx.list
            .list
            .with(|l| l.with_status(ItemStatus::Pending).count())
    });
    let products = Memo::new(move |_| ctx.list.list.with(|l| l.products.len()));

    let tab = move |mode: ViewMode, icon: icondata::Icon, count: Memo<usize>| {
        let class = move || {
            if ctx.view.get() == mode {
                format!("{} {}", css::tab, css::tabActive)
            } else {
                css::tab.to_string()
            }
        };
        view! {
            <button
                class=class
                role="tab"
                aria-selected=move || (ctx.view.get() == mode).to_string()
                on:click=move |_| {
                    ctx.list.cancel_rename();
                    ctx.view.set(mode);
                }
            >
                <Icon icon=icon />
                <span>{mode.label()}</span>
                <span class=css::badge>{move || count.get()}</span>
            </button>
        }
    };

    view! {
        <div class=css::screen>
            <header class=css::header>
                <div class=css::brand title=format!("{} v{}", APP_NAME, APP_VERSION)>
                    <Icon icon=ic::BASKET />
                    <span>{APP_NAME}</span>
                </div>
                <nav class=css::tabs role="tablist">
                    {tab(ViewMode::List, ic::LIST, pending)}
                    {tab(ViewMode::NewList, ic::HISTORY, products)}
                </nav>
            </header>

            <main class=css::main>
                {move || match ctx.view.get() {
                    ViewMode::List => view! { <ShoppingListView /> }.into_any(),
                    ViewMode::NewList => view! { <NewListView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
