//! Root application module.
//!
//! Contains the main App component, AppContext definition, ListState,
//! and application-level setup logic following Leptos conventions.

use leptos::error::Errors;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::Shell;
use crate::config::REDUCED_MOTION_QUERY;
use crate::config::storage::{LIST_KEY, PRODUCTS_KEY};
use crate::core::error::StorageError;
use crate::core::gesture::{GestureThresholds, SwipeAction};
use crate::core::list::ShoppingList;
use crate::models::{Item, Product, StatusUpdate, ViewMode};
use crate::utils::storage;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// ListState
// ============================================================================

/// Shopping list state managed with Leptos signals.
///
/// Row gestures arrive here as [`SwipeAction`]s and are turned into list
/// changes. Every change is written back to localStorage by an effect
/// created in [`ListState::new`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct ListState {
    /// Current list and product history.
    pub list: RwSignal<ShoppingList>,
    /// Item whose name is being edited inline.
    pub editing: RwSignal<Option<u64>>,
}

impl ListState {
    /// Load the persisted list and start saving changes.
    ///
    /// A first visit (nothing stored under either key) starts from
    /// [`ShoppingList::seeded`].
    pub fn new() -> Self {
        let state = Self {
            list: RwSignal::new(load()),
            editing: RwSignal::new(None),
        };

        let list = state.list;
        Effect::new(move |_| {
            list.with(|list| {
                if let Err(err) = save(list) {
                    web_sys::console::warn_1(&format!("[{}] {}", crate::config::APP_NAME, err).into());
                }
            });
        });

        state
    }

    /// Apply an action from a current-list row.
    pub fn on_item_action(&self, id: u64, action: SwipeAction) {
        if action == SwipeAction::Edit {
            self.editing.set(Some(id));
            return;
        }
        let Some(update) = StatusUpdate::from_action(action) else {
            return;
        };
        if update == StatusUpdate::Delete && self.editing.get_untracked() == Some(id) {
            self.editing.set(None);
        }
        self.list.update(|list| {
            list.apply(id, update);
        });
    }

    /// Apply an action from a product row of the new-list view.
    pub fn on_product_action(&self, name: &str, action: SwipeAction) {
        match action {
            SwipeAction::AddToList => self.list.update(|list| {
                list.add_product(name);
            }),
            SwipeAction::Delete => self.list.update(|list| {
                list.remove_product(name);
            }),
            _ => {}
        }
    }

    /// Add a new item by name. Returns whether it was added.
    pub fn add_item(&self, name: &str) -> bool {
        let mut added = false;
        self.list.update(|list| {
            added = list.add_item(name, 1, "", 0.0).is_some();
        });
        added
    }

    /// Finish an inline rename. Blank names keep the old one.
    pub fn commit_rename(&self, id: u64, name: &str) {
        self.list.update(|list| {
            list.rename(id, name);
        });
        self.editing.set(None);
    }

    pub fn cancel_rename(&self) {
        self.editing.set(None);
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

fn load() -> ShoppingList {
    let items = storage::get::<Vec<Item>>(LIST_KEY);
    let products = storage::get::<Vec<Product>>(PRODUCTS_KEY);
    match (items, products) {
        (None, None) => ShoppingList::seeded(),
        (items, products) => {
            ShoppingList::from_parts(items.unwrap_or_default(), products.unwrap_or_default())
        }
    }
}

fn save(list: &ShoppingList) -> Result<(), StorageError> {
    storage::set(LIST_KEY, &list.items)?;
    storage::set(PRODUCTS_KEY, &list.products)
}

// ============================================================================
// AppContext
// ============================================================================

/// Configured thresholds, or [`GestureThresholds::FALLBACK`] if they are inconsistent.
fn thresholds() -> GestureThresholds {
    GestureThresholds::default().validate().unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("[{}] {}", crate::config::APP_NAME, err).into());
        GestureThresholds::FALLBACK
    })
}

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Shopping list and inline edit state.
    pub list: ListState,

    /// Screen shown by the shell.
    pub view: RwSignal<ViewMode>,

    /// Whether the user prefers reduced motion. Silences haptics.
    pub reduced_motion: Signal<bool>,

    /// Swipe thresholds shared by every row.
    pub thresholds: GestureThresholds,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            list: ListState::new(),
            view: RwSignal::new(ViewMode::default()),
            reduced_motion: use_media_query(REDUCED_MOTION_QUERY),
            thresholds: thresholds(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Shell component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors /> }>
            <Shell />
        </ErrorBoundary>
    }
}

/// Full-page error screen with the collected errors and a reload button.
#[component]
fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class=css::fallback>
            <div class=css::fallbackCard>
                <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                <p class=css::fallbackHint>
                    "Your list is saved. Reload to continue shopping."
                </p>
                <details class=css::fallbackDetails>
                    <summary class=css::fallbackSummary>"Error details"</summary>
                    <ul class=css::fallbackErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </details>
                <button
                    class=css::reloadButton
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                >
                    "Reload"
                </button>
            </div>
        </div>
    }
}
