//! New-list view over the product history.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::swipe::SwipeRow;
use crate::core::gesture::{SwipeAction, SwipeVariant};
use crate::models::{Category, ItemStatus};

stylance::import_crate_style!(css, "src/components/list/list.module.css");

/// Products bought before, ready to be added to the current list.
///
/// Swiping right (or the Add button) puts the product back on the list;
/// swiping left past the menu forgets it.
#[component]
pub fn NewListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let list = ctx.list.list;

    let names = Memo::new(move |_| {
        list.with(|l| l.products.iter().map(|p| p.name.clone()).collect::<Vec<_>>())
    });

    view! {
        <div class=css::view>
            <AddItemForm />
            <section class=css::section aria-label="Products">
                <h2 class=css::sectionHeader>
                    <span>"Bought before"</span>
                    <span class=css::count>{move || names.with(Vec::len)}</span>
                </h2>
                <Show
                    when=move || !names.with(Vec::is_empty)
                    fallback=|| view! {
                        <p class=css::empty>"Products you add show up here."</p>
                    }
                >
                    <ul class=css::rows role="list">
                        <For
                            each=move || names.get()
                            key=|name| name.clone()
                            children=move |name| view! { <ProductRow name=name /> }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn ProductRow(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.list;

    let key = StoredValue::new(name.clone());
    let product = Memo::new(move |_| key.with_value(|n| state.list.with(|l| l.product(n).cloned())));
    let in_list = Memo::new(move |_| {
        key.with_value(|n| {
            state.list.with(|l| {
                l.with_status(ItemStatus::Pending)
                    .any(|i| i.name.eq_ignore_ascii_case(n))
            })
        })
    });
    let on_action = Callback::new(move |action: SwipeAction| {
        key.with_value(|n| state.on_product_action(n, action));
    });

    view! {
        <SwipeRow
            variant=SwipeVariant::NewListItem
            eligible=true
            on_action=on_action
            label=name.clone()
        >
            <div class=css::itemLine>
                <span class=css::itemName>{name}</span>
                <Show when=move || in_list.get()>
                    <span class=css::inList title="Already on the list">
                        <Icon icon=ic::CHECK />
                    </span>
                </Show>
            </div>
            {move || product.get().map(|p| view! {
                <div class=css::itemMeta>
                    <span class=css::category>{Category::from_id(&p.category).label()}</span>
                    <span class=css::itemQuantity>{format!("x{}", p.last_quantity)}</span>
                </div>
            })}
        </SwipeRow>
    }
}

/// Free-text entry for items not in the history yet.
#[component]
fn AddItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input = NodeRef::<leptos::html::Input>::new();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(el) = input.get_untracked() else {
            return;
        };
        if ctx.list.add_item(&el.value()) {
            el.set_value("");
        }
    };

    view! {
        <form class=css::addForm on:submit=submit>
            <input
                node_ref=input
                class=css::addInput
                type="text"
                placeholder="Add an item"
                aria-label="New item name"
                autocomplete="off"
            />
            <button class=css::addSubmit type="submit" title="Add">
                <Icon icon=ic::PLUS />
            </button>
        </form>
    }
}
