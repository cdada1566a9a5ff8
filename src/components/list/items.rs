//! Current shopping list view.

use leptos::{ev, prelude::*};

use crate::app::{AppContext, ListState};
use crate::components::swipe::SwipeRow;
use crate::core::gesture::{SwipeAction, SwipeVariant};
use crate::models::{Category, Item, ItemStatus};

stylance::import_crate_style!(css, "src/components/list/list.module.css");

const SECTIONS: [ItemStatus; 3] = [ItemStatus::Pending, ItemStatus::Completed, ItemStatus::Missing];

fn format_price(item: &Item) -> Option<String> {
    (item.price > 0.0).then(|| format!("${:.2}", item.price * f64::from(item.quantity)))
}

/// Current list in three sections: to buy, in the cart, missing.
///
/// Pending items are grouped by category along the shopping route. Only
/// pending rows accept gestures; settled rows render the same row without
/// the swipe behavior.
#[component]
pub fn ShoppingListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let list = ctx.list.list;

    let sections = SECTIONS
        .into_iter()
        .map(|status| {
            let ids = Memo::new(move |_| {
                list.with(|l| l.with_status(status).map(|i| i.id).collect::<Vec<_>>())
            });
            let modifier = match status {
                ItemStatus::Pending => "",
                ItemStatus::Completed => css::sectionCompleted,
                ItemStatus::Missing => css::sectionMissing,
            };

            view! {
                <Show when=move || status == ItemStatus::Pending || !ids.with(Vec::is_empty)>
                    <section class=format!("{} {}", css::section, modifier) aria-label=status.label()>
                        <h2 class=css::sectionHeader>
                            <span>{status.label()}</span>
                            <span class=css::count>{move || ids.with(Vec::len)}</span>
                        </h2>
                        <Show
                            when=move || !ids.with(Vec::is_empty)
                            fallback=|| view! {
                                <p class=css::empty>"Nothing left to buy."</p>
                            }
                        >
                            {move || {
                                if status == ItemStatus::Pending {
                                    view! { <CategoryGroups /> }.into_any()
                                } else {
                                    view! { <Rows ids=ids /> }.into_any()
                                }
                            }}
                        </Show>
                    </section>
                </Show>
            }
        })
        .collect_view();

    view! { <div class=css::view>{sections}</div> }
}

#[component]
fn Rows(#[prop(into)] ids: Signal<Vec<u64>>) -> impl IntoView {
    view! {
        <ul class=css::rows role="list">
            <For
                each=move || ids.get()
                key=|id| *id
                children=move |id| view! { <ListItemRow id=id /> }
            />
        </ul>
    }
}

/// Pending items under one header per category.
#[component]
fn CategoryGroups() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let list = ctx.list.list;

    let groups = Memo::new(move |_| list.with(|l| l.grouped_by_category(ItemStatus::Pending)));

    view! {
        <For
            each=move || groups.with(|g| g.iter().map(|(c, _)| *c).collect::<Vec<_>>())
            key=|category| *category
            children=move |category: Category| {
                let ids = Signal::derive(move || {
                    groups.with(|g| {
                        g.iter()
                            .find(|(c, _)| *c == category)
                            .map(|(_, ids)| ids.clone())
                            .unwrap_or_default()
                    })
                });
                view! {
                    <div class=css::categoryGroup data-category=category.id()>
                        <h3 class=css::categoryHeader title=category.description()>
                            <span class=css::categoryLabel>{category.label()}</span>
                            <span class=css::count>{move || ids.with(Vec::len)}</span>
                        </h3>
                        <Rows ids=ids />
                    </div>
                }
            }
        />
    }
}

#[component]
fn ListItemRow(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.list;

    let item = Memo::new(move |_| state.list.with(|l| l.get(id).cloned()));
    let eligible = Signal::derive(move || {
        item.with(|i| i.as_ref().is_some_and(|i| i.status.accepts_gestures()))
    });
    let label = Signal::derive(move || {
        item.with(|i| i.as_ref().map(|i| i.name.clone()))
            .unwrap_or_default()
    });
    let editing = Memo::new(move |_| state.editing.get() == Some(id));
    let on_action = Callback::new(move |action: SwipeAction| state.on_item_action(id, action));

    let status_class = move || match item.with(|i| i.as_ref().map(|i| i.status)) {
        Some(ItemStatus::Completed) => css::completed.to_string(),
        Some(ItemStatus::Missing) => css::missing.to_string(),
        _ => String::new(),
    };

    view! {
        <SwipeRow
            variant=SwipeVariant::ListItem
            eligible=eligible
            on_action=on_action
            label=label
            shortcuts=true
            class=Signal::derive(status_class)
        >
            {move || {
                if editing.get() {
                    view! { <RenameField id=id initial=label.get_untracked() state=state /> }
                        .into_any()
                } else {
                    item.get()
                        .map(|item| {
                            let price = format_price(&item);
                            view! {
                                <div class=css::itemLine>
                                    <span class=css::itemName>{item.name}</span>
                                    <span class=css::itemQuantity>{format!("x{}", item.quantity)}</span>
                                </div>
                                <div class=css::itemMeta>
                                    <span class=css::category>
                                        {Category::from_id(&item.category).label()}
                                    </span>
                                    {price.map(|p| view! { <span class=css::price>{p}</span> })}
                                </div>
                            }
                        })
                        .into_any()
                }
            }}
        </SwipeRow>
    }
}

/// Inline name editor shown in place of the row content.
///
/// Keys and presses stay inside the field so they neither trigger row
/// shortcuts nor start a swipe.
#[component]
fn RenameField(id: u64, initial: String, state: ListState) -> impl IntoView {
    let input = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(el) = input.get() {
            let _ = el.focus();
            el.select();
        }
    });

    let commit = move || {
        if let Some(el) = input.get_untracked() {
            state.commit_rename(id, &el.value());
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        ev.stop_propagation();
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                commit();
            }
            "Escape" => {
                ev.prevent_default();
                state.cancel_rename();
            }
            _ => {}
        }
    };

    view! {
        <input
            node_ref=input
            class=css::renameInput
            type="text"
            value=initial
            aria-label="Item name"
            on:keydown=on_keydown
            on:blur=move |_| {
                if state.editing.get_untracked() == Some(id) {
                    commit();
                }
            }
            on:pointerdown=|ev: ev::PointerEvent| ev.stop_propagation()
            on:mousedown=|ev: ev::MouseEvent| ev.stop_propagation()
            on:touchstart=|ev: ev::TouchEvent| ev.stop_propagation()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: u32) -> Item {
        Item {
            id: 0,
            name: "Rice".into(),
            quantity,
            category: "pantry".into(),
            price,
            status: ItemStatus::Pending,
        }
    }

    #[test]
    fn test_format_price_multiplies_quantity() {
        assert_eq!(format_price(&item(2.5, 3)).as_deref(), Some("$7.50"));
    }

    #[test]
    fn test_format_price_hidden_when_unknown() {
        assert_eq!(format_price(&item(0.0, 3)), None);
    }
}
