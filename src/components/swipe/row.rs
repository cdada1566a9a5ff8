//! Swipeable list row.
//!
//! Renders the visual feedback for a [`SwipeGesture`]: translation while
//! dragging, a directional tint, the check/cross preview badge and the
//! revealed action menu.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::hook::use_swipe_gesture;
use crate::components::icons as ic;
use crate::core::gesture::{
    Direction, DragFeedback, MenuAction, SwipeAction, SwipeVariant, keyboard,
};

stylance::import_crate_style!(css, "src/components/swipe/row.module.css");

fn feedback_class(feedback: Option<DragFeedback>) -> &'static str {
    match feedback {
        None => "",
        Some(DragFeedback::RightPreview) => css::rightPreview,
        Some(DragFeedback::RightComplete) => css::rightComplete,
        Some(DragFeedback::LeftPreview) => css::leftPreview,
        Some(DragFeedback::LeftComplete) => css::leftComplete,
    }
}

fn menu_button(kind: MenuAction) -> (icondata::Icon, &'static str, &'static str) {
    match kind {
        MenuAction::Edit => (ic::EDIT, css::editButton, "Edit"),
        MenuAction::Add => (ic::PLUS, css::addButton, "Add"),
        MenuAction::Delete => (ic::TRASH, css::deleteButton, "Delete"),
    }
}

/// A row that reports swipe gestures as [`SwipeAction`]s.
///
/// With `shortcuts`, a focused eligible row also maps keys to actions
/// (see [`keyboard::row_shortcut`]).
#[component]
pub fn SwipeRow(
    variant: SwipeVariant,
    #[prop(into)] eligible: Signal<bool>,
    on_action: Callback<SwipeAction>,
    #[prop(into)] label: Signal<String>,
    #[prop(optional)] shortcuts: bool,
    #[prop(optional, into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let row = NodeRef::<leptos::html::Li>::new();
    let gesture = use_swipe_gesture(variant, eligible, on_action, row);
    let state = gesture.state;

    let menu_open = Memo::new(move |_| state.get().menu_visible);
    let preview = Memo::new(move |_| {
        let s = state.get();
        (s.active && s.preview_visible).then_some(s.direction).flatten()
    });
    let tint = Memo::new(move |_| {
        let s = state.get();
        s.active.then_some(s.direction).flatten()
    });

    let row_class = move || {
        let s = state.get();
        let mut classes = format!("{} {}", css::row, class.get());
        if s.active {
            classes.push(' ');
            classes.push_str(css::dragging);
            classes.push(' ');
            classes.push_str(feedback_class(s.feedback));
        }
        if !eligible.get() {
            classes.push(' ');
            classes.push_str(css::settled);
        }
        classes
    };

    let row_style = move || {
        let s = state.get();
        let touch_action = if eligible.get() { "pan-y" } else { "auto" };
        if s.active {
            format!("transform: translateX({}px); touch-action: {};", s.offset, touch_action)
        } else {
            format!("touch-action: {};", touch_action)
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if gesture.on_key_down(ev.clone()) {
            ev.prevent_default();
            return;
        }
        if !shortcuts || !eligible.get_untracked() || menu_open.get_untracked() {
            return;
        }
        if let Some(action) = keyboard::row_shortcut(&ev.key()) {
            ev.prevent_default();
            on_action.run(action);
        }
    };

    let buttons = variant
        .menu_actions()
        .into_iter()
        .map(|kind| {
            let (icon, button_class, title) = menu_button(kind);
            view! {
                <button
                    class=format!("{} {}", css::menuButton, button_class)
                    title=title
                    aria-label=move || format!("{} {}", title, label.get())
                    on:click=move |ev| gesture.on_menu_click(kind, ev)
                    on:pointerdown=|ev: ev::PointerEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                    }
                    on:mousedown=|ev: ev::MouseEvent| ev.stop_propagation()
                    on:touchstart=|ev: ev::TouchEvent| ev.stop_propagation()
                >
                    <Icon icon=icon />
                </button>
            }
        })
        .collect_view();

    view! {
        <li
            node_ref=row
            class=row_class
            style=row_style
            role="listitem"
            aria-label=move || label.get()
            tabindex=move || if eligible.get() { "0" } else { "-1" }
            on:pointerdown=move |ev| gesture.on_pointer_down(ev)
            on:pointermove=move |ev| gesture.on_pointer_move(ev)
            on:pointerup=move |ev| gesture.on_pointer_up(ev)
            on:pointercancel=move |ev| gesture.on_pointer_cancel(ev)
            on:mousedown=move |ev| gesture.on_mouse_down(ev)
            on:touchstart=move |ev| gesture.on_touch_start(ev)
            on:keydown=on_keydown
        >
            <div class=move || {
                if menu_open.get() { css::menu.to_string() } else { format!("{} {}", css::menu, css::hidden) }
            }>
                {buttons}
            </div>

            {move || preview.get().map(|direction| {
                let (badge, icon) = match direction {
                    Direction::Right => (css::badgeRight, ic::CHECK),
                    Direction::Left => (css::badgeLeft, ic::CLOSE),
                };
                view! {
                    <div class=css::previewOverlay data-direction=format!("{direction:?}")>
                        <span class=format!("{} {}", css::badge, badge)>
                            <Icon icon=icon />
                        </span>
                    </div>
                }
            })}

            {move || tint.get().map(|direction| {
                let tint_class = match direction {
                    Direction::Right => css::tintRight,
                    Direction::Left => css::tintLeft,
                };
                view! { <div class=format!("{} {}", css::tint, tint_class)></div> }
            })}

            <div class=move || {
                if menu_open.get() { format!("{} {}", css::content, css::faded) } else { css::content.to_string() }
            }>
                {children()}
            </div>
        </li>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use gloo_timers::future::TimeoutFuture;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

    use super::*;
    use crate::app::{AppContext, ListState};
    use crate::core::gesture::GestureThresholds;
    use crate::models::ViewMode;
    use crate::utils::dom;

    wasm_bindgen_test_configure!(run_in_browser);

    type Actions = Arc<Mutex<Vec<SwipeAction>>>;

    /// Mount one list row inside a `<ul>` that counts clicks reaching it.
    fn mount_row(actions: Actions, parent_clicks: Arc<AtomicUsize>) -> (Element, impl Sized) {
        let document = dom::document().unwrap();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();

        let mounted = mount_to(container.clone(), move || {
            provide_context(AppContext {
                list: ListState::new(),
                view: RwSignal::new(ViewMode::List),
                reduced_motion: Signal::stored(true),
                thresholds: GestureThresholds::default(),
            });
            let on_action = Callback::new(move |action: SwipeAction| {
                actions.lock().unwrap().push(action);
            });
            view! {
                <ul on:click=move |_| {
                    parent_clicks.fetch_add(1, Ordering::SeqCst);
                }>
                    <SwipeRow
                        variant=SwipeVariant::ListItem
                        eligible=true
                        on_action=on_action
                        label="Milk".to_string()
                    >
                        <span class="name">"Milk"</span>
                    </SwipeRow>
                </ul>
            }
        });

        let row = container.query_selector("li").unwrap().unwrap();
        (row, mounted)
    }

    fn fire_mouse(target: &EventTarget, kind: &str, x: i32) {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_client_x(x);
        let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn fire_key(target: &EventTarget, key: &str) {
        let init = KeyboardEventInit::new();
        init.set_bubbles(true);
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn drag(row: &Element, from: i32, to: i32) {
        let document = dom::document().unwrap();
        fire_mouse(row, "mousedown", from);
        fire_mouse(&document, "mousemove", to);
        fire_mouse(&document, "mouseup", to);
    }

    /// Let pending reactive updates reach the DOM.
    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    fn menu_visible(row: &Element) -> bool {
        let menu = row
            .query_selector(&format!(".{}", css::menu))
            .unwrap()
            .unwrap();
        !menu.class_name().split_whitespace().any(|c| c == css::hidden)
    }

    fn recorded(actions: &Actions) -> Vec<SwipeAction> {
        actions.lock().unwrap().clone()
    }

    #[wasm_bindgen_test]
    async fn test_moves_after_release_are_ignored() {
        let actions = Actions::default();
        let (row, _mounted) = mount_row(actions.clone(), Arc::default());
        let document = dom::document().unwrap();

        drag(&row, 100, 300);
        assert_eq!(recorded(&actions), vec![SwipeAction::Complete]);

        fire_mouse(&document, "mousemove", -200);
        fire_mouse(&document, "mouseup", -200);
        settle().await;
        assert_eq!(recorded(&actions), vec![SwipeAction::Complete]);
        assert!(!row.class_name().split_whitespace().any(|c| c == css::dragging));
    }

    #[wasm_bindgen_test]
    async fn test_escape_aborts_drag() {
        let actions = Actions::default();
        let (row, _mounted) = mount_row(actions.clone(), Arc::default());
        let document = dom::document().unwrap();

        fire_mouse(&row, "mousedown", 100);
        fire_mouse(&document, "mousemove", 300);
        fire_key(&document, "Escape");
        fire_mouse(&document, "mouseup", 300);

        assert!(recorded(&actions).is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_outside_click_closes_menu_row_click_does_not() {
        let actions = Actions::default();
        let (row, _mounted) = mount_row(actions.clone(), Arc::default());
        let document = dom::document().unwrap();

        drag(&row, 100, 30);
        settle().await;
        assert!(menu_visible(&row));

        let name = row.query_selector(".name").unwrap().unwrap();
        fire_mouse(&name, "click", 30);
        settle().await;
        assert!(menu_visible(&row));

        fire_mouse(&document.body().unwrap(), "click", 0);
        settle().await;
        assert!(!menu_visible(&row));
        assert!(recorded(&actions).is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_press_on_row_with_open_menu_starts_drag() {
        let actions = Actions::default();
        let (row, _mounted) = mount_row(actions.clone(), Arc::default());

        drag(&row, 100, 30);
        settle().await;
        assert!(menu_visible(&row));

        drag(&row, 100, 300);
        settle().await;
        assert_eq!(recorded(&actions), vec![SwipeAction::Complete]);
        assert!(!menu_visible(&row));
    }

    #[wasm_bindgen_test]
    async fn test_menu_click_stays_inside_row() {
        let actions = Actions::default();
        let parent_clicks = Arc::new(AtomicUsize::new(0));
        let (row, _mounted) = mount_row(actions.clone(), parent_clicks.clone());

        drag(&row, 100, 30);
        settle().await;

        let edit = row
            .query_selector(&format!(".{}", css::editButton))
            .unwrap()
            .unwrap()
            .unchecked_into::<HtmlElement>();
        edit.click();
        settle().await;

        assert_eq!(recorded(&actions), vec![SwipeAction::Edit]);
        assert_eq!(parent_clicks.load(Ordering::SeqCst), 0);
        assert!(!menu_visible(&row));
    }

    #[wasm_bindgen_test]
    async fn test_unmount_releases_document_listeners() {
        let actions = Actions::default();
        let (row, mounted) = mount_row(actions.clone(), Arc::default());
        let document = dom::document().unwrap();

        fire_mouse(&row, "mousedown", 100);
        drop(mounted);

        fire_mouse(&document, "mousemove", 300);
        fire_mouse(&document, "mouseup", 300);
        assert!(recorded(&actions).is_empty());
    }
}
