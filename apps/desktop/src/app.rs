//! Root application component: one AutoSearch with a status bar.

use dioxus::prelude::*;

use crate::search::AutoSearch;
use crate::state::*;
use crate::INITIAL_STATE;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let state = use_hook(|| {
        INITIAL_STATE
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_else(DemoState::from_cwd)
    });
    let config = state.config;

    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            div {
                class: "titlebar",
                span { class: "titlebar-title", "AutoSearch" }
            }

            div {
                class: "content-area",
                AutoSearch {
                    items: config.items.clone(),
                    label: config.label.clone(),
                    placeholder: config.placeholder.clone(),
                    value: config.value.clone(),
                    width: config.width.clone(),
                    height: config.height.clone(),
                    class_name: config.class_name.clone(),
                    prefix: prefix_element(config.prefix.as_deref()),
                    on_change: move |e: FormEvent| {
                        *LAST_INPUT.write() = e.value();
                    },
                    on_select_item: move |item: String| {
                        tracing::info!(item = item.as_str(), "Selected");
                        *SELECTED_ITEM.write() = Some(item);
                        *SELECTION_COUNT.write() += 1;
                    },
                }
            }

            StatusBar { total: config.items.len() }
        }
    }
}

/// Configured prefix text, or the default magnifier icon.
fn prefix_element(prefix: Option<&str>) -> Element {
    match prefix {
        Some(text) => rsx! { "{text}" },
        None => rsx! {
            svg {
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }
        },
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar(total: usize) -> Element {
    let selected = SELECTED_ITEM.read().clone();
    let count = *SELECTION_COUNT.read();
    let last_input = LAST_INPUT.read().clone();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-items", "{total} items" }
            if !last_input.is_empty() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-input", "typed \"{last_input}\"" }
            }
            {selected.as_ref().map(|item| rsx! {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-selected", "selected {item} ({count})" }
            })}
        }
    }
}
