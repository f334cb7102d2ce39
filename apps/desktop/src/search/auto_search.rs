//! Filterable search input with floating label and click-triggered dropdown.

use autosearch_core::types::{DEFAULT_HEIGHT, DEFAULT_LABEL, DEFAULT_WIDTH};
use autosearch_core::SearchState;
use dioxus::prelude::*;

use super::menu::DropdownMenu;
use super::style::*;

/// Text input that filters `items` by case-insensitive substring and shows the
/// matches in a dropdown.
///
/// Each mounted instance owns its state. `on_change` receives every raw input
/// event; `on_select_item` receives the exact text of the activated entry.
#[component]
pub fn AutoSearch(
    /// Candidate strings, in display order.
    items: Vec<String>,
    /// Called with the exact text of a selected entry.
    on_select_item: EventHandler<String>,
    #[props(default = DEFAULT_LABEL.to_string())] label: String,
    #[props(default)] placeholder: String,
    /// Leading decoration rendered before the input.
    #[props(default)]
    prefix: Option<Element>,
    /// Initial search term.
    #[props(default)]
    value: String,
    #[props(default)] on_change: Option<EventHandler<FormEvent>>,
    #[props(default = DEFAULT_WIDTH.to_string())] width: String,
    #[props(default = DEFAULT_HEIGHT.to_string())] height: String,
    /// Appended to the root container's class.
    #[props(default)]
    class_name: String,
) -> Element {
    let mut state = use_signal(|| SearchState::new(value.clone()));

    let (term, open, label_state, filtered) = {
        let current = state.read();
        let open = current.is_open();
        // Derived from the committed state on every render.
        let filtered: Vec<String> = if open {
            current.filtered(&items).into_iter().map(str::to_string).collect()
        } else {
            Vec::new()
        };
        (current.term().to_string(), open, current.label(), filtered)
    };

    rsx! {
        if open {
            div {
                class: "auto-search-backdrop",
                style: BACKDROP_STYLE,
                onclick: move |_| state.write().dismiss(),
            }
        }

        div {
            class: container_class(&class_name),
            style: container_style(&width, &height, open),

            {prefix.map(|prefix| rsx! {
                span { class: "auto-search-prefix", style: PREFIX_STYLE, {prefix} }
            })}

            div {
                style: FIELD_STYLE,

                label {
                    class: label_class(&label_state),
                    style: label_style(&label_state),
                    "{label}"
                }

                input {
                    class: "auto-search-input",
                    r#type: "text",
                    value: "{term}",
                    placeholder: "{placeholder}",
                    style: INPUT_STYLE,
                    oninput: move |e: FormEvent| {
                        state.write().change(e.value());
                        if let Some(handler) = &on_change {
                            handler.call(e);
                        }
                    },
                    onclick: move |_| state.write().click(),
                    onfocus: move |_| state.write().focus(),
                    onblur: move |_| state.write().blur(),
                }
            }

            if open {
                DropdownMenu {
                    items: filtered,
                    on_select: move |item: String| {
                        let selected = state.write().select(&item);
                        on_select_item.call(selected);
                    },
                }
            }
        }
    }
}
