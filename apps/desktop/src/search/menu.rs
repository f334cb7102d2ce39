//! Dropdown menu listing the filtered candidates.

use dioxus::prelude::*;

use super::style::{menu_style, ITEM_STYLE};

/// One clickable entry per item, in the given order. An empty list renders an
/// empty menu.
#[component]
pub fn DropdownMenu(items: Vec<String>, on_select: EventHandler<String>) -> Element {
    rsx! {
        ul {
            class: "auto-search-menu",
            style: menu_style(),
            for (i, item) in items.iter().enumerate() {
                li {
                    key: "{i}",
                    class: "auto-search-menu-item",
                    style: ITEM_STYLE,
                    onclick: {
                        let item = item.clone();
                        move |_| on_select.call(item.clone())
                    },
                    "{item}"
                }
            }
        }
    }
}
