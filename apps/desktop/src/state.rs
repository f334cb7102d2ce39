//! Demo application state using Dioxus signals.
//!
//! Only the host app uses globals; each `AutoSearch` instance keeps its own local
//! signal.

use std::path::Path;

use autosearch_core::{load_config, AutoSearchConfig};
use dioxus::prelude::*;

/// Shown when `autosearch.toml` configures no items.
const SAMPLE_ITEMS: &[&str] = &[
    "Apple",
    "Apricot",
    "Avocado",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cherry",
    "Grape",
    "Grapefruit",
    "Kiwi",
    "Lemon",
    "Lime",
    "Mango",
    "Orange",
    "Papaya",
    "Peach",
    "Pear",
    "Pineapple",
    "Plum",
    "Raspberry",
    "Strawberry",
    "Watermelon",
];

/// Configuration snapshot for the demo window, loaded once before launch.
#[derive(Clone, PartialEq)]
pub struct DemoState {
    pub config: AutoSearchConfig,
}

impl DemoState {
    /// Load `autosearch.toml` from the current working directory.
    pub fn from_cwd() -> Self {
        match std::env::current_dir() {
            Ok(cwd) => Self::from_path(&cwd),
            Err(e) => {
                tracing::error!(error = %e, "Could not determine current directory");
                Self::from_config(AutoSearchConfig::default())
            }
        }
    }

    pub fn from_path(root: &Path) -> Self {
        Self::from_config(load_config(root))
    }

    fn from_config(mut config: AutoSearchConfig) -> Self {
        if config.items.is_empty() {
            config.items = SAMPLE_ITEMS.iter().map(|s| s.to_string()).collect();
        }
        DemoState { config }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Last item reported through `on_select_item`
pub static SELECTED_ITEM: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Number of selections so far
pub static SELECTION_COUNT: GlobalSignal<usize> = Signal::global(|| 0);

/// Raw text of the latest input event reported through `on_change`
pub static LAST_INPUT: GlobalSignal<String> = Signal::global(String::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_sample_items() {
        let dir = tempfile::tempdir().unwrap();
        let state = DemoState::from_path(dir.path());
        assert_eq!(state.config.items.len(), SAMPLE_ITEMS.len());
        assert_eq!(state.config.label, "Search ... ");
    }

    #[test]
    fn configured_items_win_over_samples() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("autosearch.toml"), "items = [\"Oslo\", \"Osaka\"]\n")
            .unwrap();
        let state = DemoState::from_path(dir.path());
        assert_eq!(state.config.items, vec!["Oslo", "Osaka"]);
    }
}
