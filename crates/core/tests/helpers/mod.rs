//! Headless harness for widget behaviour tests.
//!
//! Drives a `SearchState` the way the rendering layer does, recording every
//! callback invocation so tests can assert on what a host would observe.

use autosearch_core::SearchState;

pub struct WidgetHarness {
    pub items: Vec<String>,
    pub state: SearchState,
    /// Raw text of every change event forwarded to `on_change`.
    pub changes: Vec<String>,
    /// Every string passed to `on_select_item`.
    pub selections: Vec<String>,
    /// Whether the host supplied an `on_change` callback.
    with_on_change: bool,
}

impl WidgetHarness {
    pub fn new(items: &[&str]) -> Self {
        Self::with_value(items, "")
    }

    pub fn with_value(items: &[&str], value: &str) -> Self {
        Self {
            items: items.iter().map(|s| s.to_string()).collect(),
            state: SearchState::new(value),
            changes: Vec::new(),
            selections: Vec::new(),
            with_on_change: true,
        }
    }

    pub fn without_on_change(mut self) -> Self {
        self.with_on_change = false;
        self
    }

    /// Replace the whole input text, as one input event.
    pub fn type_text(&mut self, text: &str) {
        self.state.change(text);
        if self.with_on_change {
            self.changes.push(text.to_string());
        }
    }

    pub fn click_input(&mut self) {
        self.state.click();
    }

    pub fn click_outside(&mut self) {
        self.state.dismiss();
    }

    /// Activate the menu entry at `pos` in the currently visible list.
    pub fn select_entry(&mut self, pos: usize) {
        assert!(self.state.is_open(), "menu entries can only be activated while open");
        let item = self.visible()[pos].clone();
        let text = self.state.select(&item);
        self.selections.push(text);
    }

    /// Entries the menu renders right now (empty while closed).
    pub fn visible(&self) -> Vec<String> {
        if !self.state.is_open() {
            return vec![];
        }
        self.filtered()
    }

    pub fn filtered(&self) -> Vec<String> {
        self.state.filtered(&self.items).into_iter().map(str::to_string).collect()
    }
}
