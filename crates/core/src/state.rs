//! Widget state: search term, focus, and the dropdown visibility state machine.
//!
//! Every handler here is synchronous and infallible. The rendering layer owns one
//! [`SearchState`] per mounted widget and invokes the external callbacks itself.

use tracing::{debug, trace};

use crate::filter::filter_items;
use crate::types::LabelState;

// ---------------------------------------------------------------------------
// Visibility state machine
// ---------------------------------------------------------------------------

/// Whether the dropdown is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive [`Visibility`] transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// Raw text changed in the input. Opens even when already open.
    TextChanged,
    /// Click on the input itself.
    InputClicked,
    /// An entry was activated in the menu.
    ItemSelected,
    /// Dismissal from outside the widget, e.g. a click elsewhere.
    Dismissed,
}

impl Visibility {
    /// Next state for `event`. There is no terminal state.
    pub fn apply(self, event: VisibilityEvent) -> Self {
        match event {
            VisibilityEvent::TextChanged => Visibility::Open,
            VisibilityEvent::InputClicked => self.toggled(),
            VisibilityEvent::ItemSelected | VisibilityEvent::Dismissed => Visibility::Closed,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

/// Component-local state of one AutoSearch instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    term: String,
    focused: bool,
    visibility: Visibility,
}

impl SearchState {
    /// Fresh state seeded with an initial search term (may be empty).
    pub fn new(initial: impl Into<String>) -> Self {
        Self { term: initial.into(), focused: false, visibility: Visibility::Closed }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Replace the search term with raw input text and open the dropdown.
    pub fn change(&mut self, text: impl Into<String>) {
        self.term = text.into();
        trace!(term = self.term.as_str(), "Search term changed");
        self.transition(VisibilityEvent::TextChanged);
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Click on the input: pure toggle, independent of the text.
    pub fn click(&mut self) {
        self.transition(VisibilityEvent::InputClicked);
    }

    /// Accept a menu entry. Returns the exact text to hand to the selection callback.
    pub fn select(&mut self, item: &str) -> String {
        self.term = item.to_string();
        debug!(item, "Item selected");
        self.transition(VisibilityEvent::ItemSelected);
        self.term.clone()
    }

    /// Close the dropdown because of an outside signal.
    pub fn dismiss(&mut self) {
        self.transition(VisibilityEvent::Dismissed);
    }

    /// Candidates matching the current term, in their original order.
    pub fn filtered<'a, S: AsRef<str>>(&self, items: &'a [S]) -> Vec<&'a str> {
        filter_items(items, &self.term)
    }

    /// Presentation state of the floating label.
    pub fn label(&self) -> LabelState {
        LabelState::new(self.focused, !self.term.is_empty())
    }

    fn transition(&mut self, event: VisibilityEvent) {
        let next = self.visibility.apply(event);
        if next != self.visibility {
            trace!(?event, from = ?self.visibility, to = ?next, "Dropdown visibility changed");
        }
        self.visibility = next;
    }
}
