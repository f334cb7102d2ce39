//! AutoSearch widget: input with floating label plus a dropdown of matches.

mod auto_search;
mod menu;
mod style;

pub use auto_search::AutoSearch;
