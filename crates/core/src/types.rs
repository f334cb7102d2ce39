//! Widget configuration record and floating-label presentation state.

use serde::Deserialize;

pub const DEFAULT_LABEL: &str = "Search ... ";
pub const DEFAULT_WIDTH: &str = "100%";
pub const DEFAULT_HEIGHT: &str = "auto";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Everything a host can configure on the widget, with enumerated defaults.
///
/// Callbacks and the prefix element are not part of this record: they belong to
/// the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSearchConfig {
    pub label: String,
    pub placeholder: String,
    /// Initial search term.
    pub value: String,
    pub width: String,
    pub height: String,
    /// Extra class appended to the root container.
    pub class_name: String,
    /// Leading decoration text, rendered before the input.
    pub prefix: Option<String>,
    pub items: Vec<String>,
}

impl Default for AutoSearchConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            placeholder: String::new(),
            value: String::new(),
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            class_name: String::new(),
            prefix: None,
            items: Vec::new(),
        }
    }
}

impl AutoSearchConfig {
    /// Height with an empty string treated as `auto`.
    pub fn effective_height(&self) -> &str {
        effective_height(&self.height)
    }
}

/// An empty height means `auto`.
pub fn effective_height(height: &str) -> &str {
    if height.is_empty() {
        DEFAULT_HEIGHT
    } else {
        height
    }
}

/// On-disk shape of `autosearch.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigFile {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub class_name: Option<String>,
    pub prefix: Option<String>,
    pub items: Option<Vec<String>>,
    pub items_file: Option<String>,
}

// ---------------------------------------------------------------------------
// Floating label
// ---------------------------------------------------------------------------

/// Where the floating label sits and how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelState {
    /// Raised above the input (focused or holding text).
    pub floated: bool,
    pub focused: bool,
}

impl LabelState {
    pub fn new(focused: bool, has_text: bool) -> Self {
        Self { floated: focused || has_text, focused }
    }

    /// CSS `top` of the label.
    pub fn top(&self) -> &'static str {
        if self.floated {
            "-22px"
        } else {
            "50%"
        }
    }

    pub fn font_size_px(&self) -> u32 {
        if self.floated {
            12
        } else {
            16
        }
    }

    /// Colour tracks focus only, not content.
    pub fn color(&self) -> &'static str {
        if self.focused {
            "#000"
        } else {
            "#aaa"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_contract() {
        let c = AutoSearchConfig::default();
        assert_eq!(c.label, "Search ... ");
        assert_eq!(c.placeholder, "");
        assert_eq!(c.value, "");
        assert_eq!(c.width, "100%");
        assert_eq!(c.height, "auto");
        assert_eq!(c.class_name, "");
        assert!(c.prefix.is_none());
        assert!(c.items.is_empty());
    }

    #[test]
    fn empty_height_is_auto() {
        let c = AutoSearchConfig { height: String::new(), ..Default::default() };
        assert_eq!(c.effective_height(), "auto");
        assert_eq!(effective_height("40px"), "40px");
    }

    #[test]
    fn label_rests_when_idle_and_empty() {
        let l = LabelState::new(false, false);
        assert!(!l.floated);
        assert_eq!(l.top(), "50%");
        assert_eq!(l.font_size_px(), 16);
        assert_eq!(l.color(), "#aaa");
    }

    #[test]
    fn label_floats_when_focused() {
        let l = LabelState::new(true, false);
        assert!(l.floated);
        assert_eq!(l.top(), "-22px");
        assert_eq!(l.font_size_px(), 12);
        assert_eq!(l.color(), "#000");
    }

    #[test]
    fn label_floats_with_text_but_stays_grey_unfocused() {
        let l = LabelState::new(false, true);
        assert!(l.floated);
        assert_eq!(l.color(), "#aaa");
    }
}
