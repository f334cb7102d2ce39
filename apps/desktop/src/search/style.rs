//! Inline styles for the widget surfaces.
//!
//! Pixel values are presentation only; behaviour lives in `autosearch_core`.

use autosearch_core::types::effective_height;
use autosearch_core::LabelState;

pub const PREFIX_STYLE: &str = "margin-right: 8px; font-size: 18px; display: inline-flex;";

pub const FIELD_STYLE: &str = "flex-grow: 1; position: relative;";

pub const INPUT_STYLE: &str = "width: 100%; height: 100%; border: none; outline: none; \
     padding: 8px 12px; font-size: 14px; background-color: transparent; box-sizing: border-box;";

/// Maximum menu height before it scrolls.
pub const MENU_MAX_HEIGHT_PX: u32 = 200;

pub const ITEM_STYLE: &str = "padding: 6px 12px; cursor: pointer; white-space: nowrap; \
     overflow: hidden; text-overflow: ellipsis;";

/// Transparent layer under the open widget that turns outside clicks into dismissal.
pub const BACKDROP_STYLE: &str =
    "position: fixed; inset: 0; z-index: 999; background: transparent;";

/// Root container class with the host's class appended.
pub fn container_class(class_name: &str) -> String {
    if class_name.is_empty() {
        "floating-label-container".to_string()
    } else {
        format!("floating-label-container {class_name}")
    }
}

/// Root container style. While open the widget is lifted above the backdrop so the
/// input keeps receiving clicks.
pub fn container_style(width: &str, height: &str, open: bool) -> String {
    let layer = if open { " z-index: 1000;" } else { "" };
    format!(
        "width: {width}; height: {}; position: relative; border: 1px solid #ccc; \
         border-radius: 12px; padding: 8px; display: flex; align-items: center; \
         background-color: #ffffff; color: #333; box-sizing: border-box;{layer}",
        effective_height(height)
    )
}

pub fn label_class(label: &LabelState) -> &'static str {
    if label.floated {
        "floating-label focused"
    } else {
        "floating-label"
    }
}

pub fn label_style(label: &LabelState) -> String {
    format!(
        "position: absolute; top: {}; left: 8px; transform: translateY(-50%); \
         font-size: {}px; color: {}; transition: all 0.2s ease; pointer-events: none;",
        label.top(),
        label.font_size_px(),
        label.color()
    )
}

pub fn menu_style() -> String {
    format!(
        "position: absolute; top: 100%; left: 0; width: 100%; \
         max-height: {MENU_MAX_HEIGHT_PX}px; overflow-y: auto; margin: 4px 0 0; \
         padding: 4px 0; list-style: none; background: #ffffff; border-radius: 8px; \
         box-shadow: 0 6px 16px rgba(0, 0, 0, 0.12); box-sizing: border-box;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_class_appends_host_class() {
        assert_eq!(container_class(""), "floating-label-container");
        assert_eq!(container_class("wide dark"), "floating-label-container wide dark");
    }

    #[test]
    fn container_style_uses_auto_for_empty_height() {
        let s = container_style("100%", "", false);
        assert!(s.contains("width: 100%;"));
        assert!(s.contains("height: auto;"));
        assert!(!s.contains("z-index"));
    }

    #[test]
    fn open_container_sits_above_backdrop() {
        assert!(container_style("100%", "40px", true).contains("z-index: 1000;"));
    }

    #[test]
    fn label_style_follows_label_state() {
        let resting = label_style(&LabelState::new(false, false));
        assert!(resting.contains("top: 50%;"));
        assert!(resting.contains("font-size: 16px;"));
        assert!(resting.contains("color: #aaa;"));

        let floated = label_style(&LabelState::new(true, false));
        assert!(floated.contains("top: -22px;"));
        assert!(floated.contains("font-size: 12px;"));
        assert!(floated.contains("color: #000;"));
        assert_eq!(label_class(&LabelState::new(false, true)), "floating-label focused");
    }

    #[test]
    fn menu_scrolls_past_max_height() {
        let s = menu_style();
        assert!(s.contains("max-height: 200px;"));
        assert!(s.contains("overflow-y: auto;"));
    }
}
