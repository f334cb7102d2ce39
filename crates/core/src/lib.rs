//! AutoSearch: a text input with floating label, live case-insensitive substring
//! filtering over a list of candidates, and a click-triggered dropdown of matches.
//!
//! This crate holds the framework-independent half of the widget; rendering lives in
//! the `autosearch-desktop` app.
//!
//! # Modules
//!
//! - [`filter`]: Candidate filtering
//! - [`state`]: Search term, focus flag, and the dropdown visibility state machine
//! - [`types`]: Configuration record with defaults, floating-label state

pub mod filter;
pub mod state;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub use filter::{filter_indices, filter_items, matches};
pub use state::{SearchState, Visibility, VisibilityEvent};
pub use types::{AutoSearchConfig, LabelState};

use types::ConfigFile;

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "autosearch.toml";

// ---------------------------------------------------------------------------
// autosearch.toml config loading
// ---------------------------------------------------------------------------

/// Known keys in `autosearch.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &[
    "label",
    "placeholder",
    "value",
    "width",
    "height",
    "class_name",
    "prefix",
    "items",
    "items_file",
];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_keys(table: &toml::Table) {
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS
            .iter()
            .min_by_key(|k| edit_distance(key, k))
            .copied()
            .unwrap_or_default();
        if edit_distance(key, suggestion) <= 3 {
            warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME}, did you mean '{suggestion}'?"
            );
        } else {
            warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }
}

/// Load widget configuration from `autosearch.toml` in `dir`.
///
/// Returns [`AutoSearchConfig::default`] merged with any overrides from the file.
/// A missing or unparsable file yields defaults (the latter with a warning); unknown
/// keys trigger a warning with a typo suggestion. `items_file` is resolved relative to
/// `dir` and appended after inline `items`.
pub fn load_config(dir: &Path) -> AutoSearchConfig {
    let mut config = AutoSearchConfig::default();
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return config;
    }

    debug!(path = %config_path.display(), "Loading {CONFIG_FILE_NAME}");
    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Could not read {CONFIG_FILE_NAME}");
            return config;
        }
    };

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE_NAME}");
            return config;
        }
    };
    warn_unknown_keys(&table);

    let file: ConfigFile = match toml::from_str(&content) {
        Ok(f) => f,
        Err(e) => {
            warn!(error = %e, "Invalid value in {CONFIG_FILE_NAME}");
            return config;
        }
    };

    if let Some(label) = file.label {
        config.label = label;
    }
    if let Some(placeholder) = file.placeholder {
        config.placeholder = placeholder;
    }
    if let Some(value) = file.value {
        config.value = value;
    }
    if let Some(width) = file.width {
        config.width = width;
    }
    if let Some(height) = file.height {
        config.height = types::effective_height(&height).to_string();
    }
    if let Some(class_name) = file.class_name {
        config.class_name = class_name;
    }
    config.prefix = file.prefix.filter(|p| !p.is_empty());
    if let Some(items) = file.items {
        config.items = items;
    }
    if let Some(rel) = file.items_file {
        let path = resolve_relative(dir, &rel);
        match load_items_file(&path) {
            Ok(items) => config.items.extend(items),
            Err(e) => warn!(path = %path.display(), error = e.as_str(), "Skipping items_file"),
        }
    }

    debug!(items = config.items.len(), "Loaded {CONFIG_FILE_NAME}");
    config
}

fn resolve_relative(dir: &Path, rel: &str) -> PathBuf {
    let p = PathBuf::from(rel);
    if p.is_absolute() {
        p
    } else {
        dir.join(p)
    }
}

/// Read a newline-separated candidate list. Blank lines are skipped; other lines are
/// kept verbatim apart from the line terminator.
pub fn load_items_file(path: &Path) -> Result<Vec<String>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read {}: {e}", path.display()))?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}
