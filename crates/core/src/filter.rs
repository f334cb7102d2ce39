//! Case-insensitive substring filtering of the candidate list.
//!
//! The filtered list is a pure function of `(items, term)`: recomputed on every
//! render, order preserved, no dedup, no ranking.

/// Returns true if `item` contains `term` under Unicode lowercase folding.
///
/// An empty term matches everything. No trimming or escaping is applied.
pub fn matches(item: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    item.to_lowercase().contains(&term.to_lowercase())
}

/// Ordered subsequence of `items` whose elements contain `term` (case-insensitive).
pub fn filter_items<'a, S: AsRef<str>>(items: &'a [S], term: &str) -> Vec<&'a str> {
    if term.is_empty() {
        return items.iter().map(|item| item.as_ref()).collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| item.to_lowercase().contains(&needle))
        .collect()
}

/// Same as [`filter_items`], returning positions into `items` instead of slices.
pub fn filter_indices<S: AsRef<str>>(items: &[S], term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.as_ref().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
