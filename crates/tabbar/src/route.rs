//! Route observation: mapping a navigation path to an active-tab id.

/// Active tab reported when the path has no usable segments.
pub const DEFAULT_TAB: &str = "home";

/// Derive the active-tab id from a navigation path.
///
/// Splits on `/`, drops empty segments, takes the last remaining
/// segment lowercased; falls back to [`DEFAULT_TAB`] when nothing
/// remains. Total and deterministic: empty strings, the root path, and
/// trailing slashes all degrade to the default rather than failing.
pub fn active_tab(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_TAB.to_string())
}
