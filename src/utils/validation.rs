//! Centralized validation limits for series input.

/// Maximum number of values read into a single series (DOS protection)
pub const MAX_SERIES_LEN: usize = 10_000_000;

/// Maximum length of a single input line
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

/// Check if adding another value would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new value.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```
/// use sciutil::utils::validation::{check_series_limit, MAX_SERIES_LEN};
///
/// assert!(check_series_limit(10).is_none());
/// assert!(check_series_limit(MAX_SERIES_LEN).is_some());
/// ```
#[must_use]
pub fn check_series_limit(count: usize) -> Option<String> {
    if count >= MAX_SERIES_LEN {
        Some(format!(
            "Too many values: adding another would exceed maximum of {MAX_SERIES_LEN}"
        ))
    } else {
        None
    }
}

/// Check that a line is short enough to parse.
///
/// Returns an error message naming the 1-based line number if it is too long.
#[must_use]
pub fn check_line_length(line: &str, line_num: usize) -> Option<String> {
    if line.len() > MAX_LINE_LENGTH {
        Some(format!(
            "Line {line_num} is {} bytes, exceeding maximum of {MAX_LINE_LENGTH}",
            line.len()
        ))
    } else {
        None
    }
}
