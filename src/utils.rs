//! Common utility functions shared across the codebase.

/// Returns true for characters that can appear inside a script identifier.
///
/// Used for whole-token boundaries. `$` is not included, so `$props.title`
/// counts as a reference to `title`.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Number of `\n`-separated lines in a region; 0 for an empty region.
///
/// # Examples
///
/// ```
/// use vuepact::utils::line_count;
///
/// assert_eq!(line_count(""), 0);
/// assert_eq!(line_count("one"), 1);
/// assert_eq!(line_count("\n  <div />\n"), 3);
/// ```
pub fn line_count(region: &str) -> usize {
    if region.is_empty() {
        0
    } else {
        region.split('\n').count()
    }
}

/// Keep the first `max_chars` characters of `text`, appending `…` when cut.
///
/// Newlines are collapsed to spaces so the excerpt fits on one report line.
///
/// # Examples
///
/// ```
/// use vuepact::utils::truncate_excerpt;
///
/// assert_eq!(truncate_excerpt("<img>", 80), "<img>");
/// assert_eq!(truncate_excerpt("<button class=\"x\">", 7), "<button…");
/// ```
pub fn truncate_excerpt(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
