//! Shared text formatting helpers used by terminal rendering.

/// Sidebar preview: first `max_chars` characters on one line, then `...`.
///
/// The ellipsis is always appended, matching the sidebar's fixed layout.
pub fn sidebar_preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .take(max_chars)
        .collect();
    format!("{flat}...")
}

/// Fixed-width bar for a whole percentage, clamped to 0..=100.
pub fn percent_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Capitalize the first character (`readability` -> `Readability`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
