//! Filename sanitization and slide title derivation.

/// Build a filename-safe fragment from arbitrary text.
///
/// Keeps alphanumerics, spaces, hyphens and underscores, converts spaces
/// to underscores, strips leading and trailing underscores, and caps the
/// result at `max_length` characters. Text that sanitizes away to nothing
/// becomes `"untitled"`.
pub fn sanitize_filename(text: &str, max_length: usize) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    let capped: String = cleaned.trim_matches('_').chars().take(max_length).collect();

    if capped.is_empty() {
        "untitled".to_string()
    } else {
        capped
    }
}

/// Derive a slide title from its text blocks.
///
/// Takes the first line of the first block, trims it, truncates to 50
/// characters and runs it through the filename sanitizer. Slides with no
/// text at all fall back to `slide_<n>`.
pub fn derive_title(text_parts: &[String], slide_number: usize) -> String {
    match text_parts.first() {
        Some(first) => {
            let first_line = first.lines().next().unwrap_or("").trim();
            let capped: String = first_line.chars().take(50).collect();
            sanitize_filename(&capped, 50)
        }
        None => format!("slide_{}", slide_number),
    }
}
