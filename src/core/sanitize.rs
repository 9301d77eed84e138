// src/core/sanitize.rs

/// Table cell text as shown on the page: `&nbsp;` becomes a plain space, ends trimmed.
pub fn cell_text(s: &str) -> String {
    s.replace('\u{a0}', " ").trim().to_string()
}

/// `{sortValue: 1234}` → `1234`: second whitespace-separated token minus its last char.
pub fn sort_value(class: &str) -> Option<String> {
    let token = class.split_ascii_whitespace().nth(1)?;
    let mut chars = token.chars();
    chars.next_back();
    Some(chars.as_str().to_string())
}
