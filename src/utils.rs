// src/utils.rs

/// Trimmed copy of `value`, or `None` when nothing is left
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Append a trimmed tag unless it is blank or already present (case-sensitive)
pub fn push_unique_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    match non_empty(tag) {
        Some(tag) if !tags.contains(&tag) => {
            tags.push(tag);
            true
        }
        _ => false,
    }
}

/// Normalize an API base URL: trimmed, without trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
