use std::borrow::Cow;

pub const DEFAULT_SEPARATOR: u8 = b'/';

/// Strips leading and trailing separators and collapses every run of
/// separators into one. Borrows the input when nothing needs collapsing.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str, separator: u8) -> Cow<'_, str> {
    let trimmed = path.trim_matches(separator as char);
    let bytes = trimmed.as_bytes();

    let has_run = bytes
        .windows(2)
        .any(|pair| pair[0] == separator && pair[1] == separator);
    if !has_run {
        return Cow::Borrowed(trimmed);
    }

    let mut output = String::with_capacity(trimmed.len());
    let mut prev_was_separator = false;
    for ch in trimmed.chars() {
        let is_separator = ch == separator as char;
        if is_separator && prev_was_separator {
            continue;
        }
        output.push(ch);
        prev_was_separator = is_separator;
    }

    Cow::Owned(output)
}

/// [`normalize_path`] for route patterns: a trailing separator escaped with
/// `\` belongs to the last segment and is kept.
pub fn normalize_pattern(pattern: &str, separator: u8) -> Cow<'_, str> {
    let normalized = normalize_path(pattern, separator);
    let lost_trailing = pattern.as_bytes().last() == Some(&separator);
    if lost_trailing && normalized.ends_with('\\') {
        let mut owned = normalized.into_owned();
        owned.push(separator as char);
        return Cow::Owned(owned);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(normalize_path("///foo/bar//", b'/'), "foo/bar");
    }

    #[test]
    fn collapses_duplicate_separators() {
        let normalized = normalize_path("a//b///c", b'/');
        assert_eq!(normalized, "a/b/c");
        assert!(matches!(normalized, Cow::Owned(_)));
    }

    #[test]
    fn borrows_when_already_clean() {
        let normalized = normalize_path("/a/b", b'/');
        assert_eq!(normalized, "a/b");
        assert!(matches!(normalized, Cow::Borrowed(_)));
    }

    #[test]
    fn separator_only_input_becomes_empty() {
        assert_eq!(normalize_path("////", b'/'), "");
        assert_eq!(normalize_path("", b'/'), "");
    }

    #[test]
    fn honours_custom_separator() {
        assert_eq!(normalize_path("..a...b/c.", b'.'), "a.b/c");
    }

    #[test]
    fn keeps_unicode_segments_intact() {
        assert_eq!(normalize_path("//こんにちは//世界/", b'/'), "こんにちは/世界");
    }

    #[test]
    fn pattern_keeps_escaped_trailing_separator() {
        assert_eq!(normalize_pattern("/x/:id:a\\/", b'/'), "x/:id:a\\/");
        assert_eq!(normalize_pattern("/x/:id:a\\///", b'/'), "x/:id:a\\/");
        assert_eq!(normalize_pattern("/x/:id/", b'/'), "x/:id");
    }
}
