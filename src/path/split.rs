const ESCAPE: u8 = b'\\';

/// Splits off the first segment of `path`. The remainder skips every
/// separator at the split point.
#[inline]
pub fn split_first_segment(path: &str, separator: u8) -> (&str, &str) {
    match memchr::memchr(separator, path.as_bytes()) {
        Some(at) => (&path[..at], skip_separators(&path[at..], separator)),
        None => (path, ""),
    }
}

/// Like [`split_first_segment`], but a separator preceded by `\` belongs
/// to the segment. Used for route patterns only.
pub fn split_pattern_segment(pattern: &str, separator: u8) -> (&str, &str) {
    let bytes = pattern.as_bytes();
    let mut from = 0usize;

    while let Some(rel) = memchr::memchr(separator, &bytes[from..]) {
        let at = from + rel;
        if at > 0 && bytes[at - 1] == ESCAPE {
            from = at + 1;
            continue;
        }
        return (&pattern[..at], skip_separators(&pattern[at..], separator));
    }

    (pattern, "")
}

/// Number of segments in an already normalized path.
#[inline]
pub fn count_segments(path: &str, separator: u8) -> usize {
    if path.is_empty() {
        return 0;
    }
    memchr::memchr_iter(separator, path.as_bytes()).count() + 1
}

#[inline]
fn skip_separators(s: &str, separator: u8) -> &str {
    let skip = s.bytes().take_while(|&b| b == separator).count();
    &s[skip..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_separator() {
        assert_eq!(split_first_segment("users/42/posts", b'/'), ("users", "42/posts"));
    }

    #[test]
    fn returns_whole_path_without_separator() {
        assert_eq!(split_first_segment("users", b'/'), ("users", ""));
        assert_eq!(split_first_segment("", b'/'), ("", ""));
    }

    #[test]
    fn skips_separator_run_at_split_point() {
        assert_eq!(split_first_segment("a///b/c", b'/'), ("a", "b/c"));
    }

    #[test]
    fn pattern_split_keeps_escaped_separator() {
        assert_eq!(
            split_pattern_segment("*rest:[a-z]+\\/[0-9]+", b'/'),
            ("*rest:[a-z]+\\/[0-9]+", "")
        );
        assert_eq!(
            split_pattern_segment(":id:a\\/b/tail", b'/'),
            (":id:a\\/b", "tail")
        );
    }

    #[test]
    fn counts_segments_of_normalized_paths() {
        assert_eq!(count_segments("", b'/'), 0);
        assert_eq!(count_segments("a", b'/'), 1);
        assert_eq!(count_segments("a/b/c", b'/'), 3);
    }
}
