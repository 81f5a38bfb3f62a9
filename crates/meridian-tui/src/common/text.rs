//! Text utilities for rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Uses unicode width for accurate terminal column calculation, handling
/// wide characters correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    for ch in text.chars() {
        let next_width = truncated.width() + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Wraps plain prose to `width` columns on word boundaries.
///
/// Long unbreakable words are split hard. Used by the static marketing
/// pages; form fields never wrap.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line = split_long_word(word, width, &mut lines);
            } else if line.width() + 1 + word.width() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line = split_long_word(word, width, &mut lines);
            }
        }
        lines.push(line);
    }
    lines
}

/// Pushes full-width chunks of an overlong word, returning the remainder.
fn split_long_word(word: &str, width: usize, lines: &mut Vec<String>) -> String {
    let mut current = String::new();
    for ch in word.chars() {
        if current.width() + ch.width().unwrap_or(0) > width {
            lines.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_is_identity() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_appends_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn wrap_respects_word_boundaries() {
        let lines = wrap_words("the quick brown fox", 9);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrap_preserves_blank_lines() {
        let lines = wrap_words("one\n\ntwo", 20);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn wrap_splits_unbreakable_words() {
        let lines = wrap_words("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }
}
