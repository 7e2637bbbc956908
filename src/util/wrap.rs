//! Greedy word wrapping for paragraph text.
//!
//! The section widget needs line counts ahead of rendering (for scroll
//! clamping and reveal visibility), so wrapping is done here rather than
//! left to ratatui's `Wrap`.

/// Wraps `text` to at most `width` characters per line, breaking on
/// whitespace. Words longer than `width` are split hard. Existing newlines
/// are preserved as paragraph breaks.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if current.is_empty() {
                if word_len <= width {
                    current.push_str(word);
                } else {
                    hard_split(word, width, &mut lines, &mut current);
                }
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                if word_len <= width {
                    current.push_str(word);
                } else {
                    hard_split(word, width, &mut lines, &mut current);
                }
            }
        }
        lines.push(current);
    }

    lines
}

/// Splits an over-long word into full-width chunks, leaving the remainder
/// in `current`.
fn hard_split(word: &str, width: usize, lines: &mut Vec<String>, current: &mut String) {
    let chars: Vec<char> = word.chars().collect();
    let mut start = 0;
    while chars.len() - start > width {
        lines.push(chars[start..start + width].iter().collect());
        start += width;
    }
    *current = chars[start..].iter().collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_on_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_text("hello", 80), vec!["hello"]);
    }

    #[test]
    fn test_preserves_paragraph_breaks() {
        let lines = wrap_text("one\n\ntwo", 80);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_hard_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }
}
