//! Truncation and wrapping helpers for plain text.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{grapheme_width, visible_width};

/// Collapse any run of line breaks into a single space.
pub fn normalize_to_single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_break = false;
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            if !last_was_break {
                out.push(' ');
            }
            last_was_break = true;
        } else {
            out.push(ch);
            last_was_break = false;
        }
    }
    out.trim().to_string()
}

pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str, pad: bool) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = visible_width(text);
    if text_width <= max_width {
        if pad {
            return format!("{text}{}", " ".repeat(max_width - text_width));
        }
        return text.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    let target_width = max_width.saturating_sub(ellipsis_width);
    if target_width == 0 {
        return ellipsis.chars().take(max_width).collect();
    }

    let mut truncated = String::with_capacity(text.len());
    let mut current_width = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        if current_width + width > target_width {
            break;
        }
        truncated.push_str(grapheme);
        current_width += width;
    }
    truncated.push_str(ellipsis);

    if pad {
        let result_width = visible_width(&truncated);
        if result_width < max_width {
            truncated.push_str(&" ".repeat(max_width - result_width));
        }
    }

    truncated
}

/// Wrap text into lines no wider than `width` cells.
///
/// Explicit line breaks are kept. Words wider than a full line are split at grapheme
/// boundaries.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let raw_line = raw_line.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0;

        for word in raw_line.split_whitespace() {
            let word_width = visible_width(word);
            let needed = if current.is_empty() {
                word_width
            } else {
                word_width + 1
            };

            if current_width + needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for grapheme in word.graphemes(true) {
                let grapheme_cells = grapheme_width(grapheme);
                if current_width + grapheme_cells > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += grapheme_cells;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{normalize_to_single_line, truncate_to_width, wrap_to_width};
    use crate::core::text::width::visible_width;

    #[test]
    fn truncate_returns_original_when_shorter() {
        assert_eq!(truncate_to_width("hello", 6, "...", false), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        let truncated = truncate_to_width("hello", 4, "...", false);
        assert_eq!(truncated, "h...");
        assert_eq!(visible_width(&truncated), 4);
    }

    #[test]
    fn truncate_pads_when_requested() {
        let padded = truncate_to_width("hi", 4, "...", true);
        assert_eq!(padded, "hi  ");
        assert_eq!(visible_width(&padded), 4);
    }

    #[test]
    fn truncate_handles_small_max_width() {
        assert_eq!(truncate_to_width("hello", 2, "...", false), "..");
    }

    #[test]
    fn truncate_never_splits_wide_graphemes() {
        let truncated = truncate_to_width("ab😀cd", 4, "", false);
        assert_eq!(truncated, "ab😀");
        let truncated = truncate_to_width("abc😀", 4, "", false);
        assert_eq!(truncated, "abc");
    }

    #[test]
    fn normalize_collapses_line_breaks() {
        assert_eq!(normalize_to_single_line("one\r\ntwo\n\nthree\n"), "one two three");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_to_width("the quick brown fox", 10),
            vec!["the quick".to_string(), "brown fox".to_string()]
        );
    }

    #[test]
    fn wrap_keeps_explicit_breaks_and_splits_long_words() {
        assert_eq!(
            wrap_to_width("ab\nabcdefgh", 3),
            vec![
                "ab".to_string(),
                "abc".to_string(),
                "def".to_string(),
                "gh".to_string()
            ]
        );
    }

    #[test]
    fn wrap_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_to_width("", 10), vec![String::new()]);
    }
}
