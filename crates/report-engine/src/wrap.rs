//! Deterministic word wrapping for report layout.
//!
//! Without access to real glyph metrics the width of a run is
//! approximated as `chars * font_size * APPROX_CHAR_WIDTH_RATIO`,
//! generous enough to keep ordinary prose inside the column.

/// Approximate advance of one Helvetica glyph as a fraction of the
/// font size.
const APPROX_CHAR_WIDTH_RATIO: f64 = 0.5;
const PT_TO_MM: f64 = 25.4 / 72.0;

/// Estimated rendered width of `text` in millimeters at `size_pt`.
pub fn text_width_mm(text: &str, size_pt: f64) -> f64 {
    text.chars().count() as f64 * size_pt * APPROX_CHAR_WIDTH_RATIO * PT_TO_MM
}

/// Number of characters that fit into `width_mm` at `size_pt`.
/// Always at least 1 so wrapping can make progress.
pub fn max_chars(width_mm: f64, size_pt: f64) -> usize {
    let char_width = size_pt * APPROX_CHAR_WIDTH_RATIO * PT_TO_MM;
    ((width_mm / char_width).floor() as usize).max(1)
}

/// Greedy word wrap of `text` into lines no wider than `width_mm`.
///
/// Whitespace runs collapse to single spaces; a word longer than a
/// whole line is split hard. Empty input wraps to no lines.
pub fn wrap_text(text: &str, width_mm: f64, size_pt: f64) -> Vec<String> {
    let limit = max_chars(width_mm, size_pt);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if line_chars > 0 && line_chars + 1 + word_chars <= limit {
            line.push(' ');
            line.push_str(word);
            line_chars += 1 + word_chars;
            continue;
        }

        if line_chars > 0 {
            lines.push(std::mem::take(&mut line));
            line_chars = 0;
        }

        if word_chars <= limit {
            line.push_str(word);
            line_chars = word_chars;
        } else {
            // Hard-split an overlong word across full lines.
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(limit) {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                line = chunk.iter().collect();
                line_chars = chunk.len();
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("hello world", 100.0, 12.0);
        assert_eq!(lines, vec!["hello world".to_string()]);
    }

    #[test]
    fn lines_respect_the_character_limit() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(8);
        let limit = max_chars(60.0, 12.0);
        for line in wrap_text(&text, 60.0, 12.0) {
            assert!(line.chars().count() <= limit, "overlong line: {line:?}");
        }
    }

    #[test]
    fn wrapping_preserves_every_word() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_text(text, 30.0, 12.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn overlong_word_is_hard_split() {
        let limit = max_chars(20.0, 12.0);
        let word = "x".repeat(limit * 2 + 3);
        let lines = wrap_text(&word, 20.0, 12.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.concat(), word);
        assert!(lines.iter().all(|l| l.chars().count() <= limit));
    }

    #[test]
    fn empty_and_blank_input_wrap_to_nothing() {
        assert!(wrap_text("", 60.0, 12.0).is_empty());
        assert!(wrap_text("   \t  ", 60.0, 12.0).is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        let lines = wrap_text("a   b\t\tc", 100.0, 12.0);
        assert_eq!(lines, vec!["a b c".to_string()]);
    }

    #[test]
    fn narrower_column_yields_more_lines() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert!(wrap_text(text, 30.0, 12.0).len() > wrap_text(text, 170.0, 12.0).len());
    }

    #[test]
    fn width_estimate_scales_with_size_and_length() {
        assert!(text_width_mm("abcd", 12.0) > text_width_mm("ab", 12.0));
        assert!(text_width_mm("abcd", 16.0) > text_width_mm("abcd", 12.0));
    }
}
