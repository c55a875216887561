use unicode_width::UnicodeWidthChar;

/// Estimate how many visual lines `text` occupies when wrapped at
/// `max_width`, approximating ratatui's Wrap { trim: true } closely enough
/// for scroll bookkeeping. Handles explicit newlines and automatic wrapping.
pub fn wrapped_line_count(text: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 1;
    }

    let mut lines = 1;
    let mut current_width = 0;

    for ch in text.chars() {
        if ch == '\n' {
            lines += 1;
            current_width = 0;
            continue;
        }
        let char_width = ch.width().unwrap_or(1);
        if current_width + char_width > max_width && current_width > 0 {
            lines += 1;
            current_width = char_width;
        } else {
            current_width += char_width;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_line_count_empty() {
        assert_eq!(wrapped_line_count("", 10), 1);
    }

    #[test]
    fn test_wrapped_line_count_fits_on_one_line() {
        assert_eq!(wrapped_line_count("Hello", 10), 1);
    }

    #[test]
    fn test_wrapped_line_count_exact_width() {
        assert_eq!(wrapped_line_count("0123456789", 10), 1);
    }

    #[test]
    fn test_wrapped_line_count_wraps() {
        assert_eq!(wrapped_line_count("0123456789A", 10), 2);
        assert_eq!(wrapped_line_count("This is a very long text that wraps", 10), 4);
    }

    #[test]
    fn test_wrapped_line_count_explicit_newlines() {
        assert_eq!(wrapped_line_count("Line 1\nLine 2\nLine 3", 20), 3);
    }

    #[test]
    fn test_wrapped_line_count_mixed() {
        assert_eq!(wrapped_line_count("Short\n0123456789ABC", 10), 3);
    }

    #[test]
    fn test_wrapped_line_count_zero_width() {
        assert_eq!(wrapped_line_count("anything", 0), 1);
    }

    #[test]
    fn test_wrapped_line_count_wide_chars() {
        // CJK characters are two cells wide.
        assert_eq!(wrapped_line_count("日本語のテキスト", 8), 2);
    }
}
