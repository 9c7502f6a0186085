use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max` display columns, ending with `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `max` display columns. Words longer than a line are
/// truncated.
pub fn wrap(s: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        let word = truncate(word, max);
        if current.is_empty() {
            current = word;
        } else if width(&current) + 1 + width(&word) <= max {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Spaces needed so that `left` and `right` fill `total` columns.
pub fn gap(total: usize, left: usize, right: usize) -> String {
    " ".repeat(total.saturating_sub(left + right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Software Developer Intern", 10), "Software …");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(width(&truncate("████████", 4)), 4);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("Are you sure you want to delete all data?", 16),
            vec!["Are you sure you", "want to delete", "all data?"]
        );
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_gap() {
        assert_eq!(gap(10, 3, 4), "   ");
        assert_eq!(gap(5, 3, 4), "");
    }
}
