//! Text normalization applied before frequency counting.
//!
//! Multi-line input has its lines rejoined with `'\n'`, then the whole text
//! is trimmed and lowercased. A line ends at `"\r\n"` or at any one of
//! [`LINE_TERMINATORS`]. Single-line input is only trimmed and lowercased.

/// Characters that end a line on their own.
pub const LINE_TERMINATORS: [char; 5] = ['\n', '\r', '\u{2028}', '\u{2029}', '\u{85}'];

/// Normalize raw text for tree construction.
pub fn normalize(text: &str) -> String {
    if text.contains(LINE_TERMINATORS) {
        normalize_lines(
            text.split("\r\n")
                .flat_map(|chunk| chunk.split(LINE_TERMINATORS)),
        )
    } else {
        text.trim().to_lowercase()
    }
}

/// Normalize text that arrives already split into lines.
pub fn normalize_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(line);
    }
    joined.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(normalize("  Hello World \t"), "hello world");
    }

    #[test]
    fn test_multi_line_rejoined() {
        assert_eq!(normalize("Line One\r\nLine Two\n"), "line one\nline two");
        assert_eq!(normalize("\n\nA\n\nB\n\n"), "a\n\nb");
    }

    #[test]
    fn test_every_terminator_ends_a_line() {
        assert_eq!(normalize("a\r\nb\rc"), "a\nb\nc");
        assert_eq!(normalize("A\rB"), "a\nb");
        assert_eq!(normalize("x\u{2028}y\u{2029}z\u{85}w"), "x\ny\nz\nw");
        assert_eq!(normalize("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_lines_iterator() {
        assert_eq!(normalize_lines(["  Foo", "Bar  "]), "foo\nbar");
        assert_eq!(normalize_lines(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(normalize(" \n \t\n"), "");
    }
}
