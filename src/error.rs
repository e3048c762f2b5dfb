use std::fmt;

/// Classification of a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The stream was exhausted while an item was still required
    Eof,
    /// An item was present but did not satisfy an equality or predicate check
    Mismatch,
    /// A generic positioned failure raised by a leaf or structural combinator
    Trap,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Eof => f.write_str("eof"),
            ErrorKind::Mismatch => f.write_str("mismatch"),
            ErrorKind::Trap => f.write_str("trap"),
        }
    }
}

/// A positioned parse failure
///
/// Errors are only ever built by a [`State`](crate::State), which stamps them
/// with the cursor position at the moment the failure was detected. Combinators
/// pass them along untouched, so the position a caller sees is the position
/// where parsing actually stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stop at {position} : {message}")]
pub struct ParseError {
    kind: ErrorKind,
    position: usize,
    message: String,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            position,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the position where this error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Translate the error position into a line and offset within `source`
    ///
    /// The position is interpreted as a char index, which is what
    /// [`BasicState::from_text`](crate::BasicState::from_text) produces.
    pub fn locate(&self, source: &str) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, ch) in source.chars().enumerate() {
            if i >= self.position {
                break;
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.position.saturating_sub(line_start),
        }
    }

    /// Render the error with up to two lines of context around the failure
    pub fn render(&self, source: &str) -> String {
        let pos = self.locate(source);
        let mut out = format!(
            "{} at line {}, offset {}: {}\n\n",
            self.kind, pos.line, pos.offset, self.message
        );

        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        for (index, content) in source.split('\n').enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            out.push_str(&prefix);
            out.push_str(content);
            out.push('\n');

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.offset;
                out.push_str(&" ".repeat(pointer_offset));
                out.push_str("^--- here\n");
            }
        }

        out
    }
}

/// Line number (1-based) and item offset within that line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_position_and_message() {
        let error = ParseError::new(ErrorKind::Trap, 7, "expect ':' but '/'");
        assert_eq!(error.to_string(), "stop at 7 : expect ':' but '/'");
        assert_eq!(error.kind(), ErrorKind::Trap);
        assert_eq!(error.position(), 7);
        assert_eq!(error.message(), "expect ':' but '/'");
    }

    #[test]
    fn test_locate_first_line() {
        let error = ParseError::new(ErrorKind::Mismatch, 3, "boom");
        let pos = error.locate("hello\nworld");
        assert_eq!(pos, ReadablePosition { line: 1, offset: 3 });
    }

    #[test]
    fn test_locate_after_newline() {
        let error = ParseError::new(ErrorKind::Mismatch, 8, "boom");
        let pos = error.locate("hello\nworld");
        assert_eq!(pos, ReadablePosition { line: 2, offset: 2 });
    }

    #[test]
    fn test_locate_end_of_input() {
        let error = ParseError::new(ErrorKind::Eof, 11, "eof");
        let pos = error.locate("line1\nline2");
        assert_eq!(pos, ReadablePosition { line: 2, offset: 5 });
    }

    #[test]
    fn test_locate_counts_chars_not_bytes() {
        let error = ParseError::new(ErrorKind::Mismatch, 2, "boom");
        let pos = error.locate("中文x");
        assert_eq!(pos.offset, 2);
    }

    #[test]
    fn test_render_points_at_failure() {
        let error = ParseError::new(ErrorKind::Mismatch, 8, "expect digit but 'r'");
        let rendered = error.render("hello\nworld");

        assert!(rendered.contains("mismatch at line 2, offset 2"));
        assert!(rendered.contains("  > 2 | world"));
        assert!(rendered.contains("    1 | hello"));
        let pointer_line = rendered
            .lines()
            .find(|line| line.contains("^--- here"))
            .unwrap();
        assert_eq!(pointer_line.find('^').unwrap(), "  > 2 | ".len() + 2);
    }

    #[test]
    fn test_render_empty_source() {
        let error = ParseError::new(ErrorKind::Eof, 0, "eof");
        let rendered = error.render("");
        assert!(rendered.contains("eof at line 1, offset 0"));
        assert!(rendered.contains("^--- here"));
    }

    #[test]
    fn test_render_limits_context() {
        let source = "a\nb\nc\nd\ne\nf\ng";
        let error = ParseError::new(ErrorKind::Trap, 8, "boom");
        let rendered = error.render(source);

        assert!(!rendered.contains("| a"));
        assert!(rendered.contains("| c"));
        assert!(rendered.contains("  > 5 | e"));
        assert!(rendered.contains("| g"));
    }
}
