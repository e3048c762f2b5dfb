use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Represents a span of the input with start and end positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the items of `source` this span covers, if it lies within it
    pub fn slice<'s, T>(&self, source: &'s [T]) -> Option<&'s [T]> {
        source.get(self.start..self.end)
    }
}

/// A parser combinator that captures the span covered by a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<T, P> Parser<T> for Spanned<P>
where
    P: Parser<T>,
{
    type Output = (P::Output, Span);

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let start = state.position();
        let output = self.parser.parse(state)?;
        Ok((output, Span::new(start, state.position())))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpanExt<T>: Parser<T> + Sized {
    /// Wrap this parser to capture its span
    fn with_span(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<T, P> SpanExt<T> for P where P: Parser<T> {}

/// Convenience function to create a Spanned combinator
pub fn spanned<T, P>(parser: P) -> Spanned<P>
where
    P: Parser<T>,
{
    Spanned::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::byte;
    use crate::many::many;
    use crate::state::BasicState;
    use crate::text::{chr, space, string};
    use crate::then::ThenExt;

    #[test]
    fn test_span_basic() {
        let data = b"hello";
        let span = Span::new(0, 5);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.slice(data), Some(&b"hello"[..]));
    }

    #[test]
    fn test_span_empty() {
        let data = b"hello";
        let span = Span::new(3, 3);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice(data), Some(&b""[..]));
    }

    #[test]
    fn test_span_out_of_range() {
        let data = b"hi";
        assert_eq!(Span::new(1, 4).slice(data), None);
    }

    #[test]
    fn test_spanned_single_byte() {
        let mut state = BasicState::from_bytes(b"hello");
        let parser = spanned(byte(b'h'));

        let (value, span) = parser.parse(&mut state).unwrap();
        assert_eq!(value, b'h');
        assert_eq!(span, Span::new(0, 1));
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn test_spanned_multiple_items() {
        let mut state = BasicState::from_bytes(b"abc");

        let (_, span) = byte(b'a').with_span().parse(&mut state).unwrap();
        assert_eq!(span, Span::new(0, 1));
        let (_, span) = byte(b'b').with_span().parse(&mut state).unwrap();
        assert_eq!(span, Span::new(1, 2));
        let (_, span) = byte(b'c').with_span().parse(&mut state).unwrap();
        assert_eq!(span, Span::new(2, 3));
    }

    #[test]
    fn test_spanned_after_skipped_prefix() {
        let source: Vec<char> = "   hello world".chars().collect();
        let mut state = BasicState::new(source.clone());
        let parser = many(space()).then(string("hello").with_span());

        let (matched, span) = parser.parse(&mut state).unwrap();
        assert_eq!(matched, "hello");
        assert_eq!(span, Span::new(3, 8));
        assert_eq!(span.slice(&source), Some(&source[3..8]));
    }

    #[test]
    fn test_spanned_error_propagation() {
        let mut state = BasicState::from_text("xyz");
        let parser = chr('a').with_span();

        let error = parser.parse(&mut state).unwrap_err();
        assert_eq!(error.position(), 0);
    }
}
