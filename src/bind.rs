use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Monadic sequencing: feed the output of a parser to a function that chooses
/// the next parser
///
/// If the first parser fails its error is returned untouched and the binder is
/// never called. Otherwise the parser returned by the binder runs against the
/// same, already advanced state.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<T, P, F, Q> Parser<T> for Bind<P, F>
where
    P: Parser<T>,
    F: Fn(P::Output) -> Q,
    Q: Parser<T>,
{
    type Output = Q::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let value = self.parser.parse(state)?;
        (self.binder)(value).parse(state)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<T, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<T>,
    F: Fn(P::Output) -> Q,
    Q: Parser<T>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<T>: Parser<T> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<T>,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<T, P> BindExt<T> for P where P: Parser<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::{fail, ret};
    use crate::error::ErrorKind;
    use crate::state::BasicState;
    use crate::text::{chr, digit};
    use crate::then::ThenExt;
    use std::cell::Cell;

    #[test]
    fn test_bind_feeds_value_to_continuation() {
        let mut state = BasicState::from_text("aa");
        let parser = chr('a').bind(|first| chr(first));

        assert_eq!(parser.parse(&mut state).unwrap(), 'a');
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn test_bind_chooses_next_parser_from_value() {
        // A digit announcing how many 'x' follow.
        let parser = digit().bind(|d| {
            let count = d.to_digit(10).unwrap_or(0) as usize;
            crate::repeat::times(count, chr('x'))
        });
        let mut state = BasicState::from_text("3xxxy");

        assert_eq!(parser.parse(&mut state).unwrap(), vec!['x', 'x', 'x']);
        assert_eq!(state.position(), 4);
    }

    #[test]
    fn test_bind_skips_continuation_on_failure() {
        let called = Cell::new(false);
        let parser = chr('a').bind(|_| {
            called.set(true);
            ret(())
        });
        let mut state = BasicState::from_text("b");

        let error = parser.parse(&mut state).unwrap_err();
        assert!(!called.get());
        assert_eq!(error.kind(), ErrorKind::Mismatch);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_bind_error_from_continuation_keeps_its_position() {
        let parser = chr('a').then(chr('b')).bind(|_| fail::<()>("stop here"));
        let mut state = BasicState::from_text("abc");

        let error = parser.parse(&mut state).unwrap_err();
        assert_eq!(error.position(), 2);
        assert_eq!(error.message(), "stop here");
    }

    #[test]
    fn test_function_syntax() {
        let parser = bind(chr('a'), |a| ret(a.to_ascii_uppercase()));
        let mut state = BasicState::from_text("a");

        assert_eq!(parser.parse(&mut state).unwrap(), 'A');
    }
}
