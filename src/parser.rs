use crate::error::ParseError;
use crate::state::State;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// A parser is an immutable, reusable value. Each call to `parse` runs it once
/// against a state, advancing the cursor on success. On failure the cursor is
/// left wherever the failure was detected; only [`attempt`](crate::attempt)
/// and the combinators built on it restore consumed input.
pub trait Parser<T> {
    type Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError>;
}

impl<T, P> Parser<T> for &P
where
    P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        (**self).parse(state)
    }
}

impl<T, P> Parser<T> for Box<P>
where
    P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        (**self).parse(state)
    }
}

impl<T, P> Parser<T> for Rc<P>
where
    P: Parser<T> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        (**self).parse(state)
    }
}

/// Type-erased, cheaply clonable parser
///
/// Useful for storing parsers of different concrete types side by side, or for
/// sharing one grammar between several larger ones.
pub type BoxedParser<'a, T, O> = Rc<dyn Parser<T, Output = O> + 'a>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<T>: Parser<T> + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, T, Self::Output>
    where
        Self: 'a,
    {
        Rc::new(self)
    }
}

impl<T, P> BoxedExt<T> for P where P: Parser<T> {}

/// Parser built from a closure over the state
///
/// This is the sequencing escape hatch: inside the closure, sub-parsers are run
/// with `?`, so the first failure returns early with its original error.
pub struct DoParse<F> {
    body: F,
}

impl<T, O, F> Parser<T> for DoParse<F>
where
    F: Fn(&mut dyn State<Item = T>) -> Result<O, ParseError>,
{
    type Output = O;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        (self.body)(state)
    }
}

/// Build a parser from a closure that runs other parsers with `?`
///
/// ```
/// use parsimony::{BasicState, Parser, do_parse};
/// use parsimony::text::{chr, uint};
///
/// let pair = do_parse(|state| {
///     let left = uint().parse(state)?;
///     chr(',').parse(state)?;
///     let right = uint().parse(state)?;
///     Ok((left, right))
/// });
///
/// let mut state = BasicState::from_text("12,34");
/// assert_eq!(pair.parse(&mut state).unwrap(), ("12".to_string(), "34".to_string()));
/// ```
pub fn do_parse<T, O, F>(body: F) -> DoParse<F>
where
    F: Fn(&mut dyn State<Item = T>) -> Result<O, ParseError>,
{
    DoParse { body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::{eq, one};
    use crate::error::ErrorKind;
    use crate::state::BasicState;
    use crate::text::chr;

    #[test]
    fn test_parser_is_reusable_across_states() {
        let parser = chr('a');

        let mut first = BasicState::from_text("a");
        let mut second = BasicState::from_text("ab");
        assert_eq!(parser.parse(&mut first).unwrap(), 'a');
        assert_eq!(parser.parse(&mut second).unwrap(), 'a');
        assert_eq!(second.position(), 1);
    }

    #[test]
    fn test_reference_and_rc_parsers() {
        let parser = eq(3);
        let shared = Rc::new(eq(3));
        let mut state = BasicState::new(vec![3, 3, 3]);

        assert_eq!((&parser).parse(&mut state).unwrap(), 3);
        assert_eq!(shared.parse(&mut state).unwrap(), 3);
        assert_eq!(Box::new(one()).parse(&mut state).unwrap(), 3);
        assert_eq!(state.position(), 3);
    }

    #[test]
    fn test_boxed_parsers_share_one_grammar() {
        let digit: BoxedParser<u8, u8> = eq(b'7').boxed();
        let again = Rc::clone(&digit);
        let mut state = BasicState::from_bytes(b"77");

        assert_eq!(digit.parse(&mut state).unwrap(), b'7');
        assert_eq!(again.parse(&mut state).unwrap(), b'7');
    }

    #[test]
    fn test_do_parse_sequences_with_question_mark() {
        let parser = do_parse(|state| {
            let a = chr('a').parse(state)?;
            let b = chr('b').parse(state)?;
            Ok(format!("{}{}", a, b))
        });
        let mut state = BasicState::from_text("abc");

        assert_eq!(parser.parse(&mut state).unwrap(), "ab");
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn test_do_parse_returns_first_error_unchanged() {
        let parser = do_parse(|state| {
            chr('a').parse(state)?;
            chr('b').parse(state)?;
            chr('c').parse(state)
        });
        let mut state = BasicState::from_text("axc");

        let error = parser.parse(&mut state).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Mismatch);
        assert_eq!(error.position(), 1);
        assert_eq!(state.position(), 1);
    }
}
