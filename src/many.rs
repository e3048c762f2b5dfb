use crate::attempt::Try;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;
use crate::then::Over;

/// Run `parser` under [`Try`] until it fails, collecting every value
///
/// The failure that ends the loop is dropped and its partial input rolled back.
pub(crate) fn collect_while<T, P>(
    parser: &P,
    state: &mut dyn State<Item = T>,
    mut results: Vec<P::Output>,
) -> Vec<P::Output>
where
    P: Parser<T>,
{
    let parser = Try::new(parser);
    while let Ok(value) = parser.parse(state) {
        results.push(value);
    }
    results
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Each repetition is attempted, so a repetition that fails half way through
/// gives back what it consumed and the loop ends cleanly.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<T, P> Parser<T> for Many<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        Ok(collect_while(&self.parser, state, Vec::new()))
    }
}

/// Convenience function to create a Many parser
pub fn many<T, P>(parser: P) -> Many<P>
where
    P: Parser<T>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first occurrence is not attempted: if it fails, its error and any
/// input it consumed are passed on as they are.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<T, P> Parser<T> for Many1<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let first = self.parser.parse(state)?;
        Ok(collect_while(&self.parser, state, vec![first]))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<T, P>(parser: P) -> Many1<P>
where
    P: Parser<T>,
{
    Many1::new(parser)
}

/// Zero or more `parser` followed by a mandatory `end`, keeping the repetitions
pub fn many_til<T, P, E>(parser: P, end: E) -> Over<Many<P>, E>
where
    P: Parser<T>,
    E: Parser<T>,
{
    Over::new(Many::new(parser), end)
}

/// One or more `parser` followed by a mandatory `end`, keeping the repetitions
pub fn many1_til<T, P, E>(parser: P, end: E) -> Over<Many1<P>, E>
where
    P: Parser<T>,
    E: Parser<T>,
{
    Over::new(Many1::new(parser), end)
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt<T>: Parser<T> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<T, P> ManyExt<T> for P where P: Parser<T> {}
