use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that runs two parsers in sequence and keeps the second result
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<T, P1, P2> Parser<T> for Then<P1, P2>
where
    P1: Parser<T>,
    P2: Parser<T>,
{
    type Output = P2::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        self.parser1.parse(state)?;
        self.parser2.parse(state)
    }
}

/// Parser combinator that runs two parsers in sequence and keeps the first result
///
/// Handy for trailing delimiters and terminators: `value.over(chr(';'))`.
pub struct Over<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Over<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Over { parser1, parser2 }
    }
}

impl<T, P1, P2> Parser<T> for Over<P1, P2>
where
    P1: Parser<T>,
    P2: Parser<T>,
{
    type Output = P1::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let value = self.parser1.parse(state)?;
        self.parser2.parse(state)?;
        Ok(value)
    }
}

/// Convenience function to create a Then parser
pub fn then<T, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<T>,
    P2: Parser<T>,
{
    Then::new(parser1, parser2)
}

/// Convenience function to create an Over parser
pub fn over<T, P1, P2>(parser1: P1, parser2: P2) -> Over<P1, P2>
where
    P1: Parser<T>,
    P2: Parser<T>,
{
    Over::new(parser1, parser2)
}

/// Extension trait to add .then() and .over() method support for parsers
pub trait ThenExt<T>: Parser<T> + Sized {
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        P: Parser<T>,
    {
        Then::new(self, next)
    }

    fn over<P>(self, next: P) -> Over<Self, P>
    where
        P: Parser<T>,
    {
        Over::new(self, next)
    }
}

/// Implement ThenExt for all parsers
impl<T, P> ThenExt<T> for P where P: Parser<T> {}
