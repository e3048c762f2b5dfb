use crate::attempt::Try;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

fn skip_while<T, P>(parser: &P, state: &mut dyn State<Item = T>)
where
    P: Parser<T>,
{
    let parser = Try::new(parser);
    while parser.parse(state).is_ok() {}
}

/// Parser combinator that consumes zero or more occurrences and discards them
pub struct Skip<P> {
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(parser: P) -> Self {
        Skip { parser }
    }
}

impl<T, P> Parser<T> for Skip<P>
where
    P: Parser<T>,
{
    type Output = ();

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        skip_while(&self.parser, state);
        Ok(())
    }
}

/// Convenience function to create a Skip parser
pub fn skip<T, P>(parser: P) -> Skip<P>
where
    P: Parser<T>,
{
    Skip::new(parser)
}

/// Parser combinator that consumes one or more occurrences and discards them
pub struct Skip1<P> {
    parser: P,
}

impl<P> Skip1<P> {
    pub fn new(parser: P) -> Self {
        Skip1 { parser }
    }
}

impl<T, P> Parser<T> for Skip1<P>
where
    P: Parser<T>,
{
    type Output = ();

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        self.parser.parse(state)?;
        skip_while(&self.parser, state);
        Ok(())
    }
}

/// Convenience function to create a Skip1 parser
pub fn skip1<T, P>(parser: P) -> Skip1<P>
where
    P: Parser<T>,
{
    Skip1::new(parser)
}

/// Extension trait to add .skip() and .skip1() method support for parsers
pub trait SkipExt<T>: Parser<T> + Sized {
    fn skip(self) -> Skip<Self> {
        Skip::new(self)
    }

    fn skip1(self) -> Skip1<Self> {
        Skip1::new(self)
    }
}

/// Implement SkipExt for all parsers
impl<T, P> SkipExt<T> for P where P: Parser<T> {}
