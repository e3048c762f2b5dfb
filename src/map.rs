use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<T, P, F, U> Parser<T> for Map<P, F>
where
    P: Parser<T>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let value = self.parser.parse(state)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<T, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<T>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<T>: Parser<T> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<T, P> MapExt<T> for P where P: Parser<T> {}
