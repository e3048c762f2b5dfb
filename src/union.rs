use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that runs parsers in sequence and keeps the values that are present
///
/// Each parser yields an `Option`. The `Some` values are collected in order and
/// the `None`s are dropped. The first failure is returned as is.
pub struct Union<P> {
    parsers: Vec<P>,
}

impl<P> Union<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Union { parsers }
    }
}

impl<T, P, O> Parser<T> for Union<P>
where
    P: Parser<T, Output = Option<O>>,
{
    type Output = Vec<O>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            if let Some(value) = parser.parse(state)? {
                results.push(value);
            }
        }
        Ok(results)
    }
}

pub fn union<T, P, O>(parsers: Vec<P>) -> Union<P>
where
    P: Parser<T, Output = Option<O>>,
{
    Union::new(parsers)
}

/// Parser combinator that runs parsers in sequence and keeps every value
pub struct UnionAll<P> {
    parsers: Vec<P>,
}

impl<P> UnionAll<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        UnionAll { parsers }
    }
}

impl<T, P> Parser<T> for UnionAll<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        self.parsers.iter().map(|parser| parser.parse(state)).collect()
    }
}

pub fn union_all<T, P>(parsers: Vec<P>) -> UnionAll<P>
where
    P: Parser<T>,
{
    UnionAll::new(parsers)
}
