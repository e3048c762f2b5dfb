use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<T, F, P> Parser<T> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<T>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let parser = (self.factory)();
        parser.parse(state)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<T, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<T>,
{
    Lazy::new(factory)
}
