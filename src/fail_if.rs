use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails with a trap at the current position if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct FailIf<P> {
    parser: P,
}

impl<P> FailIf<P> {
    pub fn new(parser: P) -> Self {
        FailIf { parser }
    }
}

impl<T, P> Parser<T> for FailIf<P>
where
    P: Parser<T>,
{
    type Output = ();

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let transaction = state.begin();
        let outcome = self.parser.parse(state);
        state.rollback(transaction);
        match outcome {
            Ok(_) => Err(state.trap(format_args!("expect a failure but the parser succeeded"))),
            Err(_) => Ok(()),
        }
    }
}

/// Convenience function to create a FailIf parser for negative lookahead
pub fn fail_if<T, P>(parser: P) -> FailIf<P>
where
    P: Parser<T>,
{
    FailIf::new(parser)
}

/// Extension trait to add .fail_if() method support for parsers
pub trait FailIfExt<T>: Parser<T> + Sized {
    fn fail_if(self) -> FailIf<Self> {
        FailIf::new(self)
    }
}

/// Implement FailIfExt for all parsers
impl<T, P> FailIfExt<T> for P where P: Parser<T> {}
