use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that undoes consumed input when the inner parser fails
///
/// The inner parser runs inside a transaction. On success the transaction is
/// committed and the cursor stays where the parser left it. On failure the
/// cursor goes back to where the attempt started, however far the parser got,
/// and the original error is returned unchanged.
///
/// This is the only primitive that backtracks. Plain sequencing never does.
pub struct Try<P> {
    parser: P,
}

impl<P> Try<P> {
    pub fn new(parser: P) -> Self {
        Try { parser }
    }
}

impl<T, P> Parser<T> for Try<P>
where
    P: Parser<T>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let transaction = state.begin();
        match self.parser.parse(state) {
            Ok(value) => {
                state.commit(transaction);
                Ok(value)
            }
            Err(e) => {
                state.rollback(transaction);
                Err(e)
            }
        }
    }
}

/// Convenience function to create a Try parser
pub fn attempt<T, P>(parser: P) -> Try<P>
where
    P: Parser<T>,
{
    Try::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait TryExt<T>: Parser<T> + Sized {
    fn attempt(self) -> Try<Self> {
        Try::new(self)
    }
}

/// Implement TryExt for all parsers
impl<T, P> TryExt<T> for P where P: Parser<T> {}
