use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Try each alternative in order against the current position
///
/// An alternative that fails without moving the cursor lets the next one run.
/// An alternative that fails after consuming input ends the choice with its
/// error: wrap it in [`attempt`](crate::attempt) to make it abandonable. When
/// every alternative fails, the error of the last one is returned.
fn choose<'p, T, O>(
    alternatives: impl IntoIterator<Item = &'p dyn Parser<T, Output = O>>,
    state: &mut dyn State<Item = T>,
) -> Result<O, ParseError>
where
    T: 'p,
    O: 'p,
{
    let mut last_error = None;
    for alternative in alternatives {
        let start = state.position();
        match alternative.parse(state) {
            Ok(value) => return Ok(value),
            Err(e) if state.position() != start => return Err(e),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| state.trap(format_args!("no alternatives to choose from"))))
}

/// A set of parsers with a common output that [`Choice`] can pick from
///
/// Implemented for tuples of up to eight parsers and for `Vec`s of one parser type.
pub trait Alternatives<T> {
    type Output;

    fn choose(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError>;
}

impl<T, P> Alternatives<T> for Vec<P>
where
    P: Parser<T>,
{
    type Output = P::Output;

    fn choose(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        choose(
            self.iter().map(|p| p as &dyn Parser<T, Output = P::Output>),
            state,
        )
    }
}

macro_rules! impl_alternatives {
    ($($parser:ident $index:tt),+) => {
        impl<T, O, $($parser),+> Alternatives<T> for ($($parser,)+)
        where
            $($parser: Parser<T, Output = O>,)+
        {
            type Output = O;

            fn choose(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
                choose([$(&self.$index as &dyn Parser<T, Output = O>),+], state)
            }
        }
    };
}

impl_alternatives!(P0 0);
impl_alternatives!(P0 0, P1 1);
impl_alternatives!(P0 0, P1 1, P2 2);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);

/// Parser combinator that picks the first successful alternative
pub struct Choice<A> {
    alternatives: A,
}

impl<A> Choice<A> {
    pub fn new(alternatives: A) -> Self {
        Choice { alternatives }
    }
}

impl<T, A> Parser<T> for Choice<A>
where
    A: Alternatives<T>,
{
    type Output = A::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        self.alternatives.choose(state)
    }
}

/// Convenience function to create a Choice parser
///
/// ```
/// use parsimony::{BasicState, Parser, attempt, choice};
/// use parsimony::text::string;
///
/// let keyword = choice((attempt(string("let")), attempt(string("loop")), string("if")));
/// let mut state = BasicState::from_text("loop");
/// assert_eq!(keyword.parse(&mut state).unwrap(), "loop");
/// ```
pub fn choice<T, A>(alternatives: A) -> Choice<A>
where
    A: Alternatives<T>,
{
    Choice::new(alternatives)
}

/// Binary choice, following the same consumed-input rule as [`Choice`]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<T, P1, P2, O> Parser<T> for Or<P1, P2>
where
    P1: Parser<T, Output = O>,
    P2: Parser<T, Output = O>,
{
    type Output = O;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        choose([&self.parser1 as &dyn Parser<T, Output = O>, &self.parser2], state)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<T>: Parser<T> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<T, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<T, P> OrExt<T> for P where P: Parser<T> {}
