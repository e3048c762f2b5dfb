use crate::attempt::Try;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Parser combinator that falls back to a default value
///
/// When the inner parser fails, everything it consumed is given back and a
/// clone of `default` is returned instead. Never fails.
pub struct OptionParser<P, V> {
    default: V,
    parser: P,
}

impl<P, V> OptionParser<P, V> {
    pub fn new(default: V, parser: P) -> Self {
        OptionParser { default, parser }
    }
}

impl<T, P, V> Parser<T> for OptionParser<P, V>
where
    P: Parser<T, Output = V>,
    V: Clone,
{
    type Output = V;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        match Try::new(&self.parser).parse(state) {
            Ok(value) => Ok(value),
            Err(_) => Ok(self.default.clone()),
        }
    }
}

pub fn option<T, P>(default: P::Output, parser: P) -> OptionParser<P, P::Output>
where
    P: Parser<T>,
    P::Output: Clone,
{
    OptionParser::new(default, parser)
}

/// Parser combinator that turns failure into `None`
///
/// Like [`OptionParser`], the input consumed by a failed attempt is given back.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<T, P> Parser<T> for Maybe<P>
where
    P: Parser<T>,
{
    type Output = Option<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        Ok(Try::new(&self.parser).parse(state).ok())
    }
}

pub fn maybe<T, P>(parser: P) -> Maybe<P>
where
    P: Parser<T>,
{
    Maybe::new(parser)
}

/// Extension trait to add .or_default_to() and .maybe() method support for parsers
pub trait OptionExt<T>: Parser<T> + Sized {
    fn or_default_to(self, default: Self::Output) -> OptionParser<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OptionParser::new(default, self)
    }

    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

/// Implement OptionExt for all parsers
impl<T, P> OptionExt<T> for P where P: Parser<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::state::BasicState;
    use crate::text::{chr, string, uint};
    use crate::then::ThenExt;

    #[test]
    fn test_option_present() {
        let mut state = BasicState::from_text("-5");
        let sign = option('+', chr('-'));

        assert_eq!(sign.parse(&mut state).unwrap(), '-');
        assert_eq!(uint().parse(&mut state).unwrap(), "5");
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn test_option_default() {
        let mut state = BasicState::from_text("5");
        let parser = option('+', chr('-'));

        assert_eq!(parser.parse(&mut state).unwrap(), '+');
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_option_rolls_back_partial_match() {
        let mut state = BasicState::from_text("nul");
        let parser = option("none".to_string(), string("null"));

        assert_eq!(parser.parse(&mut state).unwrap(), "none");
        assert_eq!(state.position(), 0);
        assert_eq!(state.open_transactions(), 0);
    }

    #[test]
    fn test_maybe() {
        let mut state = BasicState::from_text("1.5");
        let fraction = chr('.').then(uint()).maybe();
        let parser = uint().then(fraction);

        assert_eq!(parser.parse(&mut state).unwrap(), Some("5".to_string()));

        let mut state = BasicState::from_text("1.x");
        assert_eq!(parser.parse(&mut state).unwrap(), None);
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn test_or_default_to_method() {
        let mut state = BasicState::from_text("7");
        let parser = uint().or_default_to("0".to_string());

        assert_eq!(parser.parse(&mut state).unwrap(), "7");
        let mut state = BasicState::from_text("x");
        assert_eq!(parser.parse(&mut state).unwrap(), "0");
    }

    #[test]
    fn test_maybe_function_syntax() {
        let mut state = BasicState::from_text("x");
        let parser = maybe(chr('y').map(|c| c.to_ascii_uppercase()));

        assert_eq!(parser.parse(&mut state).unwrap(), None);
        assert_eq!(state.position(), 0);
    }
}
