use crate::attempt::Try;
use crate::error::ParseError;
use crate::many::collect_while;
use crate::parser::Parser;
use crate::state::State;
use crate::then::Then;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec!["1", "2", "3"]`
///
/// # Note
/// - Requires at least one element
/// - A separator not followed by an item is left in the stream
/// - Does not handle whitespace automatically
pub struct SepBy1<P, S> {
    item: P,
    separator: S,
}

impl<P, S> SepBy1<P, S> {
    pub fn new(item: P, separator: S) -> Self {
        SepBy1 { item, separator }
    }
}

impl<T, P, S> Parser<T> for SepBy1<P, S>
where
    P: Parser<T>,
    S: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let first = self.item.parse(state)?;
        let rest = Then::new(&self.separator, &self.item);
        Ok(collect_while(&rest, state, vec![first]))
    }
}

pub fn sep_by1<T, P, S>(item: P, separator: S) -> SepBy1<P, S>
where
    P: Parser<T>,
    S: Parser<T>,
{
    SepBy1::new(item, separator)
}

/// Like [`SepBy1`], but an empty list is a valid result
///
/// Never fails. A first item that fails after consuming input is rolled back.
pub struct SepBy<P, S> {
    inner: SepBy1<P, S>,
}

impl<P, S> SepBy<P, S> {
    pub fn new(item: P, separator: S) -> Self {
        SepBy {
            inner: SepBy1::new(item, separator),
        }
    }
}

impl<T, P, S> Parser<T> for SepBy<P, S>
where
    P: Parser<T>,
    S: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        Ok(Try::new(&self.inner).parse(state).unwrap_or_default())
    }
}

pub fn sep_by<T, P, S>(item: P, separator: S) -> SepBy<P, S>
where
    P: Parser<T>,
    S: Parser<T>,
{
    SepBy::new(item, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, bytes};
    use crate::choice::OrExt;
    use crate::state::BasicState;
    use crate::text::{chr, int, letter, string};

    #[test]
    fn test_sep_by1_empty_list_fails() {
        let mut state = BasicState::from_text("");
        let parser = sep_by1(int(), chr(','));

        assert!(parser.parse(&mut state).is_err());
    }

    #[test]
    fn test_single_element() {
        let mut state = BasicState::from_text("42");
        let parser = sep_by1(int(), chr(','));

        assert_eq!(parser.parse(&mut state).unwrap(), vec!["42"]);
    }

    #[test]
    fn test_multiple_elements() {
        let mut state = BasicState::from_text("1,-2,3");
        let parser = sep_by1(int(), chr(','));

        assert_eq!(parser.parse(&mut state).unwrap(), vec!["1", "-2", "3"]);
        assert_eq!(state.position(), 6);
    }

    #[test]
    fn test_trailing_separator_is_left_in_stream() {
        let mut state = BasicState::from_text("1,2,");
        let parser = sep_by1(int(), chr(','));

        assert_eq!(parser.parse(&mut state).unwrap(), vec!["1", "2"]);
        assert_eq!(state.position(), 3);
    }

    #[test]
    fn test_non_matching_separator() {
        let mut state = BasicState::from_text("1;2");
        let parser = sep_by1(int(), chr(','));

        assert_eq!(parser.parse(&mut state).unwrap(), vec!["1"]);
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn test_string_separator() {
        let mut state = BasicState::from_bytes(b"a::b::c");
        let parser = sep_by1(byte(b'a').or(byte(b'b')).or(byte(b'c')), bytes(b"::"));

        assert_eq!(parser.parse(&mut state).unwrap(), b"abc".to_vec());
    }

    #[test]
    fn test_sep_by_empty_input() {
        let mut state = BasicState::from_text("");
        let parser = sep_by(letter(), chr(','));

        assert_eq!(parser.parse(&mut state).unwrap(), vec![]);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_sep_by_rolls_back_partial_first_item() {
        let mut state = BasicState::from_text("truth");
        let parser = sep_by(string("true"), chr(','));

        assert_eq!(parser.parse(&mut state).unwrap(), Vec::<String>::new());
        assert_eq!(state.position(), 0);
        assert_eq!(state.open_transactions(), 0);
    }

    #[test]
    fn test_sep_by_with_remaining_content() {
        let mut state = BasicState::from_text("a,b,c rest");
        let parser = sep_by(letter(), chr(','));

        assert_eq!(parser.parse(&mut state).unwrap(), vec!['a', 'b', 'c']);
        assert_eq!(state.remaining()[0], ' ');
    }
}
