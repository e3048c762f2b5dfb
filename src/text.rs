//! Character-level parsers for `BasicState<char>`
//!
//! Numeric parsers return the matched text rather than a converted value, so
//! callers choose the numeric type and its overflow handling.

use crate::atom::{Equal, NoneOf, NotEqual, OneOf, Satisfy, eq, ne, none_of, one_of, satisfy};
use crate::attempt::attempt;
use crate::bind::BindExt;
use crate::choice::choice;
use crate::error::ParseError;
use crate::many::many1;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::state::State;
use crate::then::ThenExt;
use std::borrow::Cow;

/// A single-character parser driven by a plain predicate
pub type CharClass = Satisfy<char, fn(&char) -> bool>;

/// Parser that matches the given character
pub fn chr(expected: char) -> Equal<char> {
    eq(expected)
}

/// Parser that matches any character except the given one
pub fn not_chr(rejected: char) -> NotEqual<char> {
    ne(rejected)
}

/// Parser that matches any character of `options`
pub fn chr_of(options: &str) -> OneOf<char> {
    one_of(options.chars().collect::<Vec<_>>())
}

/// Parser that matches any character not in `options`
pub fn chr_none(options: &str) -> NoneOf<char> {
    none_of(options.chars().collect::<Vec<_>>())
}

/// Parser that matches a character satisfying `predicate`
///
/// `name` is used in the mismatch message: `expect {name} but 'x'`.
pub fn chr_if<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Satisfy<char, F>
where
    F: Fn(&char) -> bool,
{
    satisfy(name, predicate)
}

/// Parser that matches one whitespace character
pub fn space() -> CharClass {
    satisfy::<char, fn(&char) -> bool>("space", |c| c.is_whitespace())
}

/// Parser that matches one alphabetic character
pub fn letter() -> CharClass {
    satisfy::<char, fn(&char) -> bool>("letter", |c| c.is_alphabetic())
}

/// Parser that matches one numeric character, in the broad Unicode sense
pub fn number() -> CharClass {
    satisfy::<char, fn(&char) -> bool>("number", |c| c.is_numeric())
}

/// Parser that matches one ASCII decimal digit
pub fn digit() -> CharClass {
    satisfy::<char, fn(&char) -> bool>("digit", |c| c.is_ascii_digit())
}

/// Parser that matches an exact string character by character
///
/// Characters matched before a mismatch stay consumed. Wrap it in
/// [`attempt`] to give them back.
pub struct Str {
    expected: Cow<'static, str>,
}

impl Str {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser<char> for Str {
    type Output = String;

    fn parse(&self, state: &mut dyn State<Item = char>) -> Result<Self::Output, ParseError> {
        for expected in self.expected.chars() {
            eq(expected).parse(state)?;
        }
        Ok(self.expected.to_string())
    }
}

/// Convenience function to create a Str parser
pub fn string(expected: impl Into<Cow<'static, str>>) -> Str {
    Str::new(expected)
}

/// Parser that matches one or more digits and returns them as written
pub fn uint() -> impl Parser<char, Output = String> {
    many1(digit()).map(|digits| digits.into_iter().collect::<String>())
}

/// Parser that matches an optionally negative integer
///
/// A lone `-` is not consumed.
pub fn int() -> impl Parser<char, Output = String> {
    choice((
        attempt(chr('-').then(uint())).map(|digits| format!("-{}", digits)),
        uint(),
    ))
}

/// Parser that matches `digits.digits`
pub fn ufloat() -> impl Parser<char, Output = String> {
    uint()
        .over(chr('.'))
        .bind(|whole| uint().map(move |fraction| format!("{}.{}", whole, fraction)))
}

/// Parser that matches an optionally negative `digits.digits`
pub fn float() -> impl Parser<char, Output = String> {
    choice((
        attempt(chr('-').then(ufloat())).map(|value| format!("-{}", value)),
        ufloat(),
    ))
}
