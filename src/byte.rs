//! Byte-level parsers for `BasicState<u8>`

use crate::atom::{Equal, NoneOf, NotEqual, OneOf, Satisfy, eq, ne, none_of, one_of, satisfy};
use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;
use std::borrow::Cow;

/// Parser that matches a specific byte
pub fn byte(expected: u8) -> Equal<u8> {
    eq(expected)
}

/// Parser that matches any byte except the given one
pub fn not_byte(rejected: u8) -> NotEqual<u8> {
    ne(rejected)
}

/// Parser that matches any byte of `options`
pub fn byte_of(options: impl Into<Vec<u8>>) -> OneOf<u8> {
    one_of(options)
}

/// Parser that matches any byte not in `options`
pub fn byte_none(options: impl Into<Vec<u8>>) -> NoneOf<u8> {
    none_of(options)
}

/// Parser that matches a byte satisfying `predicate`
///
/// `name` is used in the mismatch message.
pub fn byte_if<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Satisfy<u8, F>
where
    F: Fn(&u8) -> bool,
{
    satisfy(name, predicate)
}

/// Parser that matches an exact byte sequence
///
/// Bytes matched before a mismatch stay consumed.
pub struct Bytes {
    expected: Vec<u8>,
}

impl Bytes {
    pub fn new(expected: impl Into<Vec<u8>>) -> Self {
        Bytes {
            expected: expected.into(),
        }
    }
}

impl Parser<u8> for Bytes {
    type Output = Vec<u8>;

    fn parse(&self, state: &mut dyn State<Item = u8>) -> Result<Self::Output, ParseError> {
        for &expected in &self.expected {
            eq(expected).parse(state)?;
        }
        Ok(self.expected.clone())
    }
}

/// Convenience function to create a Bytes parser
pub fn bytes(expected: impl Into<Vec<u8>>) -> Bytes {
    Bytes::new(expected)
}
