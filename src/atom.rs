//! Atomic matchers that work on any item type
//!
//! Every matcher that inspects an item reads it with [`State::next`]. When the
//! item is rejected the cursor is moved back onto it, so the mismatch is
//! reported at the offending item and the matcher consumes nothing on failure.

use crate::atomic::Atomic;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::state::State;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Read one item and keep it only if `accept` holds
fn next_matching<T, F, M>(
    state: &mut dyn State<Item = T>,
    accept: F,
    describe: M,
) -> Result<T, ParseError>
where
    F: FnOnce(&T) -> bool,
    M: FnOnce(&T) -> String,
{
    let start = state.position();
    let item = state.next()?;
    if accept(&item) {
        return Ok(item);
    }
    state.seek_to(start);
    Err(state.mismatch(format_args!("{}", describe(&item))))
}

/// Parser that consumes and returns the next item, whatever it is
pub struct One;

impl<T> Parser<T> for One {
    type Output = T;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        state.next()
    }
}

/// Convenience function to create a One parser
pub fn one() -> One {
    One
}

/// Parser that matches an item equal to the expected one
pub struct Equal<T> {
    expected: T,
}

impl<T: Atomic> Parser<T> for Equal<T> {
    type Output = T;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        next_matching(
            state,
            |item| *item == self.expected,
            |item| format!("expect {:?} but {:?}", self.expected, item),
        )
    }
}

pub fn eq<T: Atomic>(expected: T) -> Equal<T> {
    Equal { expected }
}

/// Parser that matches any item except the given one
pub struct NotEqual<T> {
    rejected: T,
}

impl<T: Atomic> Parser<T> for NotEqual<T> {
    type Output = T;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        next_matching(
            state,
            |item| *item != self.rejected,
            |item| format!("expect not {:?} but {:?}", self.rejected, item),
        )
    }
}

pub fn ne<T: Atomic>(rejected: T) -> NotEqual<T> {
    NotEqual { rejected }
}

/// Parser that matches an item belonging to a set
pub struct OneOf<T> {
    options: Vec<T>,
}

impl<T: Atomic> Parser<T> for OneOf<T> {
    type Output = T;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        next_matching(
            state,
            |item| self.options.contains(item),
            |item| format!("expect one of {:?} but {:?}", self.options, item),
        )
    }
}

pub fn one_of<T: Atomic>(options: impl Into<Vec<T>>) -> OneOf<T> {
    OneOf {
        options: options.into(),
    }
}

/// Parser that matches an item outside a set
pub struct NoneOf<T> {
    options: Vec<T>,
}

impl<T: Atomic> Parser<T> for NoneOf<T> {
    type Output = T;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        next_matching(
            state,
            |item| !self.options.contains(item),
            |item| format!("expect none of {:?} but {:?}", self.options, item),
        )
    }
}

pub fn none_of<T: Atomic>(options: impl Into<Vec<T>>) -> NoneOf<T> {
    NoneOf {
        options: options.into(),
    }
}

/// Parser that matches an item satisfying a predicate
///
/// `description` names what was expected and shows up in the mismatch message.
pub struct Satisfy<T, F> {
    description: Cow<'static, str>,
    predicate: F,
    _item: PhantomData<fn(&T)>,
}

impl<T, F> Parser<T> for Satisfy<T, F>
where
    T: Atomic,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        next_matching(
            state,
            |item| (self.predicate)(item),
            |item| format!("expect {} but {:?}", self.description, item),
        )
    }
}

pub fn satisfy<T, F>(description: impl Into<Cow<'static, str>>, predicate: F) -> Satisfy<T, F>
where
    T: Atomic,
    F: Fn(&T) -> bool,
{
    Satisfy {
        description: description.into(),
        predicate,
        _item: PhantomData,
    }
}

/// Parser that always succeeds with a clone of the given value, consuming nothing
pub struct Return<V> {
    value: V,
}

impl<T, V: Clone> Parser<T> for Return<V> {
    type Output = V;

    fn parse(&self, _state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        Ok(self.value.clone())
    }
}

pub fn ret<V: Clone>(value: V) -> Return<V> {
    Return { value }
}

/// Parser that always fails with the given message, consuming nothing
pub struct Fail<O> {
    message: String,
    _output: PhantomData<fn() -> O>,
}

impl<T, O> Parser<T> for Fail<O> {
    type Output = O;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        Err(state.trap(format_args!("{}", self.message)))
    }
}

pub fn fail<O>(message: impl Into<String>) -> Fail<O> {
    Fail {
        message: message.into(),
        _output: PhantomData,
    }
}

/// Parser that succeeds only at the end of the stream
pub struct Eof;

impl<T: fmt::Debug> Parser<T> for Eof {
    type Output = ();

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let start = state.position();
        match state.next() {
            Ok(item) => {
                state.seek_to(start);
                Err(state.mismatch(format_args!("expect eof but {:?}", item)))
            }
            Err(e) if e.kind() == ErrorKind::Eof => Ok(()),
            Err(e) => Err(e),
        }
    }
}

pub fn eof() -> Eof {
    Eof
}
