//! Counted repetition
//!
//! `times` is strict and never backtracks. `up_to` and `at_most` attempt each
//! repetition and stop quietly. The bounded forms are built from those two.

use crate::attempt::Try;
use crate::error::ParseError;
use crate::fail_if::FailIf;
use crate::many::collect_while;
use crate::parser::Parser;
use crate::state::State;

fn check_bounds(min: usize, max: usize) {
    if min >= max {
        panic!("x must be less than y but x={} and y={}", min, max);
    }
}

fn read_exactly<T, P>(
    parser: &P,
    count: usize,
    state: &mut dyn State<Item = T>,
    results: &mut Vec<P::Output>,
) -> Result<(), ParseError>
where
    P: Parser<T>,
{
    for _ in 0..count {
        results.push(parser.parse(state)?);
    }
    Ok(())
}

fn read_up_to<T, P>(
    parser: &P,
    count: usize,
    state: &mut dyn State<Item = T>,
    results: &mut Vec<P::Output>,
) -> usize
where
    P: Parser<T>,
{
    let parser = Try::new(parser);
    let mut read = 0;
    while read < count {
        match parser.parse(state) {
            Ok(value) => results.push(value),
            Err(_) => break,
        }
        read += 1;
    }
    read
}

fn read_at_most<T, P>(
    parser: &P,
    count: usize,
    state: &mut dyn State<Item = T>,
    results: &mut Vec<P::Output>,
) -> Result<(), ParseError>
where
    P: Parser<T>,
{
    if read_up_to(parser, count, state, results) == count {
        FailIf::new(parser).parse(state).map_err(|_| {
            state.trap(format_args!(
                "expect at most {} repetitions but found more",
                count
            ))
        })?;
    }
    Ok(())
}

/// Parser combinator that matches exactly `count` occurrences
///
/// The first failure is returned as is. Nothing is rolled back, so the cursor
/// stays where that failure left it.
pub struct Times<P> {
    count: usize,
    parser: P,
}

impl<P> Times<P> {
    pub fn new(count: usize, parser: P) -> Self {
        Times { count, parser }
    }
}

impl<T, P> Parser<T> for Times<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::with_capacity(self.count);
        read_exactly(&self.parser, self.count, state, &mut results)?;
        Ok(results)
    }
}

pub fn times<T, P>(count: usize, parser: P) -> Times<P>
where
    P: Parser<T>,
{
    Times::new(count, parser)
}

/// Parser combinator that matches between zero and `count` occurrences
pub struct UpTo<P> {
    count: usize,
    parser: P,
}

impl<P> UpTo<P> {
    pub fn new(count: usize, parser: P) -> Self {
        UpTo { count, parser }
    }
}

impl<T, P> Parser<T> for UpTo<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::new();
        read_up_to(&self.parser, self.count, state, &mut results);
        Ok(results)
    }
}

pub fn up_to<T, P>(count: usize, parser: P) -> UpTo<P>
where
    P: Parser<T>,
{
    UpTo::new(count, parser)
}

/// Like [`UpTo`], but a further occurrence after `count` is an error
///
/// The extra occurrence is only looked at, never consumed.
pub struct AtMost<P> {
    count: usize,
    parser: P,
}

impl<P> AtMost<P> {
    pub fn new(count: usize, parser: P) -> Self {
        AtMost { count, parser }
    }
}

impl<T, P> Parser<T> for AtMost<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::new();
        read_at_most(&self.parser, self.count, state, &mut results)?;
        Ok(results)
    }
}

pub fn at_most<T, P>(count: usize, parser: P) -> AtMost<P>
where
    P: Parser<T>,
{
    AtMost::new(count, parser)
}

/// Parser combinator that matches `count` occurrences or more
pub struct AtLeast<P> {
    count: usize,
    parser: P,
}

impl<P> AtLeast<P> {
    pub fn new(count: usize, parser: P) -> Self {
        AtLeast { count, parser }
    }
}

impl<T, P> Parser<T> for AtLeast<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::with_capacity(self.count);
        read_exactly(&self.parser, self.count, state, &mut results)?;
        Ok(collect_while(&self.parser, state, results))
    }
}

pub fn at_least<T, P>(count: usize, parser: P) -> AtLeast<P>
where
    P: Parser<T>,
{
    AtLeast::new(count, parser)
}

/// Parser combinator that matches `min` occurrences, then up to `max - min` more
///
/// Occurrences past `max` are left in the stream.
pub struct Repeat<P> {
    min: usize,
    max: usize,
    parser: P,
}

impl<P> Repeat<P> {
    /// # Panics
    ///
    /// Panics when `min >= max`.
    pub fn new(min: usize, max: usize, parser: P) -> Self {
        check_bounds(min, max);
        Repeat { min, max, parser }
    }
}

impl<T, P> Parser<T> for Repeat<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::with_capacity(self.min);
        read_exactly(&self.parser, self.min, state, &mut results)?;
        read_up_to(&self.parser, self.max - self.min, state, &mut results);
        Ok(results)
    }
}

pub fn repeat<T, P>(min: usize, max: usize, parser: P) -> Repeat<P>
where
    P: Parser<T>,
{
    Repeat::new(min, max, parser)
}

/// Parser combinator that matches between `min` and `max` occurrences
///
/// Unlike [`Repeat`], a further occurrence after `max` is an error.
pub struct InRange<P> {
    min: usize,
    max: usize,
    parser: P,
}

impl<P> InRange<P> {
    /// # Panics
    ///
    /// Panics when `min >= max`.
    pub fn new(min: usize, max: usize, parser: P) -> Self {
        check_bounds(min, max);
        InRange { min, max, parser }
    }
}

impl<T, P> Parser<T> for InRange<P>
where
    P: Parser<T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::with_capacity(self.min);
        read_exactly(&self.parser, self.min, state, &mut results)?;
        read_at_most(&self.parser, self.max - self.min, state, &mut results)?;
        Ok(results)
    }
}

pub fn in_range<T, P>(min: usize, max: usize, parser: P) -> InRange<P>
where
    P: Parser<T>,
{
    InRange::new(min, max, parser)
}
