//! # Parsimony - Parser Combinator Library
//!
//! A parser combinator library over arbitrary token streams, with explicit
//! transactional backtracking.
//!
//! Parsimony provides composable parsers that can be combined to build complex
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Any token type**: parsers work over a [`State`] of `char`s, bytes or your own lexer tokens
//! - **Explicit backtracking**: input is only given back inside [`attempt`] and the
//!   combinators documented to do so
//! - **Positioned errors**: every failure carries the stream position it was detected at
//! - **Reusable grammars**: parsers are immutable values, build once and apply to many states
//!
//! ```
//! use parsimony::{BasicState, Parser, ThenExt, between, sep_by};
//! use parsimony::text::{chr, int};
//!
//! let list = between(chr('['), sep_by(int(), chr(',')), chr(']'));
//! let mut state = BasicState::from_text("[1,-2,3]");
//! assert_eq!(list.over(parsimony::eof()).parse(&mut state).unwrap(), vec!["1", "-2", "3"]);
//! ```

pub mod atom;
pub mod atomic;
pub mod attempt;
pub mod between;
pub mod bind;
pub mod byte;
pub mod choice;
pub mod error;
pub mod fail_if;
pub mod lazy;
pub mod many;
pub mod map;
pub mod option;
pub mod parser;
pub mod position;
pub mod repeat;
pub mod sep_by;
pub mod skip;
pub mod state;
pub mod text;
pub mod then;
pub mod union;

pub use atom::{eof, eq, fail, ne, none_of, one, one_of, ret, satisfy};
pub use atomic::Atomic;
pub use attempt::{TryExt, attempt};
pub use between::between;
pub use bind::{BindExt, bind};
pub use choice::{Alternatives, OrExt, choice};
pub use error::{ErrorKind, ParseError, ReadablePosition};
pub use fail_if::{FailIfExt, fail_if};
pub use lazy::lazy;
pub use many::{ManyExt, many, many_til, many1, many1_til};
pub use map::{MapExt, map};
pub use option::{OptionExt, maybe, option};
pub use parser::{BoxedExt, BoxedParser, Parser, do_parse};
pub use position::{Span, SpanExt, spanned};
pub use repeat::{at_least, at_most, in_range, repeat, times, up_to};
pub use sep_by::{sep_by, sep_by1};
pub use skip::{SkipExt, skip, skip1};
pub use state::{BasicState, State, Transaction};
pub use then::{ThenExt, over, then};
pub use union::{union, union_all};
