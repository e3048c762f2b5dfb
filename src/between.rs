use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::State;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, `content`, `close` in order and returns just the `content`
/// value with the delimiters discarded. Whitespace is not handled.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"{data}"` → `"data"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<T, P1, P2, P3> Parser<T> for Between<P1, P2, P3>
where
    P1: Parser<T>,
    P2: Parser<T>,
    P3: Parser<T>,
{
    type Output = P2::Output;

    fn parse(&self, state: &mut dyn State<Item = T>) -> Result<Self::Output, ParseError> {
        self.open.parse(state)?;
        let value = self.content.parse(state)?;
        self.close.parse(state)?;
        Ok(value)
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<T, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<T>,
    P2: Parser<T>,
    P3: Parser<T>,
{
    Between::new(open, content, close)
}
