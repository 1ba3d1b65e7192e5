use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string prefix
///
/// The match is all-or-nothing: on a mismatch or short input nothing is
/// consumed. The output is the matched slice of the input.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let expected = self.expected.as_ref();
        if !cursor.rest().starts_with(expected) {
            return Err(NoMatch);
        }
        let next = cursor.advance(expected.len());
        Ok((cursor.slice_to(&next), next))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
