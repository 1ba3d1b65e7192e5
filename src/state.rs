use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Zero-width parser that returns the current cursor as its value
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentState;

impl<'code> Parser<'code> for CurrentState {
    type Output = Cursor<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((cursor, cursor))
    }
}

/// Convenience function to create a CurrentState parser
pub fn current_state() -> CurrentState {
    CurrentState
}
