use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser that returns the next character without consuming it
#[derive(Debug, Clone, Copy, Default)]
pub struct Peek;

impl<'code> Parser<'code> for Peek {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((cursor.value()?, cursor))
    }
}

/// Parser that returns all remaining input without consuming it
#[derive(Debug, Clone, Copy, Default)]
pub struct PeekRest;

impl<'code> Parser<'code> for PeekRest {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((cursor.rest(), cursor))
    }
}

/// Parser that consumes and returns all remaining input
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumeRest;

impl<'code> Parser<'code> for ConsumeRest {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        Ok((rest, cursor.advance(rest.len())))
    }
}

/// Parser that consumes and discards all remaining input
#[derive(Debug, Clone, Copy, Default)]
pub struct DropRest;

impl<'code> Parser<'code> for DropRest {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(((), cursor.advance(cursor.remaining())))
    }
}

/// Convenience function to create a Peek parser
pub fn peek() -> Peek {
    Peek
}

/// Convenience function to create a PeekRest parser
pub fn peek_rest() -> PeekRest {
    PeekRest
}

/// Convenience function to create a ConsumeRest parser
pub fn consume_rest() -> ConsumeRest {
    ConsumeRest
}

/// Convenience function to create a DropRest parser
pub fn drop_rest() -> DropRest {
    DropRest
}
