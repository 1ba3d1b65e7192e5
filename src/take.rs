use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Advance over exactly `count` characters, failing if fewer remain
pub(crate) fn scan_exact(cursor: Cursor<'_>, count: usize) -> Result<Cursor<'_>, NoMatch> {
    if count == 0 {
        return Ok(cursor);
    }
    let bytes = match cursor.rest().char_indices().nth(count - 1) {
        Some((start, last)) => start + last.len_utf8(),
        None => return Err(NoMatch),
    };
    Ok(cursor.advance(bytes))
}

/// Advance over the longest prefix whose characters satisfy `predicate`
pub(crate) fn scan_while<'code, F>(cursor: Cursor<'code>, predicate: &F) -> Cursor<'code>
where
    F: Fn(char) -> bool,
{
    let rest = cursor.rest();
    let bytes = rest
        .char_indices()
        .find(|&(_, c)| !predicate(c))
        .map_or(rest.len(), |(index, _)| index);
    cursor.advance(bytes)
}

/// Parser that consumes exactly `count` characters and returns them
#[derive(Debug, Clone, Copy)]
pub struct TakeExact {
    count: usize,
}

impl TakeExact {
    pub fn new(count: usize) -> Self {
        TakeExact { count }
    }
}

impl<'code> Parser<'code> for TakeExact {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let next = scan_exact(cursor, self.count)?;
        Ok((cursor.slice_to(&next), next))
    }
}

/// Parser that consumes the longest (possibly empty) prefix satisfying a predicate
pub struct TakeWhile<F> {
    predicate: F,
}

impl<F> TakeWhile<F> {
    pub fn new(predicate: F) -> Self {
        TakeWhile { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let next = scan_while(cursor, &self.predicate);
        Ok((cursor.slice_to(&next), next))
    }
}

/// Parser that consumes the longest non-empty prefix satisfying a predicate
pub struct TakeWhile1<F> {
    predicate: F,
}

impl<F> TakeWhile1<F> {
    pub fn new(predicate: F) -> Self {
        TakeWhile1 { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeWhile1<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let next = scan_while(cursor, &self.predicate);
        if next.position() == cursor.position() {
            return Err(NoMatch);
        }
        Ok((cursor.slice_to(&next), next))
    }
}

/// Convenience function to create a TakeExact parser
pub fn take_exact(count: usize) -> TakeExact {
    TakeExact::new(count)
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate)
}

/// Convenience function to create a TakeWhile1 parser
pub fn take_while1<F>(predicate: F) -> TakeWhile1<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile1::new(predicate)
}
