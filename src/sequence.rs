use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The nesting
/// follows the parsing order.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Sequence two parsers, keeping only the second value
pub struct SkipThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SkipThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SkipThen { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for SkipThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Sequence two parsers, keeping only the first value
pub struct ThenSkip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> ThenSkip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenSkip { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for ThenSkip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Convenience function to create a SkipThen parser
pub fn skip_then<'code, P1, P2>(parser1: P1, parser2: P2) -> SkipThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    SkipThen::new(parser1, parser2)
}

/// Convenience function to create a ThenSkip parser
pub fn then_skip<'code, P1, P2>(parser1: P1, parser2: P2) -> ThenSkip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    ThenSkip::new(parser1, parser2)
}

/// Extension trait to add sequencing methods to parsers
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }

    fn skip_then<P>(self, other: P) -> SkipThen<Self, P>
    where
        P: Parser<'code>,
    {
        SkipThen::new(self, other)
    }

    fn then_skip<P>(self, other: P) -> ThenSkip<Self, P>
    where
        P: Parser<'code>,
    {
        ThenSkip::new(self, other)
    }
}

impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}
