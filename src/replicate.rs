use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that applies a parser exactly `count` times
///
/// Fails if any application fails; a partial run is never returned.
pub struct Replicate<P> {
    count: usize,
    parser: P,
}

impl<P> Replicate<P> {
    pub fn new(count: usize, parser: P) -> Self {
        Replicate { count, parser }
    }
}

impl<'code, P> Parser<'code> for Replicate<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let (value, next_cursor) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Replicate parser
pub fn replicate<'code, P>(count: usize, parser: P) -> Replicate<P>
where
    P: Parser<'code>,
{
    Replicate::new(count, parser)
}
