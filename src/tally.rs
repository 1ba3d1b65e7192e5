use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;
use tracing::warn;

/// A parser combinator that pairs a result with the number of characters
/// the wrapped parser consumed
///
/// The count is in `char`s, so multi-byte characters count once.
pub struct Tally<P> {
    parser: P,
}

impl<P> Tally<P> {
    pub fn new(parser: P) -> Self {
        Tally { parser }
    }
}

impl<'code, P> Parser<'code> for Tally<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, usize);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let Some(span) = cursor.checked_slice_to(&new_cursor) else {
            warn!(
                before = cursor.position(),
                after = new_cursor.position(),
                "tallied parser returned a cursor that does not follow its input"
            );
            return Err(NoMatch);
        };
        let consumed = span.chars().count();
        Ok(((output, consumed), new_cursor))
    }
}

/// Extension trait to add consumption counting to any parser
pub trait TallyExt<'code>: Parser<'code> + Sized {
    fn tally(self) -> Tally<Self> {
        Tally::new(self)
    }
}

impl<'code, P> TallyExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Tally combinator
pub fn tally<P>(parser: P) -> Tally<P> {
    Tally::new(parser)
}
