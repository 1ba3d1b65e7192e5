use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;
use tracing::warn;

/// Reject an iteration that succeeded without moving the cursor
///
/// Repeating such a parser would never terminate, so the repetition fails
/// instead.
pub(crate) fn ensure_progress(
    combinator: &'static str,
    before: Cursor<'_>,
    after: Cursor<'_>,
) -> Result<(), NoMatch> {
    if after.position() == before.position() {
        warn!(
            combinator,
            offset = before.position(),
            "repeated parser succeeded without consuming input"
        );
        return Err(NoMatch);
    }
    Ok(())
}

/// Apply `parser` until it fails, handing each value to `sink`
///
/// Returns the cursor after the last successful application.
pub(crate) fn repeat<'code, P, S>(
    combinator: &'static str,
    parser: &P,
    mut cursor: Cursor<'code>,
    mut sink: S,
) -> Result<Cursor<'code>, NoMatch>
where
    P: Parser<'code> + ?Sized,
    S: FnMut(P::Output),
{
    loop {
        match parser.parse(cursor) {
            Ok((value, next_cursor)) => {
                ensure_progress(combinator, cursor, next_cursor)?;
                sink(value);
                cursor = next_cursor;
            }
            Err(_) => return Ok(cursor),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// The wrapped parser must consume input whenever it succeeds; if it ever
/// succeeds without consuming, `Many` fails rather than loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat("many", &self.parser, cursor, |value| results.push(value))?;
        Ok((results, cursor))
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (first_value, next_cursor) = self.parser.parse(cursor)?;
        ensure_progress("many1", cursor, next_cursor)?;

        let mut results = vec![first_value];
        let cursor = repeat("many1", &self.parser, next_cursor, |value| results.push(value))?;
        Ok((results, cursor))
    }
}

/// Parser combinator that applies a parser until a terminator matches
///
/// Before each item the terminator is tried; once it succeeds the loop ends
/// and the terminator's input is consumed (its value is discarded). If the
/// item parser fails first, the whole parse fails.
pub struct ManyTill<P, E> {
    parser: P,
    end: E,
}

impl<P, E> ManyTill<P, E> {
    pub fn new(parser: P, end: E) -> Self {
        ManyTill { parser, end }
    }
}

impl<'code, P, E> Parser<'code> for ManyTill<P, E>
where
    P: Parser<'code>,
    E: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            if let Ok((_, after_end)) = self.end.parse(cursor) {
                return Ok((results, after_end));
            }

            let (value, next_cursor) = self.parser.parse(cursor)?;
            ensure_progress("many_till", cursor, next_cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Convenience function to create a ManyTill parser
///
/// ```
/// use strcomb::literal::literal;
/// use strcomb::many::many_till;
/// use strcomb::satisfy::any_char;
/// use strcomb::sequence::SequenceExt;
/// use strcomb::run::run;
///
/// let comment = literal("/*").skip_then(many_till(any_char(), literal("*/")));
/// let body: String = run(&comment, "/* note */ rest").unwrap().into_iter().collect();
/// assert_eq!(body, " note ");
/// ```
pub fn many_till<'code, P, E>(parser: P, end: E) -> ManyTill<P, E>
where
    P: Parser<'code>,
    E: Parser<'code>,
{
    ManyTill::new(parser, end)
}
