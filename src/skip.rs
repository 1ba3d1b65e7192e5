use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::many::{ensure_progress, repeat};
use crate::parser::Parser;
use crate::take::{scan_exact, scan_while};

/// Parser that advances past exactly `count` characters
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    count: usize,
}

impl Skip {
    pub fn new(count: usize) -> Self {
        Skip { count }
    }
}

impl<'code> Parser<'code> for Skip {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(((), scan_exact(cursor, self.count)?))
    }
}

/// Parser that advances past the longest prefix satisfying a predicate
///
/// With `at_least_one` set it fails when not even one character matches.
pub struct SkipWhile<F> {
    predicate: F,
    at_least_one: bool,
}

impl<F> SkipWhile<F> {
    pub fn new(predicate: F, at_least_one: bool) -> Self {
        SkipWhile {
            predicate,
            at_least_one,
        }
    }
}

impl<'code, F> Parser<'code> for SkipWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let next = scan_while(cursor, &self.predicate);
        if self.at_least_one && next.position() == cursor.position() {
            return Err(NoMatch);
        }
        Ok(((), next))
    }
}

/// Parser combinator that applies a parser repeatedly and discards the values
///
/// With `at_least_one` set the first application must succeed.
pub struct SkipMany<P> {
    parser: P,
    at_least_one: bool,
}

impl<P> SkipMany<P> {
    pub fn new(parser: P, at_least_one: bool) -> Self {
        SkipMany {
            parser,
            at_least_one,
        }
    }
}

impl<'code, P> Parser<'code> for SkipMany<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (name, start) = if self.at_least_one {
            let (_, next_cursor) = self.parser.parse(cursor)?;
            ensure_progress("skip_many1", cursor, next_cursor)?;
            ("skip_many1", next_cursor)
        } else {
            ("skip_many", cursor)
        };
        let cursor = repeat(name, &self.parser, start, |_| {})?;
        Ok(((), cursor))
    }
}

/// Skip exactly `count` characters; fails if fewer remain
pub fn skip(count: usize) -> Skip {
    Skip::new(count)
}

/// Skip zero or more characters satisfying `predicate`; always succeeds
pub fn skip_while<F>(predicate: F) -> SkipWhile<F>
where
    F: Fn(char) -> bool,
{
    SkipWhile::new(predicate, false)
}

/// Skip one or more characters satisfying `predicate`
pub fn skip_while1<F>(predicate: F) -> SkipWhile<F>
where
    F: Fn(char) -> bool,
{
    SkipWhile::new(predicate, true)
}

/// Apply `parser` zero or more times, discarding the values
pub fn skip_many<'code, P>(parser: P) -> SkipMany<P>
where
    P: Parser<'code>,
{
    SkipMany::new(parser, false)
}

/// Apply `parser` one or more times, discarding the values
pub fn skip_many1<'code, P>(parser: P) -> SkipMany<P>
where
    P: Parser<'code>,
{
    SkipMany::new(parser, true)
}
