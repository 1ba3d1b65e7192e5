use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// This parses `before + middle + after` and returns just the `middle` value
/// with the delimiters discarded. It does not handle whitespace; wrap the
/// delimiters with [`skip_while`](crate::skip::skip_while) for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(42)"` → `"42"`
pub struct Between<P1, P2, P3> {
    before: P1,
    after: P2,
    middle: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(before: P1, after: P2, middle: P3) -> Self {
        Between {
            before,
            after,
            middle,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P3::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.before.parse(cursor)?;
        let (value, cursor) = self.middle.parse(cursor)?;
        let (_, cursor) = self.after.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Creates a parser that matches `middle` between `before` and `after`
///
/// ```
/// use strcomb::between::between;
/// use strcomb::literal::literal;
/// use strcomb::take::take_while;
/// use strcomb::run::run;
///
/// let parens = between(literal("("), literal(")"), take_while(|c| c.is_ascii_digit()));
/// assert_eq!(run(&parens, "(42)"), Ok("42"));
/// assert!(run(&parens, "(42").is_err());
/// ```
pub fn between<'code, P1, P2, P3>(before: P1, after: P2, middle: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(before, after, middle)
}
