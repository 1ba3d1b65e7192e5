use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct NotFollowedBy<P> {
    parser: P,
}

impl<P> NotFollowedBy<P> {
    pub fn new(parser: P) -> Self {
        NotFollowedBy { parser }
    }
}

impl<'code, P> Parser<'code> for NotFollowedBy<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(NoMatch),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a NotFollowedBy parser for negative lookahead
pub fn not_followed_by<'code, P>(parser: P) -> NotFollowedBy<P>
where
    P: Parser<'code>,
{
    NotFollowedBy::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::many::many;
    use crate::satisfy::{any_char, satisfy};
    use crate::sequence::SequenceExt;

    #[test]
    fn test_not_fails_on_match() {
        let parser = not_followed_by(literal("hello"));

        assert_eq!(parser.parse(Cursor::new("hello")), Err(NoMatch));
    }

    #[test]
    fn test_not_succeeds_on_no_match() {
        let parser = not_followed_by(literal("hello"));

        let ((), cursor) = parser.parse(Cursor::new("world")).unwrap();
        // Cursor should not have moved
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_not_empty_input() {
        let parser = not_followed_by(any_char());

        let ((), cursor) = parser.parse(Cursor::new("")).unwrap();
        assert!(cursor.eos());
    }

    #[test]
    fn test_not_for_parsing_until_delimiter() {
        let parser = many(not_followed_by(literal("]]")).skip_then(any_char()));

        let (chars, remaining) = parser.parse(Cursor::new("hello]]world")).unwrap();
        assert_eq!(chars.into_iter().collect::<String>(), "hello");
        assert_eq!(remaining.rest(), "]]world");
    }

    #[test]
    fn test_keyword_boundary() {
        let keyword = literal("let").then_skip(not_followed_by(satisfy(|c: char| {
            c.is_alphanumeric()
        })));

        assert!(keyword.parse(Cursor::new("let x")).is_ok());
        assert!(keyword.parse(Cursor::new("let")).is_ok());
        assert_eq!(keyword.parse(Cursor::new("letter")), Err(NoMatch));
    }
}
