use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the cursor the first one was given.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn alt<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoMatch;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::sequence::SequenceExt;

    #[test]
    fn test_or_first_succeeds() {
        let parser = alt(literal("a"), literal("b"));

        let (s, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(s, "a");
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = alt(literal("a"), literal("b"));

        let (s, cursor) = parser.parse(Cursor::new("bcd")).unwrap();
        assert_eq!(s, "b");
        assert_eq!(cursor.value().unwrap(), 'c');
    }

    #[test]
    fn test_or_both_fail() {
        let parser = alt(literal("a"), literal("b"));

        assert_eq!(parser.parse(Cursor::new("xyz")), Err(NoMatch));
    }

    #[test]
    fn test_or_second_sees_original_cursor() {
        // The first branch consumes "ab" before failing on "x"
        let first = literal("ab").skip_then(literal("x")).map(|_| "first");
        let second = literal("abc").map(|_| "second");
        let parser = first.or(second);

        let (which, cursor) = parser.parse(Cursor::new("abcd")).unwrap();
        assert_eq!(which, "second");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_or_first_match_wins() {
        // No longest-match resolution across branches
        let parser = literal("a").or(literal("ab"));

        let (s, cursor) = parser.parse(Cursor::new("ab")).unwrap();
        assert_eq!(s, "a");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = literal("a").or(literal("b")).or(literal("c"));

        let (s, cursor) = parser.parse(Cursor::new("c")).unwrap();
        assert_eq!(s, "c");
        assert!(cursor.eos());
    }
}
