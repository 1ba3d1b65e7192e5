use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser combinator that tries each parser in order and returns the first success
///
/// Every alternative starts from the same cursor. An empty list never matches.
/// To mix parsers of different types, box them first with
/// [`Parser::boxed`](crate::parser::Parser::boxed).
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parsers
            .iter()
            .find_map(|parser| parser.parse(cursor).ok())
            .ok_or(NoMatch)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::{Literal, literal};
    use crate::map::MapExt;
    use crate::parser::BoxedParser;
    use crate::satisfy::any_char;
    use crate::take::take_while1;

    #[test]
    fn test_choice_first_match() {
        let parser = choice([literal("let"), literal("le"), literal("l")]);

        let (s, cursor) = parser.parse(Cursor::new("left")).unwrap();
        assert_eq!(s, "le");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_choice_none_match() {
        let parser = choice(["if", "else"].map(literal));

        assert_eq!(parser.parse(Cursor::new("while")), Err(NoMatch));
    }

    #[test]
    fn test_choice_empty_never_matches() {
        let parser = choice(Vec::<Literal>::new());

        assert_eq!(parser.parse(Cursor::new("")), Err(NoMatch));
        assert_eq!(parser.parse(Cursor::new("abc")), Err(NoMatch));
    }

    #[test]
    fn test_choice_boxed_heterogeneous() {
        let parsers: Vec<BoxedParser<'_, String>> = vec![
            take_while1(|c: char| c.is_ascii_digit())
                .map(|s: &str| format!("num:{}", s))
                .boxed(),
            any_char().map(|c| format!("char:{}", c)).boxed(),
        ];
        let parser = choice(parsers);

        let (value, _) = parser.parse(Cursor::new("12a")).unwrap();
        assert_eq!(value, "num:12");

        let (value, _) = parser.parse(Cursor::new("a12")).unwrap();
        assert_eq!(value, "char:a");
    }
}
