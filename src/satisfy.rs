use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser that consumes one character if it satisfies a predicate
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let c = cursor.value()?;
        if (self.predicate)(c) {
            Ok((c, cursor.next()))
        } else {
            Err(NoMatch)
        }
    }
}

/// Parser that consumes one character satisfying a predicate and maps it
pub struct SatisfyWith<M, F> {
    mapper: M,
    predicate: F,
}

impl<M, F> SatisfyWith<M, F> {
    pub fn new(mapper: M, predicate: F) -> Self {
        SatisfyWith { mapper, predicate }
    }
}

impl<'code, M, F, U> Parser<'code> for SatisfyWith<M, F>
where
    M: Fn(char) -> U,
    F: Fn(char) -> bool,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let c = cursor.value()?;
        if (self.predicate)(c) {
            Ok(((self.mapper)(c), cursor.next()))
        } else {
            Err(NoMatch)
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Convenience function to create a SatisfyWith parser
///
/// The predicate is tested on the raw character; the mapper only sees
/// characters that passed.
pub fn satisfy_with<M, F, U>(mapper: M, predicate: F) -> SatisfyWith<M, F>
where
    M: Fn(char) -> U,
    F: Fn(char) -> bool,
{
    SatisfyWith::new(mapper, predicate)
}

/// Parser that consumes any single character
pub fn any_char() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|_| true)
}

/// Parser that consumes any single character except `excluded`
pub fn any_char_but(excluded: char) -> Satisfy<impl Fn(char) -> bool> {
    satisfy(move |c| c != excluded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfy_success() {
        let parser = satisfy(|c: char| c.is_ascii_digit());

        let (c, cursor) = parser.parse(Cursor::new("5abc")).unwrap();
        assert_eq!(c, '5');
        assert_eq!(cursor.value().unwrap(), 'a');
    }

    #[test]
    fn test_satisfy_failure_consumes_nothing() {
        let parser = satisfy(|c: char| c.is_ascii_digit());

        assert_eq!(parser.parse(Cursor::new("abc")), Err(NoMatch));
    }

    #[test]
    fn test_satisfy_at_end() {
        let parser = satisfy(|_| true);

        assert_eq!(parser.parse(Cursor::new("")), Err(NoMatch));
    }

    #[test]
    fn test_satisfy_with_maps() {
        let parser = satisfy_with(|c| c.to_digit(16).unwrap_or(0), |c| c.is_ascii_hexdigit());

        let (n, cursor) = parser.parse(Cursor::new("fz")).unwrap();
        assert_eq!(n, 15);
        assert_eq!(cursor.position(), 1);

        assert_eq!(parser.parse(Cursor::new("z")), Err(NoMatch));
    }

    #[test]
    fn test_any_char_sequence() {
        let parser = any_char();

        let (c1, cursor) = parser.parse(Cursor::new("añ")).unwrap();
        let (c2, cursor) = parser.parse(cursor).unwrap();
        assert_eq!((c1, c2), ('a', 'ñ'));
        assert!(cursor.eos());
        assert_eq!(parser.parse(cursor), Err(NoMatch));
    }

    #[test]
    fn test_any_char_but() {
        let parser = any_char_but('"');

        let (c, _) = parser.parse(Cursor::new("a\"")).unwrap();
        assert_eq!(c, 'a');
        assert_eq!(parser.parse(Cursor::new("\"a")), Err(NoMatch));
        assert_eq!(parser.parse(Cursor::new("")), Err(NoMatch));
    }
}
