use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::many::ensure_progress;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses one item followed by zero or more `separator item` pairs and
/// returns all items. A separator that is not followed by an item is left
/// unconsumed. With `allow_empty` set, zero items is also a success.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1,2,"` with separator `,` → `vec!["1", "2"]`, remaining `","`
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    allow_empty: bool,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS, allow_empty: bool) -> Self {
        SeparatedList {
            parser,
            separator,
            allow_empty,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut cursor) = match self.parser.parse(cursor) {
            Ok(result) => result,
            Err(_) if self.allow_empty => return Ok((Vec::new(), cursor)),
            Err(e) => return Err(e),
        };

        let mut results = vec![first];
        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((item, next_cursor)) = self.parser.parse(after_separator) else {
                break;
            };
            ensure_progress("separated_list", cursor, next_cursor)?;
            results.push(item);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Zero or more `parser` items separated by `separator`
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator, true)
}

/// One or more `parser` items separated by `separator`
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoMatch;
    use crate::literal::literal;
    use crate::take::{take_while, take_while1};

    fn word<'code>() -> impl Parser<'code, Output = &'code str> {
        take_while1(|c: char| c.is_alphanumeric())
    }

    #[test]
    fn test_sep_by1_list() {
        let parser = sep_by1(word(), literal(","));

        let (items, cursor) = parser.parse(Cursor::new("a,b,c")).unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_single_element() {
        let (items, _) = sep_by1(word(), literal(",")).parse(Cursor::new("only")).unwrap();
        assert_eq!(items, vec!["only"]);
    }

    #[test]
    fn test_trailing_separator_left_unconsumed() {
        let (items, cursor) = sep_by1(word(), literal(",")).parse(Cursor::new("1,2,")).unwrap();
        assert_eq!(items, vec!["1", "2"]);
        assert_eq!(cursor.rest(), ",");
    }

    #[test]
    fn test_sep_by1_empty_fails() {
        assert_eq!(sep_by1(word(), literal(",")).parse(Cursor::new("")), Err(NoMatch));
    }

    #[test]
    fn test_sep_by_empty_succeeds() {
        let (items, cursor) = sep_by(word(), literal(",")).parse(Cursor::new(";")).unwrap();
        assert!(items.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_zero_width_items_fail_fast() {
        let parser = sep_by(take_while(|c: char| c.is_ascii_digit()), take_while(|c: char| c == ','));

        assert_eq!(parser.parse(Cursor::new("x")), Err(NoMatch));
    }
}
