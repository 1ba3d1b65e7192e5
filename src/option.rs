use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::or::Or;
use crate::parser::Parser;
use crate::pure::{Pure, pure};

/// Parser combinator that returns the parser's value, or a default without
/// consuming input when the parser fails
pub type WithDefault<P, T> = Or<P, Pure<T>>;

/// Convenience function to create a parser with a fallback value
///
/// Equivalent to `alt(parser, pure(default))`.
pub fn option<'code, P>(default: P::Output, parser: P) -> WithDefault<P, P::Output>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    Or::new(parser, pure(default))
}

/// Parser combinator that makes a parser optional
///
/// Yields `Some` with the value if the parser succeeded and `None` (consuming
/// nothing) if it failed. It never fabricates a value and never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
