use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that chooses the next parser from the value of the first
///
/// Runs `parser`, hands its value to `binder` to obtain a second parser, and
/// runs that from the residual cursor. If `parser` fails, `binder` is never
/// called.
///
/// ```
/// use strcomb::bind::BindExt;
/// use strcomb::satisfy::any_char;
/// use strcomb::take::take_exact;
/// use strcomb::run::run;
///
/// // A length-prefixed field: one digit, then that many characters
/// let field = any_char().bind(|n| take_exact(n.to_digit(10).unwrap_or(0) as usize));
/// assert_eq!(run(&field, "3abcd"), Ok("abc"));
/// assert!(run(&field, "3ab").is_err());
/// ```
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, P2> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, P2>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, P2>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'code>,
    {
        Bind::new(self, binder)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
