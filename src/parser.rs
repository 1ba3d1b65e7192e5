use crate::cursor::Cursor;
use crate::error::ParseResult;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures never consume input.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Erase the concrete type of this parser
    ///
    /// The box stays `Send + Sync`, so a boxed grammar can still be shared
    /// between threads.
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Sized + Send + Sync + 'code,
    {
        Box::new(self)
    }
}

/// A type-erased parser, for storing parsers of different types together
/// or returning one from a recursive function
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + Send + Sync + 'code>;

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Parser backed by a plain function or closure
pub struct FnParser<F> {
    f: F,
}

impl<'code, F, O> Parser<'code> for FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.f)(cursor)
    }
}

/// Lift a function from cursor to result into a parser
///
/// On success the function must return a cursor over the same source, at or
/// after the one it was given. Combinators that measure consumption, such as
/// `tally`, fail with `NoMatch` when handed any other cursor.
pub fn from_fn<'code, F, O>(f: F) -> FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    FnParser { f }
}
