use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;
use tracing::{debug, trace};

/// Apply `parser` to the whole of `text` and return the produced value
///
/// The parse starts at offset 0. It does not have to consume all of the
/// input; sequence the parser with [`eof`](crate::eof::eof) to require that.
///
/// ```
/// use strcomb::literal::literal;
/// use strcomb::run::run;
///
/// assert_eq!(run(&literal("ab"), "abc"), Ok("ab"));
/// assert!(run(&literal("ab"), "a").is_err());
/// ```
pub fn run<'code, P>(parser: &P, text: &'code str) -> Result<P::Output, NoMatch>
where
    P: Parser<'code> + ?Sized,
{
    match parser.parse(Cursor::new(text)) {
        Ok((value, cursor)) => {
            trace!(
                input_len = text.len(),
                consumed = cursor.position(),
                "parse succeeded"
            );
            Ok(value)
        }
        Err(NoMatch) => {
            debug!(input_len = text.len(), "parse failed: no match");
            Err(NoMatch)
        }
    }
}
