use crate::cursor::Cursor;
use thiserror::Error;

/// The single failure a parser can report: nothing matched at the cursor
/// it was given.
///
/// `NoMatch` deliberately carries no position or cause. Since it holds no
/// cursor, a caller that sees it still owns the cursor it passed in, so a
/// failed attempt can never appear to have consumed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("no match")]
pub struct NoMatch;

/// Outcome of applying a parser to a cursor
///
/// `Ok((value, cursor))` is a success carrying the produced value and the
/// residual cursor. `Err(NoMatch)` is a failure. A parser that legitimately
/// produces an absent value returns `Ok((None, cursor))`, never `Err`.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), NoMatch>;

/// Returns true iff the result is the failure tag
pub fn is_failure<T>(result: &ParseResult<'_, T>) -> bool {
    result.is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_display() {
        assert_eq!(NoMatch.to_string(), "no match");
    }

    #[test]
    fn test_is_failure_on_failure() {
        let result: ParseResult<'_, char> = Err(NoMatch);
        assert!(is_failure(&result));
    }

    #[test]
    fn test_absent_value_is_not_failure() {
        let cursor = Cursor::new("abc");
        let result: ParseResult<'_, Option<char>> = Ok((None, cursor));
        assert!(!is_failure(&result));
    }

    #[test]
    fn test_empty_value_is_not_failure() {
        let cursor = Cursor::new("");
        let result: ParseResult<'_, &str> = Ok(("", cursor));
        assert!(!is_failure(&result));
    }
}
