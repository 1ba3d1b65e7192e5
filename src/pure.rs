use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Debug, Clone)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T>(value: T) -> Pure<T>
where
    T: Clone,
{
    Pure::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_string() {
        let parser = pure(String::from("x"));

        let (result, remaining) = parser.parse(Cursor::new("hello")).unwrap();
        assert_eq!(result, "x");
        // Should not consume any input
        assert_eq!(remaining.position(), 0);
    }

    #[test]
    fn test_pure_empty_input() {
        let parser = pure(7);

        let (result, remaining) = parser.parse(Cursor::new("")).unwrap();
        assert_eq!(result, 7);
        assert!(remaining.eos());
    }

    #[test]
    fn test_pure_absent_value_is_success() {
        let parser = pure(None::<char>);

        let result = parser.parse(Cursor::new("abc"));
        assert_eq!(result, Ok((None, Cursor::new("abc"))));
    }
}
