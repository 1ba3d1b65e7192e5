use crate::error::NoMatch;

/// An immutable position in a source string
///
/// A cursor is a shared reference to the source text plus a byte offset into
/// it. It is `Copy`: every transition returns a new cursor and leaves the old
/// one untouched, so backtracking is just reusing an earlier value.
///
/// The offset always lies on a `char` boundary and `position() + remaining()`
/// always equals the length of the source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// Get the character at the current position
    ///
    /// Returns an error if no input remains
    pub fn value(&self) -> Result<char, NoMatch> {
        self.rest().chars().next().ok_or(NoMatch)
    }

    /// Advance past the current character
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        match self.value() {
            Ok(c) => self.advance(c.len_utf8()),
            Err(_) => self,
        }
    }

    /// Advance past the current character, returning an error if at end
    pub fn try_next(self) -> Result<Self, NoMatch> {
        let c = self.value()?;
        Ok(self.advance(c.len_utf8()))
    }

    /// Byte offset of this cursor into the source
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Number of bytes left between this cursor and the end of the source
    pub fn remaining(&self) -> usize {
        self.source.len() - self.offset
    }

    /// Check if the cursor is at the end of the source
    pub fn eos(&self) -> bool {
        self.remaining() == 0
    }

    /// The whole source text, independent of position
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// The unconsumed input as a slice of the source
    pub fn rest(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// Consume the cursor and return the source and current offset
    pub fn inner(self) -> (&'code str, usize) {
        (self.source, self.offset)
    }

    /// Move forward by `bytes`, which must end on a `char` boundary
    pub(crate) fn advance(self, bytes: usize) -> Self {
        debug_assert!(self.source.is_char_boundary(self.offset + bytes));
        Cursor {
            source: self.source,
            offset: self.offset + bytes,
        }
    }

    /// Slice of the source between this cursor and a later one
    pub(crate) fn slice_to(&self, later: &Cursor<'code>) -> &'code str {
        &self.source[self.offset..later.offset]
    }

    /// Like `slice_to`, but `None` unless `later` is over the same source at
    /// or after this cursor
    pub(crate) fn checked_slice_to(&self, later: &Cursor<'code>) -> Option<&'code str> {
        if !std::ptr::eq(self.source, later.source) {
            return None;
        }
        self.source.get(self.offset..later.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cursor = Cursor::new("hello\nworld");

        assert_eq!(cursor.value().unwrap(), 'h');

        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), 'e');
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 10);
    }

    #[test]
    fn test_eof() {
        let mut cursor = Cursor::new("ab");

        cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), 'b');

        cursor = cursor.next();
        assert!(cursor.eos());
        assert_eq!(cursor.value(), Err(NoMatch));

        // next() stays at the end
        let again = cursor.next();
        assert_eq!(again, cursor);
    }

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new("");

        assert!(cursor.eos());
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.value().is_err());
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_try_next_eof_error() {
        let cursor = Cursor::new("x");

        let cursor = cursor.try_next().unwrap();
        assert!(cursor.eos());
        assert_eq!(cursor.try_next(), Err(NoMatch));
    }

    #[test]
    fn test_multibyte_advance() {
        let cursor = Cursor::new("héllo");

        let cursor = cursor.next().next();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.value().unwrap(), 'l');
        assert_eq!(cursor.rest(), "llo");
    }

    #[test]
    fn test_offset_plus_remaining_is_length() {
        let source = "añb🦀c";
        let mut cursor = Cursor::new(source);

        while !cursor.eos() {
            assert_eq!(cursor.position() + cursor.remaining(), source.len());
            cursor = cursor.next();
        }
        assert_eq!(cursor.position(), source.len());
    }

    #[test]
    fn test_copy_independence() {
        let cursor = Cursor::new("abcd");

        let saved_at_a = cursor;
        let cursor = cursor.try_next().unwrap();
        let saved_at_b = cursor;
        let cursor = cursor.try_next().unwrap();

        assert_eq!(cursor.value().unwrap(), 'c');
        assert_eq!(saved_at_a.value().unwrap(), 'a');
        assert_eq!(saved_at_b.value().unwrap(), 'b');

        let from_a = saved_at_a.try_next().unwrap();
        assert_eq!(from_a, saved_at_b);
    }

    #[test]
    fn test_slice_to_and_inner() {
        let start = Cursor::new("key=value");
        let end = start.advance(3);

        assert_eq!(start.slice_to(&end), "key");
        assert_eq!(end.inner(), ("key=value", 3));
        assert_eq!(end.source(), "key=value");
    }
}
