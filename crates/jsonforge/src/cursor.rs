//! Bounds-checked byte cursor over an in-memory document.

use crate::error::Reason;

/// JSON whitespace: space, tab, carriage return, line feed, and form feed.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b'\x0c')
}

/// Read position into an immutable-length byte buffer.
///
/// Invariant: `pos <= bytes.len()`. The cursor advances strictly forward and
/// never revisits a byte; no other component touches buffer bounds directly.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte at the current position without advancing, `None` at end.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consumes and returns the current byte.
    #[inline]
    pub(crate) fn pop(&mut self) -> Result<u8, Reason> {
        match self.bytes.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                Ok(byte)
            }
            None => Err(Reason::EndOfStream),
        }
    }

    /// Advances without re-checking bounds.
    ///
    /// Valid only immediately after a `peek` that returned `Some`.
    #[inline]
    pub(crate) fn advance_unchecked(&mut self) {
        debug_assert!(self.pos < self.bytes.len());
        self.pos += 1;
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance_unchecked();
        }
    }

    /// Distance from the start of the buffer, in bytes.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::error::Reason;

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new(b"ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn pop_advances_and_fails_at_end() {
        let mut cursor = Cursor::new(b"ab");
        assert_eq!(cursor.pop(), Ok(b'a'));
        assert_eq!(cursor.pop(), Ok(b'b'));
        assert!(cursor.at_end());
        assert_eq!(cursor.pop(), Err(Reason::EndOfStream));
        // The failing position is preserved, not reset.
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn skip_whitespace_stops_at_significant_byte() {
        let mut cursor = Cursor::new(b" \t\r\n\x0c[");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some(b'['));
        assert_eq!(cursor.offset(), 5);
    }

    #[test]
    fn skip_whitespace_stops_at_end() {
        let mut cursor = Cursor::new(b"  ");
        cursor.skip_whitespace();
        assert!(cursor.at_end());
    }
}
