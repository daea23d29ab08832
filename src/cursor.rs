use crate::common::ErrorKind;

/// Furthest failure seen while parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Failure {
    pub kind: ErrorKind,
    pub position: usize,
    pub expected: &'static str,
}

/// Backtracking cursor over an immutable byte slice.
///
/// Grammar rules are functions `fn(&mut Cursor) -> Option<T>`. A rule that fails must leave the
/// cursor where it started, [`Cursor::attempt`] does that for a whole rule. Restoring the
/// position does not forget failures, the furthest one is kept for diagnostics.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    failure: Option<Failure>,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0, failure: None }
    }

    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub const fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Bytes in `start..end`, both must be positions the cursor has been at.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.bytes[start..end]
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    pub fn peek_at(&self, nth: usize) -> Option<u8> {
        self.bytes.get(self.pos + nth).copied()
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.bytes.len());
        self.pos += n;
    }

    /// Consume and return the next byte if it satisfies `f`.
    #[inline]
    pub fn next_if(&mut self, f: impl FnOnce(u8) -> bool) -> Option<u8> {
        match self.peek() {
            Some(byte) if f(byte) => {
                self.pos += 1;
                Some(byte)
            }
            _ => None,
        }
    }

    /// Consume `byte` if it is next, without recording a failure.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        self.next_if(|b| b == byte).is_some()
    }

    /// Consume `lit` if the input continues with it, without recording a failure.
    #[inline]
    pub fn eat_slice(&mut self, lit: &[u8]) -> bool {
        match self.bytes.get(self.pos..) {
            Some(rest) if rest.starts_with(lit) => {
                self.pos += lit.len();
                true
            }
            _ => false,
        }
    }

    /// Consume `byte`, or record a mismatch.
    #[inline]
    pub fn expect(&mut self, byte: u8, expected: &'static str) -> Option<()> {
        if self.eat(byte) {
            Some(())
        } else {
            self.fail(ErrorKind::Mismatch, expected)
        }
    }

    /// Consume `lit`, or record a mismatch.
    #[inline]
    pub fn expect_slice(&mut self, lit: &[u8], expected: &'static str) -> Option<()> {
        if self.eat_slice(lit) {
            Some(())
        } else {
            self.fail(ErrorKind::Mismatch, expected)
        }
    }

    /// Consume bytes while `f` holds, returns the count consumed.
    #[inline]
    pub fn take_while(&mut self, f: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while self.next_if(&f).is_some() { }
        self.pos - start
    }

    /// Consume at least `min` and at most `max` bytes satisfying `f`.
    #[inline]
    pub fn take_range(&mut self, min: usize, max: usize, f: impl Fn(u8) -> bool) -> Option<usize> {
        let start = self.pos;
        while self.pos - start < max && self.next_if(&f).is_some() { }
        let n = self.pos - start;
        if n < min {
            self.pos = start;
            None
        } else {
            Some(n)
        }
    }

    /// Run a rule, restoring the position if it fails.
    #[inline]
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mark = self.pos;
        let out = f(self);
        if out.is_none() {
            self.pos = mark;
        }
        out
    }

    /// Record a failure at the current position and return [`None`].
    #[inline]
    pub fn fail<T>(&mut self, kind: ErrorKind, expected: &'static str) -> Option<T> {
        self.fail_at(self.pos, kind, expected)
    }

    /// Record a failure at `position` and return [`None`].
    ///
    /// The furthest failure wins. At the same position the latest failure wins, except that a
    /// plain mismatch never replaces a range or encoding failure.
    pub fn fail_at<T>(&mut self, position: usize, kind: ErrorKind, expected: &'static str) -> Option<T> {
        let replace = match self.failure {
            None => true,
            Some(prev) => {
                position > prev.position
                    || (position == prev.position
                        && (prev.kind == ErrorKind::Mismatch || kind != ErrorKind::Mismatch))
            }
        };
        if replace {
            self.failure = Some(Failure { kind, position, expected });
        }
        None
    }

    /// Furthest failure, or a mismatch at the current position when nothing was recorded.
    pub fn failure(&self, expected: &'static str) -> Failure {
        match self.failure {
            Some(failure) if failure.position >= self.pos => failure,
            _ => Failure { kind: ErrorKind::Mismatch, position: self.pos, expected },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_attempt_restores() {
        let mut cursor = Cursor::new(b"abc");
        let out: Option<()> = cursor.attempt(|c| {
            c.expect(b'a', "a")?;
            c.expect(b'x', "x")
        });
        assert!(out.is_none());
        assert_eq!(cursor.pos(), 0);

        let failure = cursor.failure("end");
        assert_eq!(failure.position, 1);
        assert_eq!(failure.expected, "x");
    }

    #[test]
    fn test_take_range() {
        let mut cursor = Cursor::new(b"12345a");
        assert_eq!(cursor.take_range(1, 4, |b| b.is_ascii_digit()), Some(4));
        assert_eq!(cursor.pos(), 4);
        assert_eq!(cursor.take_range(2, 4, |b| b.is_ascii_digit()), None);
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn test_failure_priority() {
        let mut cursor = Cursor::new(b"");
        cursor.fail_at::<()>(3, ErrorKind::Mismatch, "a");
        cursor.fail_at::<()>(3, ErrorKind::Mismatch, "b");
        assert_eq!(cursor.failure("end").expected, "b");

        cursor.fail_at::<()>(3, ErrorKind::Encoding, "c");
        cursor.fail_at::<()>(3, ErrorKind::Mismatch, "d");
        cursor.fail_at::<()>(2, ErrorKind::Range, "e");
        let failure = cursor.failure("end");
        assert_eq!(failure.kind, ErrorKind::Encoding);
        assert_eq!(failure.expected, "c");
    }
}
