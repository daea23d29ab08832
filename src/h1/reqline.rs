use bytes::Bytes;

use super::{Method, ParseError, Version};
use crate::common::{ByteStr, ErrorKind};
use crate::cursor::Cursor;
use crate::matches;
use crate::uri::{self, Uri};

/// Longest method token accepted by default.
pub(crate) const MAX_METHOD_LEN: usize = 20;

/// HTTP request line.
///
/// ```not_rust
/// request-line = method SP request-target SP "HTTP/" 1*DIGIT "." 1*DIGIT CRLF
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    uri: Uri,
    version: Version,
}

impl RequestLine {
    /// Parse a single request line including its trailing CRLF, the whole input must match.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not exactly one request line.
    ///
    /// ```
    /// use h1grammar::{Method, RequestLine};
    ///
    /// let line = RequestLine::parse("OPTIONS * HTTP/1.1\r\n").unwrap();
    /// assert_eq!(line.method(), &Method::OPTIONS);
    /// assert!(line.uri().is_asterisk());
    /// assert_eq!(line.version_minor(), 1);
    /// ```
    pub fn parse(bytes: impl Into<Bytes>) -> Result<Self, ParseError> {
        let source = bytes.into();
        let mut cursor = Cursor::new(&source);

        let Some(line) = request_line(&mut cursor, &source, MAX_METHOD_LEN) else {
            return Err(cursor.failure("request line").into());
        };
        if !cursor.is_empty() {
            return Err(cursor.failure("end of request line").into());
        }
        Ok(line)
    }

    #[inline]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[inline]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    #[inline]
    pub const fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub const fn version_major(&self) -> u32 {
        self.version.major()
    }

    #[inline]
    pub const fn version_minor(&self) -> u32 {
        self.version.minor()
    }
}

// ===== Logic =====

pub(crate) fn request_line(
    cursor: &mut Cursor,
    source: &Bytes,
    max_method_len: usize,
) -> Option<RequestLine> {
    cursor.attempt(|c| {
        let method = method(c, source, max_method_len)?;
        c.expect(b' ', "SP")?;
        let uri = target(c, source)?;
        c.expect(b' ', "SP")?;
        let version = version(c)?;
        c.expect_slice(b"\r\n", "CRLF")?;
        Some(RequestLine { method, uri, version })
    })
}

/// method = 1*max( UPPER / DIGIT )
fn method(cursor: &mut Cursor, source: &Bytes, max_len: usize) -> Option<Method> {
    let start = cursor.pos();
    if cursor.take_range(1, max_len, matches::is_method).is_none() {
        return cursor.fail(ErrorKind::Mismatch, "method");
    }
    if cursor.peek().is_some_and(matches::is_method) {
        let end = cursor.pos();
        cursor.reset(start);
        return cursor.fail_at(end, ErrorKind::Mismatch, "shorter method");
    }
    let token = ByteStr::from_ascii_range(source, start..cursor.pos());
    Some(Method::from_token(token))
}

/// request-target, must not be empty.
fn target(cursor: &mut Cursor, source: &Bytes) -> Option<Uri> {
    let start = cursor.pos();
    let raw = uri::uri(cursor)?;
    if cursor.pos() == start {
        return cursor.fail(ErrorKind::Mismatch, "request-target");
    }
    Some(raw.into_uri(source))
}

/// HTTP-version = "HTTP/" 1*DIGIT "." 1*DIGIT
fn version(cursor: &mut Cursor) -> Option<Version> {
    cursor.expect_slice(b"HTTP/", "\"HTTP/\"")?;
    let major = number(cursor)?;
    cursor.expect(b'.', "\".\"")?;
    let minor = number(cursor)?;
    Some(Version::new(major, minor))
}

fn number(cursor: &mut Cursor) -> Option<u32> {
    let start = cursor.pos();
    if cursor.take_while(|b| b.is_ascii_digit()) == 0 {
        return cursor.fail(ErrorKind::Mismatch, "digit");
    }
    let digits = cursor.slice(start, cursor.pos());
    let value = digits.iter().try_fold(0u32, |acc, b| {
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    });
    match value {
        Some(value) => Some(value),
        None => {
            cursor.reset(start);
            cursor.fail(ErrorKind::Range, "version number fitting 32 bits")
        }
    }
}
