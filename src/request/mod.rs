//! HTTP Request head parsing.
use bytes::Bytes;

use crate::common::{ByteStr, ErrorKind};
use crate::cursor::{Cursor, Failure};
use crate::h1::{self, Method, ParseError, RequestLine, Version};
use crate::headers::HeaderMap;
use crate::log::{debug, warning};
use crate::uri::Uri;

/// Limits applied while parsing a request head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum method token length.
    pub max_method_len: usize,
    /// Maximum number of header lines, duplicates included.
    pub max_header_count: usize,
    /// Maximum size of the whole input buffer in bytes.
    pub max_request_size: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_method_len: h1::MAX_METHOD_LEN,
            max_header_count: 64,
            max_request_size: 64 * 1024, // 64KB
        }
    }
}

/// HTTP Request head.
///
/// The request line followed by its headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    line: RequestLine,
    headers: HeaderMap,
    head_len: usize,
}

impl Request {
    /// Parse request head with the default [`ParseLimits`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid request head, see [`RequestParser::parse`].
    ///
    /// ```
    /// use h1grammar::{Method, Request};
    ///
    /// let req = Request::parse("GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
    /// assert_eq!(req.method(), &Method::GET);
    /// assert_eq!(req.uri().path(), "/index.html");
    /// assert_eq!(req.headers().get("Host").unwrap(), "example.com");
    /// ```
    #[inline]
    pub fn parse(bytes: impl Into<Bytes>) -> Result<Self, ParseError> {
        RequestParser::new().parse(bytes)
    }

    /// Returns the request line.
    #[inline]
    pub const fn line(&self) -> &RequestLine {
        &self.line
    }

    #[inline]
    pub const fn method(&self) -> &Method {
        self.line.method()
    }

    #[inline]
    pub const fn uri(&self) -> &Uri {
        self.line.uri()
    }

    #[inline]
    pub const fn version(&self) -> Version {
        self.line.version()
    }

    #[inline]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the number of bytes the head spans, including the blank line if there is one.
    ///
    /// Anything from this offset on was not inspected.
    #[inline]
    pub const fn head_len(&self) -> usize {
        self.head_len
    }
}

/// HTTP Request head parser.
#[derive(Clone, Debug, Default)]
pub struct RequestParser {
    limits: ParseLimits,
}

impl RequestParser {
    /// Create a new parser with default limits.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new parser with custom limits.
    #[inline]
    pub const fn with_limits(limits: ParseLimits) -> Self {
        Self { limits }
    }

    /// Returns the limits this parser applies.
    #[inline]
    pub const fn limits(&self) -> &ParseLimits {
        &self.limits
    }

    /// Parse a request head.
    ///
    /// ```not_rust
    /// request = request-line *( header-field ) [ CRLF ]
    /// ```
    ///
    /// The head ends either at the end of input or after the blank line. Bytes after the blank
    /// line are not inspected, see [`Request::head_len`].
    ///
    /// When a header name repeats, the first value is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input does not match the grammar, or exceeds [`ParseLimits`].
    pub fn parse(&self, bytes: impl Into<Bytes>) -> Result<Request, ParseError> {
        let source = bytes.into();

        if source.len() > self.limits.max_request_size {
            warning!(
                "request of {} bytes exceeds the {} bytes limit",
                source.len(),
                self.limits.max_request_size
            );
            return Err(ParseError::new(
                ErrorKind::Range,
                self.limits.max_request_size,
                "request within the size limit",
            ));
        }

        let mut cursor = Cursor::new(&source);

        let Some(line) = h1::request_line(&mut cursor, &source, self.limits.max_method_len) else {
            return Err(reject(cursor.failure("request line")));
        };

        let mut headers = HeaderMap::new();
        let mut count = 0;

        while let Some(header) = h1::header_line(&mut cursor) {
            count += 1;
            if count > self.limits.max_header_count {
                warning!(
                    "request exceeds the {} header lines limit",
                    self.limits.max_header_count
                );
                return Err(ParseError::new(
                    ErrorKind::Range,
                    header.name.start,
                    "fewer header lines",
                ));
            }

            let name = ByteStr::from_ascii_range(&source, header.name);
            let value = ByteStr::from_ascii_range(&source, header.value);
            if !headers.insert_if_absent(name, value) {
                debug!("duplicate header dropped");
            }
        }

        if !cursor.is_empty() && !cursor.eat_slice(b"\r\n") {
            return Err(reject(cursor.failure("header line or end of head")));
        }

        debug!("parsed {} request with {} headers", line.method(), headers.len());

        Ok(Request {
            line,
            headers,
            head_len: cursor.pos(),
        })
    }
}

fn reject(failure: Failure) -> ParseError {
    let err = ParseError::from(failure);
    debug!("request rejected: {err}");
    err
}

#[cfg(test)]
mod test;
