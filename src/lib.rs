//! Grammar-driven HTTP/1.1 request head parser.
//!
//! The request line is parsed with the request-target read as a generic URI ([RFC3986]),
//! including the authority host sub-grammar: bracketed IPv6/IPvFuture literals, IPv4 dotted
//! quads and percent-decoded registered names.
//!
//! The parser works on a whole, already buffered request head; see [`Request::parse`].
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
#![warn(missing_debug_implementations)]

mod log;
mod matches;
mod cursor;

pub mod common;
pub mod uri;
pub mod h1;
pub mod headers;
pub mod request;

pub use common::{ByteStr, ErrorKind};
pub use uri::{Uri, UriError, Ipv4, Ipv6, LiteralError};
pub use h1::{Method, Version, RequestLine, ParseError};
pub use headers::HeaderMap;
pub use request::{Request, RequestParser, ParseLimits};
