//! HTTP/1.1 request line and header line grammar.
//!
//! - [`Method`] and [`Version`], the request line tokens
//! - [`RequestLine`], which carries the request-target as a [`Uri`][crate::Uri]
//!
//! Header lines are collected by [`RequestParser`][crate::RequestParser].
mod error;
mod method;
mod version;
mod reqline;
mod header;

pub use error::ParseError;
pub use method::{InvalidMethod, Method};
pub use version::Version;
pub use reqline::RequestLine;

pub(crate) use header::header_line;
pub(crate) use reqline::{MAX_METHOD_LEN, request_line};

#[cfg(test)]
mod test;
