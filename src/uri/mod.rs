//! Uniform Resource Identifier ([RFC3986])
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
//!
//! # Generic Syntax
//!
//! [`Uri`] represent a parsed request-target: an absolute URI, a relative reference, or the
//! asterisk form `*`.
//!
//! # Percent Encoding
//!
//! `user_info`, a registered name host, `query` and `fragment` are percent decoded while
//! parsing. `path` and IP literal hosts are kept as written.
//!
//! Escapes decode to raw bytes, which are not required to be UTF-8. The text
//! accessors replace invalid sequences, the `*_bytes` accessors return the exact bytes.
use std::borrow::Cow;

use bytes::Bytes;

use crate::common::ByteStr;

mod error;
mod percent;
mod ipv4;
mod ipv6;
mod authority;
mod parser;
mod impls;

pub use error::{LiteralError, UriError};
pub use ipv4::Ipv4;
pub use ipv6::Ipv6;
pub use percent::decode_escape;

pub(crate) use parser::uri;

use authority::Address;

/// URI Generic Syntax ([RFC3986])
///
/// [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
///
/// # Syntax Component
///
/// The following are two example URIs and their component parts:
///
/// ```not_rust
///   foo://example.com:8042/over/there?name=ferret#nose
///   \_/   \______________/\_________/ \_________/ \__/
///    |           |            |            |        |
/// scheme     authority       path        query   fragment
///    |   _____________________|__
///   / \ /                        \
///   urn:example:animal:ferret:nose
/// ```
///
/// Every component is empty when absent.
#[derive(Clone, PartialEq, Eq)]
pub struct Uri {
    scheme: ByteStr,
    user_info: Bytes,
    host: Bytes,
    port: ByteStr,
    path: ByteStr,
    query: Bytes,
    fragment: Bytes,
    /// `None` if there is no authority
    address: Option<Address>,
}

impl Uri {
    /// Returns the scheme, without the trailing `:`.
    ///
    /// Empty scheme means the URI is a relative reference or `*`.
    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the percent decoded user information, without the trailing `@`.
    #[inline]
    pub fn user_info(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.user_info)
    }

    /// Returns the exact bytes of the percent decoded user information.
    #[inline]
    pub fn user_info_bytes(&self) -> &[u8] {
        &self.user_info
    }

    /// Returns the host.
    ///
    /// A registered name is percent decoded, an IP literal is returned without brackets.
    #[inline]
    pub fn host(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.host)
    }

    /// Returns the exact bytes of the host.
    #[inline]
    pub fn host_bytes(&self) -> &[u8] {
        &self.host
    }

    /// Returns the port digits, which may be empty even if the `:` is present.
    #[inline]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Returns the path as written, e.g: `/over/there`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the percent decoded query, without the leading `?`.
    ///
    /// ```
    /// use h1grammar::Uri;
    ///
    /// let uri = Uri::parse("/search?name=caf%E9").unwrap();
    /// assert_eq!(uri.query(), "name=caf\u{FFFD}");
    /// assert_eq!(uri.query_bytes(), b"name=caf\xE9");
    /// ```
    #[inline]
    pub fn query(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.query)
    }

    /// Returns the exact bytes of the percent decoded query.
    #[inline]
    pub fn query_bytes(&self) -> &[u8] {
        &self.query
    }

    /// Returns the percent decoded fragment, without the leading `#`.
    #[inline]
    pub fn fragment(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.fragment)
    }

    /// Returns the exact bytes of the percent decoded fragment.
    #[inline]
    pub fn fragment_bytes(&self) -> &[u8] {
        &self.fragment
    }

    /// Returns `true` if the URI has an authority component.
    #[inline]
    pub const fn has_authority(&self) -> bool {
        self.address.is_some()
    }

    /// Returns the host as IPv4 address, if it was written as one.
    #[inline]
    pub const fn host_ipv4(&self) -> Option<Ipv4> {
        match self.address {
            Some(Address::Ipv4(ip)) => Some(ip),
            _ => None,
        }
    }

    /// Returns the host as IPv6 address, if it was written as one.
    #[inline]
    pub const fn host_ipv6(&self) -> Option<Ipv6> {
        match self.address {
            Some(Address::Ipv6(ip)) => Some(ip),
            _ => None,
        }
    }

    /// Returns `true` if the URI is the asterisk form `*`.
    #[inline]
    pub fn is_asterisk(&self) -> bool {
        self.scheme.is_empty() && self.address.is_none() && &*self.path == "*"
    }
}
