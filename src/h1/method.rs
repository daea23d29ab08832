use std::{fmt, str::FromStr};

use super::MAX_METHOD_LEN;
use crate::common::ByteStr;
use crate::matches;

/// HTTP Method.
///
/// Any token of uppercase letters and digits is a method, the standard ones have associated
/// constants.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Method(Inner);

// https://tools.ietf.org/html/rfc7231#section-4
#[derive(Clone, Default, PartialEq, Eq, Hash)]
enum Inner {
    Options,
    #[default]
    Get,
    Head,
    Trace,
    Connect,
    Post,
    Put,
    Delete,
    Patch,
    Extension(ByteStr),
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Method {
    forward! {
        /// The `OPTIONS` method describes the communication options for the target resource.
        pub const OPTIONS: Options = b"OPTIONS";
        /// The `GET` method requests a representation of the specified resource.
        pub const GET: Get = b"GET";
        /// The `HEAD` method asks for a response identical to a GET request, but without a response
        /// body.
        pub const HEAD: Head = b"HEAD";
        /// The `TRACE` method performs a message loop-back test along the path to the target
        /// resource.
        pub const TRACE: Trace = b"TRACE";
        /// The `CONNECT` method establishes a tunnel to the server identified by the target
        /// resource.
        pub const CONNECT: Connect = b"CONNECT";
        /// The `POST` method submits an entity to the specified resource.
        pub const POST: Post = b"POST";
        /// The `PUT` method replaces all current representations of the target resource with the
        /// request content.
        pub const PUT: Put = b"PUT";
        /// The `DELETE` method deletes the specified resource.
        pub const DELETE: Delete = b"DELETE";
        /// The `PATCH` method applies partial modifications to a resource.
        pub const PATCH: Patch = b"PATCH";
    }

    /// Create [`Method`] from a token matched by the request line grammar.
    pub(crate) fn from_token(token: ByteStr) -> Method {
        match Self::from_bytes(token.as_bytes()) {
            Some(method) => method,
            None => Method(Inner::Extension(token)),
        }
    }

    /// Returns `true` if this is not one of the standard methods.
    #[inline]
    pub const fn is_extension(&self) -> bool {
        matches!(self.0, Inner::Extension(_))
    }
}

// ===== Error =====

/// An error when trying to parse [`Method`] from a string.
#[derive(Debug)]
pub struct InvalidMethod;

/// Accepts any token of uppercase letters and digits, up to [`MAX_METHOD_LEN`] long.
impl FromStr for Method {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > MAX_METHOD_LEN || !s.bytes().all(matches::is_method) {
            return Err(InvalidMethod);
        }
        Ok(Self::from_token(ByteStr::copy_from_str(s)))
    }
}

impl std::error::Error for InvalidMethod { }

impl fmt::Display for InvalidMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid method")
    }
}

// ===== Macros =====

macro_rules! forward {
    ($($(#[$doc:meta])* pub const $name:ident: $variant:ident = $val:literal;)*) => {
        $(
            $(#[$doc])*
            pub const $name: Method = Method(Inner::$variant);
        )*

        /// Create standard [`Method`] from bytes.
        ///
        /// Returns [`None`] for anything else, including lowercase spelling.
        pub const fn from_bytes(src: &[u8]) -> Option<Method> {
            match src {
                $(
                    $val => Some(Self::$name),
                )*
                _ => None,
            }
        }

        /// Returns string representation.
        pub fn as_str(&self) -> &str {
            match &self.0 {
                $(
                    Inner::$variant => stringify!($name),
                )*
                Inner::Extension(token) => token.as_str(),
            }
        }
    };
}

use forward;
