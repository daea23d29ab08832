use std::ops::Range;

use bytes::Bytes;

use super::authority::{RawAuthority, authority};
use super::percent::{self, Text};
use super::{Uri, UriError};
use crate::common::{ByteStr, ErrorKind};
use crate::cursor::Cursor;
use crate::matches;

/// Components as matched, before they are sliced out of the input.
#[derive(Debug)]
pub(crate) struct RawUri {
    scheme: Option<Range<usize>>,
    authority: Option<RawAuthority>,
    path: Range<usize>,
    query: Option<Text>,
    fragment: Option<Text>,
}

impl RawUri {
    pub(crate) fn into_uri(self, source: &Bytes) -> Uri {
        let RawUri { scheme, authority, path, query, fragment } = self;
        let text = |text: Option<Text>| text.map(|t| t.into_bytes(source)).unwrap_or_default();
        let range = |range: Option<Range<usize>>| {
            range.map(|r| ByteStr::from_ascii_range(source, r)).unwrap_or_default()
        };

        let (user_info, host, port, address) = match authority {
            Some(auth) => (
                text(auth.user_info),
                auth.host.into_bytes(source),
                range(auth.port),
                Some(auth.address),
            ),
            None => Default::default(),
        };

        Uri {
            scheme: range(scheme),
            user_info,
            host,
            port,
            path: ByteStr::from_ascii_range(source, path),
            query: text(query),
            fragment: text(fragment),
            address,
        }
    }
}

impl Uri {
    /// Parse URI from [`Bytes`], the whole input must match.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI reference or `*`.
    ///
    /// ```
    /// use h1grammar::Uri;
    ///
    /// let uri = Uri::parse("http://joe@makefile.com:8080/deeper/path?foo=1#frag").unwrap();
    /// assert_eq!(uri.scheme(), "http");
    /// assert_eq!(uri.user_info(), "joe");
    /// assert_eq!(uri.host(), "makefile.com");
    /// assert_eq!(uri.port(), "8080");
    /// assert_eq!(uri.path(), "/deeper/path");
    /// assert_eq!(uri.query(), "foo=1");
    /// assert_eq!(uri.fragment(), "frag");
    /// ```
    pub fn parse(bytes: impl Into<Bytes>) -> Result<Self, UriError> {
        let source = bytes.into();
        let mut cursor = Cursor::new(&source);

        let Some(raw) = uri(&mut cursor) else {
            return Err(cursor.failure("URI").into());
        };
        if !cursor.is_empty() {
            return Err(cursor.failure("end of URI").into());
        }
        Ok(raw.into_uri(&source))
    }

    /// Parse URI by copying from slice.
    ///
    /// If the input is owned [`Bytes`], consider using [`Uri::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI reference or `*`.
    #[inline]
    pub fn parse_slice(bytes: &[u8]) -> Result<Self, UriError> {
        Self::parse(Bytes::copy_from_slice(bytes))
    }
}

// ===== Logic =====

/// request-target = absolute-URI / relative-ref / "*"
///
/// ```not_rust
/// absolute-URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
/// relative-ref = relative-part [ "?" query ] [ "#" fragment ]
/// ```
pub(crate) fn uri(cursor: &mut Cursor) -> Option<RawUri> {
    if let Some(uri) = cursor.attempt(absolute) {
        return Some(uri);
    }
    if let Some(uri) = cursor.attempt(relative) {
        return Some(uri);
    }
    cursor.attempt(|c| {
        let start = c.pos();
        c.expect(b'*', "\"*\"")?;
        Some(RawUri {
            scheme: None,
            authority: None,
            path: start..c.pos(),
            query: None,
            fragment: None,
        })
    })
}

fn absolute(cursor: &mut Cursor) -> Option<RawUri> {
    let scheme = scheme(cursor)?;
    let (authority, path) = hier_part(cursor, Rootless::Allowed);
    let (query, fragment) = query_fragment(cursor);
    Some(RawUri { scheme: Some(scheme), authority, path, query, fragment })
}

fn relative(cursor: &mut Cursor) -> Option<RawUri> {
    let (authority, path) = hier_part(cursor, Rootless::NoScheme);
    let (query, fragment) = query_fragment(cursor);
    Some(RawUri { scheme: None, authority, path, query, fragment })
}

/// scheme = ( ALPHA / DIGIT ) 1*( ALPHA / DIGIT / "+" / "-" / "." ) ":"
///
/// The colon is consumed but not part of the scheme.
fn scheme(cursor: &mut Cursor) -> Option<Range<usize>> {
    let start = cursor.pos();
    if cursor.next_if(|b| b.is_ascii_alphanumeric()).is_none() {
        return cursor.fail(ErrorKind::Mismatch, "scheme");
    }
    if cursor.take_while(matches::is_scheme) == 0 {
        return cursor.fail(ErrorKind::Mismatch, "scheme");
    }
    let end = cursor.pos();
    cursor.expect(b':', "\":\"")?;
    Some(start..end)
}

/// Which rootless path form a hierarchical part accepts.
#[derive(Clone, Copy)]
enum Rootless {
    /// path-rootless, after a scheme
    Allowed,
    /// path-noscheme, in a relative reference
    NoScheme,
}

/// ```not_rust
/// hier-part     = "//" authority path-abempty
///               / path-absolute
///               / path-rootless
///               / path-empty
///
/// relative-part = "//" authority path-abempty
///               / path-absolute
///               / path-noscheme
///               / path-empty
/// ```
///
/// Never fails, `path-empty` matches anything.
fn hier_part(cursor: &mut Cursor, rootless: Rootless) -> (Option<RawAuthority>, Range<usize>) {
    let network = cursor.attempt(|c| {
        c.expect_slice(b"//", "\"//\"")?;
        let authority = authority(c)?;
        let path = path_abempty(c);
        Some((authority, path))
    });
    if let Some((authority, path)) = network {
        return (Some(authority), path);
    }

    let path = cursor.attempt(path_absolute).or_else(|| match rootless {
        Rootless::Allowed => cursor.attempt(|c| path_rootless(c, matches::is_pchar, "segment")),
        Rootless::NoScheme => {
            cursor.attempt(|c| path_rootless(c, matches::is_pchar_nc, "segment without colon"))
        }
    });

    match path {
        Some(path) => (None, path),
        None => (None, cursor.pos()..cursor.pos()),
    }
}

/// segment = *pchar
fn segment(cursor: &mut Cursor) {
    // `*pchar` cannot fail
    let _ = percent::raw(cursor, matches::is_pchar, 0, "segment");
}

/// path-abempty = *( "/" segment )
fn path_abempty(cursor: &mut Cursor) -> Range<usize> {
    let start = cursor.pos();
    while cursor.eat(b'/') {
        segment(cursor);
    }
    start..cursor.pos()
}

/// path-absolute = "/" [ segment-nz *( "/" segment ) ]
fn path_absolute(cursor: &mut Cursor) -> Option<Range<usize>> {
    let start = cursor.pos();
    cursor.expect(b'/', "\"/\"")?;
    if percent::raw(cursor, matches::is_pchar, 1, "segment").is_some() {
        path_abempty(cursor);
    }
    Some(start..cursor.pos())
}

/// path-rootless = segment-nz    *( "/" segment )
/// path-noscheme = segment-nz-nc *( "/" segment )
fn path_rootless(
    cursor: &mut Cursor,
    first: fn(u8) -> bool,
    expected: &'static str,
) -> Option<Range<usize>> {
    let start = cursor.pos();
    percent::raw(cursor, first, 1, expected)?;
    path_abempty(cursor);
    Some(start..cursor.pos())
}

/// [ "?" query ] [ "#" fragment ], both percent decoded.
fn query_fragment(cursor: &mut Cursor) -> (Option<Text>, Option<Text>) {
    let query = component(cursor, b'?', "\"?\"");
    let fragment = component(cursor, b'#', "\"#\"");
    (query, fragment)
}

/// query = *( pchar / "/" / "?" ), same for fragment
fn component(cursor: &mut Cursor, delim: u8, expected: &'static str) -> Option<Text> {
    cursor.attempt(|c| {
        c.expect(delim, expected)?;
        percent::decoded(c, matches::is_query, 0, "query or fragment")
    })
}
