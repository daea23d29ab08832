use std::ops::Range;

use bytes::Bytes;

use crate::common::ErrorKind;
use crate::cursor::Cursor;
use crate::matches::hex_value;

/// Decode a single `%XX` escape.
///
/// Returns [`None`] if `escape` is not `%` followed by two hex digits.
///
/// ```
/// use h1grammar::uri::decode_escape;
///
/// assert_eq!(decode_escape(b"%6d"), Some(b'm'));
/// assert_eq!(decode_escape(b"%2E"), Some(b'.'));
/// assert_eq!(decode_escape(b"%g0"), None);
/// ```
pub const fn decode_escape(escape: &[u8]) -> Option<u8> {
    let [b'%', hi, lo] = escape else {
        return None;
    };
    match (hex_value(*hi), hex_value(*lo)) {
        (Some(hi), Some(lo)) => Some(hi << 4 | lo),
        _ => None,
    }
}

/// Matched text of a component.
#[derive(Debug)]
pub(crate) enum Text {
    /// Range of the input, contains only ASCII.
    Raw(Range<usize>),
    /// Percent decoded, owned, not necessarily UTF-8.
    Decoded(Vec<u8>),
}

impl Text {
    pub(crate) fn into_bytes(self, source: &Bytes) -> Bytes {
        match self {
            Self::Raw(range) => source.slice(range),
            Self::Decoded(buf) => Bytes::from(buf),
        }
    }
}

/// pct-encoded = "%" HEXDIG HEXDIG
pub(crate) fn pct_encoded(cursor: &mut Cursor) -> Option<u8> {
    if cursor.peek() != Some(b'%') {
        return None;
    }
    let start = cursor.pos();
    let escape = [b'%', cursor.peek_at(1).unwrap_or(0), cursor.peek_at(2).unwrap_or(0)];
    match decode_escape(&escape) {
        Some(byte) => {
            cursor.advance(3);
            Some(byte)
        }
        None => cursor.fail_at(start, ErrorKind::Encoding, "two hex digits after \"%\""),
    }
}

/// Match at least `min` of `class` or percent escapes, keeping the escapes as is.
pub(crate) fn raw(
    cursor: &mut Cursor,
    class: fn(u8) -> bool,
    min: usize,
    expected: &'static str,
) -> Option<Range<usize>> {
    let start = cursor.pos();
    let mut count = 0;
    while cursor.next_if(class).is_some() || pct_encoded(cursor).is_some() {
        count += 1;
    }
    if count < min {
        cursor.reset(start);
        return cursor.fail(ErrorKind::Mismatch, expected);
    }
    Some(start..cursor.pos())
}

/// Match at least `min` of `class` or percent escapes, resolving the escapes to raw bytes.
///
/// Text without any escape is not copied.
pub(crate) fn decoded(
    cursor: &mut Cursor,
    class: fn(u8) -> bool,
    min: usize,
    expected: &'static str,
) -> Option<Text> {
    let start = cursor.pos();
    let mut buf: Option<Vec<u8>> = None;
    let mut count = 0;

    loop {
        let at = cursor.pos();
        if let Some(byte) = cursor.next_if(class) {
            if let Some(buf) = &mut buf {
                buf.push(byte);
            }
        } else if let Some(byte) = pct_encoded(cursor) {
            buf.get_or_insert_with(|| cursor.slice(start, at).to_vec()).push(byte);
        } else {
            break;
        }
        count += 1;
    }

    if count < min {
        cursor.reset(start);
        return cursor.fail(ErrorKind::Mismatch, expected);
    }

    match buf {
        None => Some(Text::Raw(start..cursor.pos())),
        Some(buf) => Some(Text::Decoded(buf)),
    }
}
