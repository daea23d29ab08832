use std::ops::Range;

use crate::common::ErrorKind;
use crate::cursor::Cursor;
use crate::matches;

/// Name and value of a single header line, as ranges of the input.
#[derive(Debug)]
pub(crate) struct RawHeader {
    pub name: Range<usize>,
    pub value: Range<usize>,
}

/// ```not_rust
/// header-field = header-name ":" OWS header-value CRLF
/// OWS          = *( SP / HTAB )
/// ```
///
/// No obsolete line folding.
pub(crate) fn header_line(cursor: &mut Cursor) -> Option<RawHeader> {
    cursor.attempt(|c| {
        let start = c.pos();
        if c.take_while(matches::is_header_name) == 0 {
            return c.fail(ErrorKind::Mismatch, "header name");
        }
        let name = start..c.pos();

        c.expect(b':', "\":\"")?;
        c.take_while(|b| matches!(b, b' ' | b'\t'));

        let start = c.pos();
        if c.take_while(matches::is_header_value) == 0 {
            return c.fail(ErrorKind::Mismatch, "header value");
        }
        let value = start..c.pos();

        c.expect_slice(b"\r\n", "CRLF")?;
        Some(RawHeader { name, value })
    })
}
