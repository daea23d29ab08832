use std::net::Ipv6Addr;

use super::{Ipv4, LiteralError, ipv4::ipv4};
use crate::common::ErrorKind;
use crate::cursor::Cursor;
use crate::matches::hex_value;

/// IPv6 address literal.
///
/// Keeps the address the way it was written: the explicit groups, where the `::` elision was,
/// and whether the last 32 bits were written as an IPv4 dotted quad.
///
/// ```not_rust
/// IPv6address =                            6( h16 ":" ) ls32
///             /                       "::" 5( h16 ":" ) ls32
///             / [               h16 ] "::" 4( h16 ":" ) ls32
///             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
///             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
///             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
///             / [ *4( h16 ":" ) h16 ] "::"              ls32
///             / [ *5( h16 ":" ) h16 ] "::"              h16
///             / [ *6( h16 ":" ) h16 ] "::"
///
/// ls32        = ( h16 ":" h16 ) / IPv4address
/// h16         = 1*4HEXDIG
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6 {
    /// explicit groups, an IPv4 tail occupies the last two
    groups: [u16; 8],
    len: u8,
    /// index into `groups` where `::` sits
    elision: Option<u8>,
    ipv4: Option<Ipv4>,
}

impl Ipv6 {
    /// Parse an IPv6 address, the whole input must match.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not exactly one IPv6 literal.
    ///
    /// ```
    /// use h1grammar::Ipv6;
    ///
    /// let ip = Ipv6::parse(b"::FFFF:129.144.52.38").unwrap();
    /// assert_eq!(ip.segments(), [0, 0, 0, 0, 0, 0xffff, 0x8190, 0x3426]);
    /// assert!(Ipv6::parse(b"1:2:3:4:5:6:7:8:9").is_err());
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, LiteralError> {
        let (ip, len) = Self::parse_prefix(bytes)?;
        if len != bytes.len() {
            let kind = match bytes.get(len) {
                Some(b':') => ErrorKind::Range,
                _ => ErrorKind::Mismatch,
            };
            let expected = match kind {
                ErrorKind::Range => "at most 8 groups with a single \"::\"",
                _ => "end of IPv6 address",
            };
            return Err(LiteralError::new(kind, len, expected));
        }
        Ok(ip)
    }

    /// Recognize an IPv6 address at the start of the input.
    ///
    /// Returns the address and the number of bytes it spans. The first alternative of the
    /// grammar that matches wins, even if a later one would match more input.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if no alternative matches.
    pub fn parse_prefix(bytes: &[u8]) -> Result<(Self, usize), LiteralError> {
        let mut cursor = Cursor::new(bytes);
        match ipv6(&mut cursor) {
            Some(ip) => Ok((ip, cursor.pos())),
            None => Err(cursor.failure("IPv6 address").into()),
        }
    }

    /// Returns the eight 16-bit segments, with the elided groups filled with zeros.
    pub fn segments(&self) -> [u16; 8] {
        let len = self.len as usize;
        let Some(at) = self.elision.map(usize::from) else {
            return self.groups;
        };
        let mut segments = [0u16; 8];
        segments[..at].copy_from_slice(&self.groups[..at]);
        let tail = len - at;
        segments[8 - tail..].copy_from_slice(&self.groups[at..len]);
        segments
    }

    /// Returns `true` if the address was written with `::`.
    #[inline]
    pub const fn has_elision(&self) -> bool {
        self.elision.is_some()
    }

    /// Returns the embedded IPv4 address if the last 32 bits were written as a dotted quad.
    #[inline]
    pub const fn ipv4_tail(&self) -> Option<Ipv4> {
        self.ipv4
    }
}

impl From<Ipv6> for Ipv6Addr {
    #[inline]
    fn from(value: Ipv6) -> Self {
        Ipv6Addr::from(value.segments())
    }
}

/// Written back normalized: lowercase hex, the elision at the same place, and a dotted quad tail
/// if there was one.
impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.len as usize;
        let hex_len = if self.ipv4.is_some() { len - 2 } else { len };
        let elision = self.elision.map(usize::from);

        for i in 0..hex_len {
            if elision == Some(i) {
                f.write_str("::")?;
            } else if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{:x}", self.groups[i])?;
        }

        if let Some(ip) = self.ipv4 {
            if elision == Some(hex_len) {
                f.write_str("::")?;
            } else if hex_len != 0 {
                f.write_str(":")?;
            }
            write!(f, "{ip}")?;
        } else if elision == Some(len) {
            f.write_str("::")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// ===== Logic =====

#[derive(Default)]
struct Groups {
    groups: [u16; 8],
    len: usize,
    elision: Option<usize>,
    ipv4: Option<Ipv4>,
}

impl Groups {
    fn push(&mut self, group: u16) -> Option<()> {
        let slot = self.groups.get_mut(self.len)?;
        *slot = group;
        self.len += 1;
        Some(())
    }

    fn finish(self) -> Ipv6 {
        // every alternative spells out at most 8 groups
        debug_assert!(self.len <= 8);
        Ipv6 {
            groups: self.groups,
            len: self.len as u8,
            elision: self.elision.map(|e| e as u8),
            ipv4: self.ipv4,
        }
    }
}

/// h16 = 1*4HEXDIG
fn h16(cursor: &mut Cursor) -> Option<u16> {
    let start = cursor.pos();
    match cursor.take_range(1, 4, |b| b.is_ascii_hexdigit()) {
        Some(_) => {
            let group = cursor
                .slice(start, cursor.pos())
                .iter()
                .fold(0u16, |acc, b| acc << 4 | u16::from(hex_value(*b).unwrap_or(0)));
            Some(group)
        }
        None => cursor.fail(ErrorKind::Mismatch, "h16"),
    }
}

/// h16 ":"
fn h16_colon(cursor: &mut Cursor, groups: &mut Groups) -> Option<()> {
    let group = cursor.attempt(|c| {
        let group = h16(c)?;
        c.expect(b':', "\":\"")?;
        Some(group)
    })?;
    groups.push(group)
}

/// ls32 = ( h16 ":" h16 ) / IPv4address
fn ls32(cursor: &mut Cursor, groups: &mut Groups) -> Option<()> {
    let pair = cursor.attempt(|c| {
        let hi = h16(c)?;
        c.expect(b':', "\":\"")?;
        let lo = h16(c)?;
        Some((hi, lo))
    });
    if let Some((hi, lo)) = pair {
        groups.push(hi)?;
        return groups.push(lo);
    }

    let ip = ipv4(cursor)?;
    let [a, b, c, d] = ip.octets();
    groups.push(u16::from_be_bytes([a, b]))?;
    groups.push(u16::from_be_bytes([c, d]))?;
    groups.ipv4 = Some(ip);
    Some(())
}

/// What follows `::` after the fixed `h16 ":"` repetitions.
#[derive(Clone, Copy)]
enum Tail {
    Ls32,
    H16,
    Empty,
}

/// One elided alternative:
///
/// `[ *extra( h16 ":" ) h16 ] "::" repeat( h16 ":" ) tail`
///
/// with `extra` of [`None`] meaning no leading groups at all.
struct Elided {
    extra: Option<usize>,
    repeat: usize,
    tail: Tail,
}

const ELIDED: [Elided; 8] = [
    Elided { extra: None, repeat: 5, tail: Tail::Ls32 },
    Elided { extra: Some(0), repeat: 4, tail: Tail::Ls32 },
    Elided { extra: Some(1), repeat: 3, tail: Tail::Ls32 },
    Elided { extra: Some(2), repeat: 2, tail: Tail::Ls32 },
    Elided { extra: Some(3), repeat: 1, tail: Tail::Ls32 },
    Elided { extra: Some(4), repeat: 0, tail: Tail::Ls32 },
    Elided { extra: Some(5), repeat: 0, tail: Tail::H16 },
    Elided { extra: Some(6), repeat: 0, tail: Tail::Empty },
];

/// 6( h16 ":" ) ls32
fn full(cursor: &mut Cursor) -> Option<Groups> {
    let mut groups = Groups::default();
    for _ in 0..6 {
        h16_colon(cursor, &mut groups)?;
    }
    ls32(cursor, &mut groups)?;
    Some(groups)
}

fn elided(cursor: &mut Cursor, alt: &Elided) -> Option<Groups> {
    let mut groups = Groups::default();

    // the optional leading groups are greedy, once taken they are not given back
    if let Some(extra) = alt.extra {
        if let Some(group) = h16(cursor) {
            groups.push(group)?;
            for _ in 0..extra {
                let next = cursor.attempt(|c| {
                    c.expect(b':', "\":\"")?;
                    h16(c)
                });
                match next {
                    Some(group) => groups.push(group)?,
                    None => break,
                }
            }
        }
    }

    cursor.expect_slice(b"::", "\"::\"")?;
    groups.elision = Some(groups.len);

    for _ in 0..alt.repeat {
        h16_colon(cursor, &mut groups)?;
    }

    match alt.tail {
        Tail::Ls32 => ls32(cursor, &mut groups)?,
        Tail::H16 => groups.push(h16(cursor)?)?,
        Tail::Empty => {}
    }
    Some(groups)
}

/// IPv6address, alternatives tried top to bottom.
pub(crate) fn ipv6(cursor: &mut Cursor) -> Option<Ipv6> {
    if let Some(groups) = cursor.attempt(full) {
        return Some(groups.finish());
    }
    for alt in &ELIDED {
        if let Some(groups) = cursor.attempt(|c| elided(c, alt)) {
            return Some(groups.finish());
        }
    }
    cursor.fail(ErrorKind::Mismatch, "IPv6 address")
}
