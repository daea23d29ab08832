use std::net::Ipv4Addr;

use super::LiteralError;
use crate::common::ErrorKind;
use crate::cursor::Cursor;

/// IPv4 address literal.
///
/// ```not_rust
/// IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4 {
    octets: [u8; 4],
}

impl Ipv4 {
    /// Create address from four octets.
    #[inline]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self { octets: [a, b, c, d] }
    }

    /// Returns the four octets.
    #[inline]
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Parse a dotted quad, the whole input must match.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not exactly one IPv4 literal.
    ///
    /// ```
    /// use h1grammar::Ipv4;
    ///
    /// assert_eq!(Ipv4::parse(b"10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
    /// assert!(Ipv4::parse(b"256.0.0.1").is_err());
    /// assert!(Ipv4::parse(b"1.2.3.4a").is_err());
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, LiteralError> {
        let (ip, len) = Self::parse_prefix(bytes)?;
        if len != bytes.len() {
            return Err(LiteralError::new(ErrorKind::Mismatch, len, "end of IPv4 address"));
        }
        Ok(ip)
    }

    /// Recognize a dotted quad at the start of the input.
    ///
    /// Returns the address and the number of bytes it spans. The literal must not be followed
    /// by another digit, anything else may follow.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input does not start with an IPv4 literal.
    pub fn parse_prefix(bytes: &[u8]) -> Result<(Self, usize), LiteralError> {
        let mut cursor = Cursor::new(bytes);
        match ipv4(&mut cursor) {
            Some(ip) => Ok((ip, cursor.pos())),
            None => Err(cursor.failure("IPv4 address").into()),
        }
    }
}

impl From<Ipv4> for Ipv4Addr {
    #[inline]
    fn from(value: Ipv4) -> Self {
        Ipv4Addr::from(value.octets)
    }
}

impl From<Ipv4Addr> for Ipv4 {
    #[inline]
    fn from(value: Ipv4Addr) -> Self {
        Self { octets: value.octets() }
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl std::fmt::Debug for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// ===== Logic =====

const fn digit(byte: u8) -> u8 {
    byte - b'0'
}

/// dec-octet = "25" %x30-35          ; 250-255
///           / "2" %x30-34 DIGIT     ; 200-249
///           / %x30-31 DIGIT DIGIT   ; 000-199
///           / DIGIT DIGIT           ; 00-99
///           / DIGIT                 ; 0-9
///
/// Tried in that order, first match wins.
fn dec_octet(cursor: &mut Cursor) -> Option<u8> {
    let alternatives: [fn(&mut Cursor) -> Option<u8>; 5] = [
        |c| {
            c.eat_slice(b"25").then_some(())?;
            let d = c.next_if(|b| matches!(b, b'0'..=b'5'))?;
            Some(250 + digit(d))
        },
        |c| {
            c.eat(b'2').then_some(())?;
            let t = c.next_if(|b| matches!(b, b'0'..=b'4'))?;
            let d = c.next_if(|b| b.is_ascii_digit())?;
            Some(200 + digit(t) * 10 + digit(d))
        },
        |c| {
            let h = c.next_if(|b| matches!(b, b'0' | b'1'))?;
            let t = c.next_if(|b| b.is_ascii_digit())?;
            let d = c.next_if(|b| b.is_ascii_digit())?;
            Some(digit(h) * 100 + digit(t) * 10 + digit(d))
        },
        |c| {
            let t = c.next_if(|b| b.is_ascii_digit())?;
            let d = c.next_if(|b| b.is_ascii_digit())?;
            Some(digit(t) * 10 + digit(d))
        },
        |c| c.next_if(|b| b.is_ascii_digit()).map(digit),
    ];

    for alt in alternatives {
        if let Some(octet) = cursor.attempt(alt) {
            return Some(octet);
        }
    }
    cursor.fail(ErrorKind::Mismatch, "decimal octet")
}

/// An octet followed by another digit is a number that does not fit `dec-octet`.
fn octet_end(cursor: &mut Cursor) -> Option<()> {
    if cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
        return cursor.fail(ErrorKind::Range, "decimal octet in range 0-255");
    }
    Some(())
}

/// IPv4address, with a negative lookahead for a trailing digit.
pub(crate) fn ipv4(cursor: &mut Cursor) -> Option<Ipv4> {
    cursor.attempt(|c| {
        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            if i != 0 {
                c.expect(b'.', "\".\"")?;
            }
            *octet = dec_octet(c)?;
            octet_end(c)?;
        }
        Some(Ipv4 { octets })
    })
}
