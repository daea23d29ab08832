use std::ops::Range;

use super::percent::{self, Text};
use super::{Ipv4, Ipv6, ipv4::ipv4, ipv6::ipv6};
use crate::common::ErrorKind;
use crate::cursor::Cursor;
use crate::matches;

/// Shape of the host, decided while parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Address {
    Ipv4(Ipv4),
    Ipv6(Ipv6),
    IpvFuture,
    RegName,
}

impl Address {
    /// IP-literal hosts are written in brackets.
    pub(crate) const fn is_bracketed(&self) -> bool {
        matches!(self, Self::Ipv6(_) | Self::IpvFuture)
    }
}

#[derive(Debug)]
pub(crate) struct RawAuthority {
    pub user_info: Option<Text>,
    pub address: Address,
    pub host: Text,
    pub port: Option<Range<usize>>,
}

/// authority = [ userinfo "@" ] host [ ":" port ]
pub(crate) fn authority(cursor: &mut Cursor) -> Option<RawAuthority> {
    cursor.attempt(|c| {
        let user_info = c.attempt(|c| {
            let user_info = percent::decoded(c, matches::is_userinfo, 1, "userinfo")?;
            c.expect(b'@', "\"@\"")?;
            Some(user_info)
        });

        let (address, host) = host(c)?;

        // port = *DIGIT
        let port = c.eat(b':').then(|| {
            let start = c.pos();
            c.take_while(|b| b.is_ascii_digit());
            start..c.pos()
        });

        Some(RawAuthority { user_info, address, host, port })
    })
}

/// host = IP-literal / IPv4address / reg-name
fn host(cursor: &mut Cursor) -> Option<(Address, Text)> {
    if let Some(literal) = cursor.attempt(ip_literal) {
        return Some(literal);
    }

    let dotted = cursor.attempt(|c| {
        let start = c.pos();
        let ip = ipv4(c)?;
        // a dotted quad followed by more name characters is a reg-name
        if c.peek().is_some_and(|b| matches::is_regname(b) || b == b'%') {
            return c.fail(ErrorKind::Mismatch, "end of host");
        }
        Some((Address::Ipv4(ip), Text::Raw(start..c.pos())))
    });
    if dotted.is_some() {
        return dotted;
    }

    let name = percent::decoded(cursor, matches::is_regname, 1, "host")?;
    Some((Address::RegName, name))
}

/// IP-literal = "[" ( IPv6address / IPvFuture ) "]"
///
/// The brackets are not part of the host text.
fn ip_literal(cursor: &mut Cursor) -> Option<(Address, Text)> {
    cursor.expect(b'[', "\"[\"")?;
    let start = cursor.pos();

    let address = match cursor.attempt(ipvfuture) {
        Some(()) => Address::IpvFuture,
        None => Address::Ipv6(ipv6(cursor)?),
    };

    let end = cursor.pos();
    cursor.expect(b']', "\"]\"")?;
    Some((address, Text::Raw(start..end)))
}

/// IPvFuture = "v" [ HEXDIG ] "." *( unreserved / sub-delims / ":" )
fn ipvfuture(cursor: &mut Cursor) -> Option<()> {
    cursor.expect(b'v', "\"v\"")?;
    cursor.next_if(|b| b.is_ascii_hexdigit());
    cursor.expect(b'.', "\".\"")?;
    cursor.take_while(matches::is_ipvfuture);
    Some(())
}
