//! ABNF character classes.
//!
//! Every class is a 256 entry lookup table built at compile time, so a class check is a single
//! indexed load. Multi byte productions such as `pct-encoded` are not classes, they are rules,
//! see [`crate::uri`].

macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== Blocks =====

byte_map! {
    /// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    #[inline(always)]
    pub const fn is_unreserved(byte: u8) {
        byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'.' | b'_' | b'~')
    }
}

byte_map! {
    /// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
    #[inline(always)]
    #[allow(dead_code, reason = "no rule matches gen-delims as a class")]
    pub const fn is_gen_delim(byte: u8) {
        matches!(byte, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@')
    }
}

byte_map! {
    /// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
    ///            / "*" / "+" / "," / ";" / "="
    #[inline(always)]
    pub const fn is_sub_delim(byte: u8) {
        matches!(
            byte,
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        )
    }
}

byte_map! {
    /// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
    ///
    /// `pct-encoded` is matched separately.
    #[inline(always)]
    pub const fn is_pchar(byte: u8) {
        is_unreserved(byte)
        || is_sub_delim(byte)
        || matches!(byte, b':' | b'@')
    }
}

// ===== URI =====

byte_map! {
    /// scheme tail = ALPHA / DIGIT / "+" / "-" / "."
    #[inline(always)]
    pub const fn is_scheme(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
    #[inline(always)]
    pub const fn is_userinfo(byte: u8) {
        is_unreserved(byte) || is_sub_delim(byte) || matches!(byte, b':')
    }
}

byte_map! {
    /// reg-name = *( unreserved / pct-encoded / sub-delims )
    #[inline(always)]
    pub const fn is_regname(byte: u8) {
        is_unreserved(byte) || is_sub_delim(byte)
    }
}

byte_map! {
    /// IPvFuture tail = unreserved / sub-delims / ":"
    #[inline(always)]
    pub const fn is_ipvfuture(byte: u8) {
        is_unreserved(byte) || is_sub_delim(byte) || matches!(byte, b':')
    }
}

byte_map! {
    /// segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )
    #[inline(always)]
    pub const fn is_pchar_nc(byte: u8) {
        is_unreserved(byte) || is_sub_delim(byte) || matches!(byte, b'@')
    }
}

byte_map! {
    /// query    = *( pchar / "/" / "?" )
    /// fragment = *( pchar / "/" / "?" )
    #[inline(always)]
    pub const fn is_query(byte: u8) {
        is_pchar(byte) || matches!(byte, b'/' | b'?')
    }
}

// ===== HTTP =====

byte_map! {
    /// method = 1*20( UPPER / DIGIT )
    #[inline(always)]
    pub const fn is_method(byte: u8) {
        byte.is_ascii_uppercase() || byte.is_ascii_digit()
    }
}

byte_map! {
    /// header-name = 1*( ALPHA / DIGIT / "-" )
    #[inline(always)]
    pub const fn is_header_name(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'-')
    }
}

byte_map! {
    /// header-value = 1*( VCHAR / SP / HTAB )
    #[inline(always)]
    pub const fn is_header_value(byte: u8) {
        matches!(byte, 0x20..=0x7E | b'\t')
    }
}

/// Value of a single hex digit.
#[inline]
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[test]
fn test_classes() {
    for byte in b"azAZ09-._~" {
        assert!(is_unreserved(*byte));
        assert!(is_pchar(*byte));
    }
    for byte in b"!$&'()*+,;=" {
        assert!(is_sub_delim(*byte));
        assert!(!is_unreserved(*byte));
        assert!(is_regname(*byte));
    }
    for byte in b":/?#[]@" {
        assert!(is_gen_delim(*byte));
        assert!(!is_sub_delim(*byte));
        assert!(!is_regname(*byte));
    }
    assert!(is_pchar(b':'));
    assert!(is_pchar(b'@'));
    assert!(!is_pchar(b'/'));
    assert!(!is_pchar(b'%'));
    assert!(!is_pchar_nc(b':'));
    assert!(is_query(b'/'));
    assert!(is_query(b'?'));
    assert!(!is_query(b'#'));

    assert!(is_method(b'G'));
    assert!(is_method(b'7'));
    assert!(!is_method(b'g'));
    assert!(!is_method(b'-'));

    assert!(is_header_name(b'-'));
    assert!(!is_header_name(b'_'));
    assert!(is_header_value(b'\t'));
    assert!(is_header_value(b' '));
    assert!(!is_header_value(b'\r'));
    assert!(!is_header_value(0x7F));
    assert!(!is_header_value(0x80));
}

#[test]
fn test_hex_value() {
    assert_eq!(hex_value(b'0'), Some(0));
    assert_eq!(hex_value(b'9'), Some(9));
    assert_eq!(hex_value(b'a'), Some(10));
    assert_eq!(hex_value(b'F'), Some(15));
    assert_eq!(hex_value(b'g'), None);
    assert_eq!(hex_value(b'%'), None);
}
