/// Kind of grammar failure.
///
/// Every error type in this crate carries one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input does not match any alternative at a grammar point.
    Mismatch,
    /// A numeric value is out of range, e.g. an IPv4 octet above 255, too many IPv6 groups, or
    /// a configured limit is exceeded.
    Range,
    /// Malformed percent escape, `%` not followed by two hex digits.
    Encoding,
}

impl ErrorKind {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::Mismatch => "unexpected input",
            Self::Range => "value out of range",
            Self::Encoding => "invalid percent encoding",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Generates an error type carrying an [`ErrorKind`], the byte offset where parsing stopped and
/// a description of what was expected there.
macro_rules! diagnostic_error {
    {
        $(#[$meta:meta])*
        pub struct $name:ident;
    } => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            kind: $crate::common::ErrorKind,
            position: usize,
            expected: &'static str,
        }

        impl $name {
            pub(crate) const fn new(
                kind: $crate::common::ErrorKind,
                position: usize,
                expected: &'static str,
            ) -> Self {
                Self { kind, position, expected }
            }

            /// Returns the kind of failure.
            #[inline]
            pub const fn kind(&self) -> $crate::common::ErrorKind {
                self.kind
            }

            /// Returns the byte offset of the furthest point parsing reached.
            #[inline]
            pub const fn position(&self) -> usize {
                self.position
            }

            /// Returns a description of what was expected at [`position`][Self::position].
            #[inline]
            pub const fn expected(&self) -> &'static str {
                self.expected
            }
        }

        impl From<$crate::cursor::Failure> for $name {
            fn from(value: $crate::cursor::Failure) -> Self {
                Self::new(value.kind, value.position, value.expected)
            }
        }

        impl std::error::Error for $name { }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} at byte {}, expected {}", self.kind, self.position, self.expected)
            }
        }
    };
}

pub(crate) use diagnostic_error;
