use crate::common::ByteStr;

/// Header Field.
///
/// Contains a header name and its value, both as received.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderField {
    name: ByteStr,
    value: ByteStr,
}

impl HeaderField {
    pub(crate) const fn new(name: ByteStr, value: ByteStr) -> Self {
        Self { name, value }
    }

    /// Returns the header name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the header value as [`ByteStr`].
    #[inline]
    pub const fn value_bytestr(&self) -> &ByteStr {
        &self.value
    }
}

impl std::fmt::Debug for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {:?}", self.name, self.value)
    }
}
