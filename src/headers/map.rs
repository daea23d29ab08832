use super::{HeaderField, iter::Iter};
use crate::common::ByteStr;

/// HTTP Headers.
///
/// Fields are kept in the order they were inserted. A name appears at most once, see
/// [`insert_if_absent`][HeaderMap::insert_if_absent].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<HeaderField>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { fields: Vec::with_capacity(capacity) }
    }

    /// Returns headers length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub(crate) fn fields(&self) -> &[HeaderField] {
        &self.fields
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns `true` if the map contains a header value for given header name.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns a reference to the header value for given header name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&ByteStr> {
        self.field(name).map(HeaderField::value_bytestr)
    }

    /// Returns an iterator over headers as name and value pairs, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    fn field(&self, name: &str) -> Option<&HeaderField> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Insert a header unless one with the same name exists.
    ///
    /// Returns `false` if the name was already present, in which case the map is unchanged and
    /// the first value stays.
    pub fn insert_if_absent(&mut self, name: impl Into<ByteStr>, value: impl Into<ByteStr>) -> bool {
        let name = name.into();
        if self.contains_key(&name) {
            return false;
        }
        self.fields.push(HeaderField::new(name, value.into()));
        true
    }

    /// Removes all headers.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
