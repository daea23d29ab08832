use crate::common::diagnostic_error;

diagnostic_error! {
    /// An error when parsing a [`Uri`][super::Uri].
    pub struct UriError;
}

diagnostic_error! {
    /// An error when recognizing a standalone [`Ipv4`][super::Ipv4] or [`Ipv6`][super::Ipv6]
    /// literal.
    pub struct LiteralError;
}
