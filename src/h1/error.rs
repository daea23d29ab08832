use crate::common::diagnostic_error;

diagnostic_error! {
    /// An error when parsing a request head.
    ///
    /// Parsing either consumes the whole head or fails, the error points at the furthest byte
    /// any alternative reached.
    pub struct ParseError;
}
