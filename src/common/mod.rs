//! Shared types.
mod bytestr;
mod error;

pub use bytestr::ByteStr;
pub use error::ErrorKind;
pub(crate) use error::diagnostic_error;
