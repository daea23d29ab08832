//! HTTP Header collection.
//!
//! Names are compared exactly as received, `Host` and `host` are different headers.
mod field;
mod map;
mod iter;

pub use field::HeaderField;
pub use map::HeaderMap;
pub use iter::Iter;

#[cfg(test)]
mod test;
