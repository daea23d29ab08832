use std::fmt;

use super::Uri;

/// Components are written back as stored, decoded components are not re-encoded.
///
/// Decoded bytes that are not UTF-8 are written as `U+FFFD`.
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if let Some(address) = &self.address {
            f.write_str("//")?;
            if !self.user_info.is_empty() {
                write!(f, "{}@", self.user_info())?;
            }
            if address.is_bracketed() {
                write!(f, "[{}]", self.host())?;
            } else {
                f.write_str(&self.host())?;
            }
            if !self.port.is_empty() {
                write!(f, ":{}", self.port)?;
            }
        }
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query())?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme)
            .field("user_info", &self.user_info())
            .field("host", &self.host())
            .field("port", &self.port)
            .field("path", &self.path)
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}
