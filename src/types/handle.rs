//! Entity identifiers (group code 5, and 330 references)
//!
//! On the wire a handle is a hexadecimal string. An entity whose identifier
//! was never assigned carries no handle at all (`Option<Handle>::None`), so
//! every `u64` value, including zero, is a valid identifier here.

use std::fmt;

/// A document-unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Parse the hexadecimal wire form (either case, surrounding blanks ignored)
    pub fn parse_hex(text: &str) -> Option<Self> {
        u64::from_str_radix(text.trim(), 16).ok().map(Handle)
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

impl fmt::UpperHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_creation() {
        let handle = Handle::new(0x1234);
        assert_eq!(handle.value(), 0x1234);
        assert_eq!(u64::from(handle), 0x1234);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Handle::parse_hex("1f"), Some(Handle::new(0x1F)));
        assert_eq!(Handle::parse_hex(" 2A "), Some(Handle::new(0x2A)));
        assert_eq!(Handle::parse_hex("0"), Some(Handle::new(0)));
        assert_eq!(Handle::parse_hex("xyz"), None);
        assert_eq!(Handle::parse_hex(""), None);
    }

    #[test]
    fn test_formatting() {
        let handle = Handle::new(255);
        assert_eq!(format!("{:X}", handle), "FF");
        assert_eq!(handle.to_string(), "0xFF");
    }
}
