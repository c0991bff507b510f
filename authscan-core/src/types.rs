//! Shared value types.

use std::borrow::Borrow;
use std::fmt;

/// Source address pulled out of a failure line.
///
/// Kept as the exact dotted-quad text from the log. Octets are not range
/// checked, so `999.999.999.999` is a valid `Address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for Address {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_address_display_is_raw_text() {
        let addr = Address::from("192.168.1.10");
        assert_eq!(addr.to_string(), "192.168.1.10");
        assert_eq!(addr.as_str(), "192.168.1.10");
    }

    #[test]
    fn test_address_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Address::from("10.0.0.1"), 7u64);
        assert_eq!(map.get("10.0.0.1"), Some(&7));
    }

    #[test]
    fn test_address_out_of_range_octets_kept() {
        let addr = Address::from("999.999.999.999");
        assert_eq!(addr.as_str(), "999.999.999.999");
    }
}
