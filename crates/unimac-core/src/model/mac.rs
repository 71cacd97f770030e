// ── MacAddress ──

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MAC address, normalized to lowercase colon-separated format (aa:bb:cc:dd:ee:ff).
///
/// The empty address is valid and stands for "no reference": clients that
/// are not attached to a switch carry an empty switch MAC.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address from any common format.
    /// Accepts colon-separated, dash-separated, or bare hex.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().trim().to_lowercase().replace('-', ":");
        if normalized.len() == 12 && normalized.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self(colonize(&normalized));
        }
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `aabbccddeeff` → `aa:bb:cc:dd:ee:ff`. Input must be ASCII.
fn colonize(hex: &str) -> String {
    let mut out = String::with_capacity(17);
    for (i, pair) in hex.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            out.push(':');
        }
        out.extend(pair.iter().copied().map(char::from));
    }
    out
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for MacAddress {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Option<&String>> for MacAddress {
    fn from(raw: Option<&String>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_dashes_and_case() {
        let mac = MacAddress::new("AA-BB-CC-DD-EE-FF");
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn bare_hex_gains_colons() {
        assert_eq!(MacAddress::new("AABBCC001122").as_str(), "aa:bb:cc:00:11:22");
        assert_eq!(
            MacAddress::new("aabbcc001122"),
            MacAddress::new("aa:bb:cc:00:11:22")
        );
        // Not twelve hex digits: left as given.
        assert_eq!(MacAddress::new("aabbcc").as_str(), "aabbcc");
    }

    #[test]
    fn equal_after_normalization() {
        assert_eq!(
            MacAddress::new("AA:BB:CC:00:00:01"),
            "aa-bb-cc-00-00-01".parse().unwrap()
        );
    }

    #[test]
    fn orders_lexicographically() {
        let mut macs = vec![
            MacAddress::new("aa:00:00:00:00:00"),
            MacAddress::new("11:22:33:00:00:00"),
            MacAddress::new("0a:00:00:00:00:00"),
        ];
        macs.sort();
        let sorted: Vec<&str> = macs.iter().map(MacAddress::as_str).collect();
        assert_eq!(
            sorted,
            ["0a:00:00:00:00:00", "11:22:33:00:00:00", "aa:00:00:00:00:00"]
        );
    }

    #[test]
    fn missing_reference_is_empty() {
        assert!(MacAddress::from(None).is_empty());
        assert!(MacAddress::default().is_empty());
    }
}
