//! Cluster operation identifier.
//!
//! Rendered as four dash-separated lowercase hex parts, e.g. `1-2-3-4` or
//! `deadbeef-0-12ab-ffffffff`. The all-zero value `0-0-0-0` is the sentinel
//! the controller uses for "no operation has run yet"; [`OperationId::is_nil`]
//! is the one place that comparison lives.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Identifier of one cluster operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationId([u32; 4]);

/// Errors from parsing an operation id string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationIdError {
    /// The input string is empty.
    #[error("operation id cannot be empty")]
    Empty,

    /// The input does not have exactly four dash-separated parts.
    #[error("operation id must have 4 parts, got {found}")]
    WrongPartCount { found: usize },

    /// A part is not a valid 32-bit hex number.
    #[error("invalid operation id part {part:?}")]
    InvalidPart { part: String },
}

impl OperationId {
    /// The sentinel meaning "no operation has run yet".
    pub const NIL: Self = Self([0; 4]);

    #[must_use]
    pub const fn from_parts(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self([a, b, c, d])
    }

    /// True for the all-zero sentinel. Any other value is treated as a real
    /// operation reference; well-formedness is not checked here.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self.0, [0, 0, 0, 0])
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::NIL
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a:x}-{b:x}-{c:x}-{d:x}")
    }
}

impl std::str::FromStr for OperationId {
    type Err = OperationIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(OperationIdError::Empty);
        }

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 4 {
            return Err(OperationIdError::WrongPartCount { found: parts.len() });
        }

        let mut out = [0u32; 4];
        for (slot, part) in out.iter_mut().zip(&parts) {
            *slot = u32::from_str_radix(part, 16).map_err(|_| OperationIdError::InvalidPart {
                part: (*part).to_string(),
            })?;
        }

        Ok(Self(out))
    }
}

impl Serialize for OperationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OperationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_dash_separated_hex() {
        let id = OperationId::from_parts(1, 2, 3, 4);
        assert_eq!(id.to_string(), "1-2-3-4");

        let id = OperationId::from_parts(0xdeadbeef, 0, 0x12ab, u32::MAX);
        assert_eq!(id.to_string(), "deadbeef-0-12ab-ffffffff");
    }

    #[test]
    fn nil_formats_as_zeros() {
        assert_eq!(OperationId::NIL.to_string(), "0-0-0-0");
        assert!(OperationId::NIL.is_nil());
        assert!(!OperationId::from_parts(0, 0, 0, 1).is_nil());
    }

    #[test]
    fn parse_roundtrip() {
        let id = OperationId::from_parts(0xabc, 7, 0, 0xffff);
        let parsed: OperationId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_empty() {
        let err = "".parse::<OperationId>().unwrap_err();
        assert_eq!(err, OperationIdError::Empty);
    }

    #[test]
    fn parse_rejects_wrong_part_count() {
        let err = "1-2-3".parse::<OperationId>().unwrap_err();
        assert_eq!(err, OperationIdError::WrongPartCount { found: 3 });
    }

    #[test]
    fn parse_rejects_bad_hex() {
        let err = "1-2-xyz-4".parse::<OperationId>().unwrap_err();
        assert_eq!(
            err,
            OperationIdError::InvalidPart {
                part: "xyz".to_string()
            }
        );
    }

    #[test]
    fn json_roundtrip() {
        let id = OperationId::from_parts(1, 2, 3, 4);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1-2-3-4\"");
        let parsed: OperationId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
