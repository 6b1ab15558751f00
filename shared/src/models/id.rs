//! Record identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored record.
///
/// The memory-backed store assigns small sequential integers; the
/// document-backed store assigns opaque string keys. A deployment uses
/// one or the other, never both, so the two variants never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Sequential integer id (memory-backed mode)
    Seq(u64),
    /// Opaque string key (document-backed mode)
    Key(String),
}

impl RecordId {
    /// Parse an id from a path parameter.
    ///
    /// Numeric parameters become [`RecordId::Seq`]; anything else is
    /// treated as an opaque key.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => Self::Seq(n),
            Err(_) => Self::Key(raw.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seq(n) => write!(f, "{n}"),
            Self::Key(k) => write!(f, "{k}"),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self::Seq(n)
    }
}

impl From<&str> for RecordId {
    fn from(k: &str) -> Self {
        Self::Key(k.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_param() {
        assert_eq!(RecordId::parse("42"), RecordId::Seq(42));
    }

    #[test]
    fn test_parse_opaque_param() {
        assert_eq!(
            RecordId::parse("hN3kP9aQ"),
            RecordId::Key("hN3kP9aQ".to_string())
        );
    }

    #[test]
    fn test_json_round_trip() {
        let seq: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(seq, RecordId::Seq(7));
        assert_eq!(serde_json::to_string(&seq).unwrap(), "7");

        let key: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(key, RecordId::Key("abc".to_string()));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"abc\"");
    }
}
