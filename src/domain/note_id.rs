//! Opaque note identifier with validation and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

use super::ident::{self, ParseIdError};

/// A unique identifier for notes.
///
/// Identifiers are opaque strings: anything non-empty that is safe to place
/// in a URL path segment is accepted, so ids minted by other systems keep
/// working. Ids created here are ULIDs, which sort chronologically.
///
/// # Examples
///
/// ```
/// use jotter::domain::NoteId;
///
/// let id: NoteId = "1".parse().unwrap();
/// assert_eq!(id.as_str(), "1");
///
/// let fresh = NoteId::new();
/// assert_eq!(fresh.as_str().len(), 26);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Mints a new ULID-based NoteId.
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ident::validate("note id", s)?;
        Ok(Self(s.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
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
    use std::collections::HashSet;

    #[test]
    fn new_creates_valid_ulid() {
        let id = NoteId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 26, "ULID should be 26 characters");
        assert!(Ulid::from_string(&s).is_ok());
    }

    #[test]
    fn parse_accepts_foreign_ids() {
        let id: NoteId = "1".parse().unwrap();
        assert_eq!(id.as_str(), "1");

        let id: NoteId = "cl9x2k0a10000qzrmn8v1h2b3".parse().unwrap();
        assert_eq!(id.to_string(), "cl9x2k0a10000qzrmn8v1h2b3");
    }

    #[test]
    fn parse_rejects_empty_and_path_breaking_values() {
        assert!("".parse::<NoteId>().is_err());
        assert!("a/b".parse::<NoteId>().is_err());
        assert!("  ".parse::<NoteId>().is_err());
    }

    #[test]
    fn parse_error_mentions_note_id() {
        let err = "".parse::<NoteId>().unwrap_err();
        assert!(err.to_string().contains("note id"));
    }

    #[test]
    fn multiple_new_ids_are_unique() {
        let ids: Vec<NoteId> = (0..100).map(|_| NoteId::new()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "all generated IDs should be unique");
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\")");
    }

    #[test]
    fn serde_roundtrip_through_json() {
        let id: NoteId = "note-42".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"note-42\"");
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let result: Result<NoteId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
