//! Generated string ids for user-created entities.
//!
//! Reference competitions ship with fixed ids (`c1`..`c5`); everything the
//! user creates at runtime gets a timestamp-based id with a process-wide
//! discriminator, so two entries created within the same millisecond still
//! get distinct ids.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Prefix distinguishing user-created competitions from reference entries.
pub const CUSTOM_COMPETITION_PREFIX: &str = "custom-";

static NEXT_DISCRIMINATOR: AtomicU64 = AtomicU64::new(0);

fn next_discriminator() -> u64 {
    NEXT_DISCRIMINATOR.fetch_add(1, Ordering::Relaxed)
}

/// Id of a competition, either a fixed reference entry or a generated
/// custom one.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitionId(String);

impl CompetitionId {
    /// Create a CompetitionId from an existing id string.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a unique id for a user-created competition.
    pub fn generate_custom() -> Self {
        Self(format!(
            "{}{}-{}",
            CUSTOM_COMPETITION_PREFIX,
            Utc::now().timestamp_millis(),
            next_discriminator()
        ))
    }

    /// Whether this id belongs to a user-created competition.
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_COMPETITION_PREFIX)
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompetitionId({})", self.0)
    }
}

impl From<String> for CompetitionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CompetitionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Id of a dynamic form entry (title, participation or recent result).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    /// Create an EntryId from an existing id string.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a unique id for a new form entry.
    pub fn generate() -> Self {
        Self(format!(
            "e-{}-{}",
            Utc::now().timestamp_millis(),
            next_discriminator()
        ))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_id_has_prefix() {
        let id = CompetitionId::generate_custom();
        assert!(id.as_str().starts_with(CUSTOM_COMPETITION_PREFIX));
        assert!(id.is_custom());
    }

    #[test]
    fn test_reference_id_is_not_custom() {
        let id = CompetitionId::from("c1");
        assert!(!id.is_custom());
    }

    #[test]
    fn test_custom_ids_unique() {
        let ids: Vec<CompetitionId> =
            (0..100).map(|_| CompetitionId::generate_custom()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_entry_ids_unique() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_competition_id_serialization() {
        let id = CompetitionId::from("c4");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c4\"");

        let deserialized: CompetitionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_competition_id_display() {
        let id = CompetitionId::from("c2");
        assert_eq!(format!("{}", id), "c2");
    }

    #[test]
    fn test_entry_id_debug() {
        let id = EntryId::from("e-1-1");
        let debug_str = format!("{:?}", id);
        assert!(debug_str.contains("e-1-1"));
    }
}
