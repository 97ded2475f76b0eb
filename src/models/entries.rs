//! Dynamic form entries: titles, participations and recent results.

use serde::{Deserialize, Serialize};

use super::{CompetitionFormat, EntryId};

/// A (name, count) pair naming a competition and how many times it applies.
///
/// Used for both titles won and tournament participations. The name should
/// match a known competition but this is not enforced; unmatched names fall
/// back to a default weight in the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedEntry {
    /// Stable generated id (identity is never positional)
    pub id: EntryId,

    /// Competition name the entry refers to
    pub name: String,

    /// How many times it applies
    pub count: u32,
}

impl CountedEntry {
    /// Create a new entry with an auto-generated id.
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            id: EntryId::generate(),
            name: name.into(),
            count,
        }
    }
}

/// One of the player's most recent competitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentResult {
    /// Stable generated id
    pub id: EntryId,

    /// Competition name
    pub name: String,

    /// Online or in person
    pub format: CompetitionFormat,

    /// Finishing position, 1 = winner. Free-form positive integer; no
    /// competition-size bound is enforced.
    pub position: u32,
}

impl RecentResult {
    /// Create a new recent result with an auto-generated id.
    pub fn new(name: impl Into<String>, format: CompetitionFormat, position: u32) -> Self {
        Self {
            id: EntryId::generate(),
            name: name.into(),
            format,
            position,
        }
    }

    /// Position-based points before the format bonus.
    pub fn placement_points(&self) -> f64 {
        if self.position == 1 {
            5.0
        } else if self.position <= 3 {
            3.0
        } else if self.position <= 10 {
            1.0
        } else {
            0.0
        }
    }

    /// Check if this is a podium finish (top 3).
    pub fn is_podium(&self) -> bool {
        self.position <= 3
    }
}
