//! Competitions, their prestige tiers and formats.

use serde::{Deserialize, Serialize};

use super::CompetitionId;

/// Prestige ranking of a competition, S (highest) through C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionTier {
    S,
    A,
    B,
    C,
}

impl CompetitionTier {
    /// All tiers, highest first.
    pub const ALL: [CompetitionTier; 4] = [
        CompetitionTier::S,
        CompetitionTier::A,
        CompetitionTier::B,
        CompetitionTier::C,
    ];

    /// Base value for having played a competition of this tier.
    pub fn participation_value(&self) -> f64 {
        match self {
            CompetitionTier::S => 4.0,
            CompetitionTier::A => 3.0,
            CompetitionTier::B => 2.0,
            CompetitionTier::C => 1.0,
        }
    }

    /// Weight of a title won at this tier.
    pub fn title_weight(&self) -> f64 {
        match self {
            CompetitionTier::S => 7.0,
            CompetitionTier::A => 5.0,
            CompetitionTier::B => 3.0,
            CompetitionTier::C => 1.5,
        }
    }
}

impl std::fmt::Display for CompetitionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionTier::S => write!(f, "S"),
            CompetitionTier::A => write!(f, "A"),
            CompetitionTier::B => write!(f, "B"),
            CompetitionTier::C => write!(f, "C"),
        }
    }
}

/// How a competition is played.
///
/// In-person events carry multiplier bonuses across scoring categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitionFormat {
    #[default]
    Online,
    InPerson,
}

impl CompetitionFormat {
    /// Multiplier applied to the tier value of a played competition.
    pub fn participation_multiplier(&self) -> f64 {
        match self {
            CompetitionFormat::Online => 1.0,
            CompetitionFormat::InPerson => 1.5,
        }
    }

    /// Multiplier applied to title weights and recent placements.
    pub fn placement_multiplier(&self) -> f64 {
        match self {
            CompetitionFormat::Online => 1.0,
            CompetitionFormat::InPerson => 1.2,
        }
    }

    /// Whether the competition is played in person.
    pub fn is_in_person(&self) -> bool {
        matches!(self, CompetitionFormat::InPerson)
    }
}

impl std::fmt::Display for CompetitionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionFormat::Online => write!(f, "online"),
            CompetitionFormat::InPerson => write!(f, "in person"),
        }
    }
}

/// A competition a player can have played, won or placed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    /// Unique identifier (fixed for reference entries, generated for
    /// custom ones)
    pub id: CompetitionId,

    /// Display name
    pub name: String,

    /// Online or in person
    pub format: CompetitionFormat,

    /// Prestige tier
    pub tier: CompetitionTier,
}

impl Competition {
    /// Create a reference competition with a fixed id.
    pub fn reference(
        id: &str,
        name: &str,
        format: CompetitionFormat,
        tier: CompetitionTier,
    ) -> Self {
        Self {
            id: CompetitionId::from(id),
            name: name.to_string(),
            format,
            tier,
        }
    }

    /// Create a user-defined competition with a generated id.
    pub fn custom(name: String, format: CompetitionFormat, tier: CompetitionTier) -> Self {
        Self {
            id: CompetitionId::generate_custom(),
            name,
            format,
            tier,
        }
    }

    /// Whether this competition was created by the user.
    pub fn is_custom(&self) -> bool {
        self.id.is_custom()
    }
}

/// The fixed reference table of well-known competitions.
///
/// Immutable for the process lifetime; custom competitions live only inside
/// the profile being edited.
pub fn reference_competitions() -> Vec<Competition> {
    vec![
        Competition::reference("c1", "LAFF", CompetitionFormat::Online, CompetitionTier::B),
        Competition::reference("c2", "COPA FF", CompetitionFormat::Online, CompetitionTier::A),
        Competition::reference(
            "c3",
            "FFWS BR",
            CompetitionFormat::InPerson,
            CompetitionTier::A,
        ),
        Competition::reference("c4", "EWC", CompetitionFormat::InPerson, CompetitionTier::S),
        Competition::reference(
            "c5",
            "FFWS WORLD",
            CompetitionFormat::InPerson,
            CompetitionTier::S,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participation_values() {
        assert_eq!(CompetitionTier::S.participation_value(), 4.0);
        assert_eq!(CompetitionTier::A.participation_value(), 3.0);
        assert_eq!(CompetitionTier::B.participation_value(), 2.0);
        assert_eq!(CompetitionTier::C.participation_value(), 1.0);
    }

    #[test]
    fn test_title_weights() {
        assert_eq!(CompetitionTier::S.title_weight(), 7.0);
        assert_eq!(CompetitionTier::A.title_weight(), 5.0);
        assert_eq!(CompetitionTier::B.title_weight(), 3.0);
        assert_eq!(CompetitionTier::C.title_weight(), 1.5);
    }

    #[test]
    fn test_format_multipliers() {
        assert_eq!(CompetitionFormat::InPerson.participation_multiplier(), 1.5);
        assert_eq!(CompetitionFormat::Online.participation_multiplier(), 1.0);
        assert_eq!(CompetitionFormat::InPerson.placement_multiplier(), 1.2);
        assert_eq!(CompetitionFormat::Online.placement_multiplier(), 1.0);
        assert!(CompetitionFormat::InPerson.is_in_person());
        assert!(!CompetitionFormat::Online.is_in_person());
    }

    #[test]
    fn test_reference_table() {
        let table = reference_competitions();
        assert_eq!(table.len(), 5);
        assert!(table.iter().all(|c| !c.is_custom()));

        let ewc = table.iter().find(|c| c.name == "EWC").unwrap();
        assert_eq!(ewc.tier, CompetitionTier::S);
        assert!(ewc.format.is_in_person());
    }

    #[test]
    fn test_reference_table_ids_unique() {
        let table = reference_competitions();
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_custom_competition() {
        let comp = Competition::custom(
            "Liga Local".to_string(),
            CompetitionFormat::Online,
            CompetitionTier::C,
        );
        assert!(comp.is_custom());
        assert_eq!(comp.name, "Liga Local");
    }

    #[test]
    fn test_format_serialization() {
        let json = serde_json::to_string(&CompetitionFormat::InPerson).unwrap();
        assert_eq!(json, "\"IN_PERSON\"");

        let deserialized: CompetitionFormat = serde_json::from_str("\"ONLINE\"").unwrap();
        assert_eq!(deserialized, CompetitionFormat::Online);
    }

    #[test]
    fn test_competition_serialization() {
        let table = reference_competitions();
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: Vec<Competition> = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }
}
