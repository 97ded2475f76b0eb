//! Player roles and their base market weights.

use serde::{Deserialize, Serialize};

/// In-game role of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Rush1,
    Rush2,
    Flex,
    Sniper,
    Grenadier,
    /// Catch-all for role values this build does not recognize.
    #[serde(other)]
    Unspecified,
}

impl Role {
    /// The roles a player can actually pick on the form.
    pub const ALL: [Role; 5] = [
        Role::Rush1,
        Role::Rush2,
        Role::Flex,
        Role::Sniper,
        Role::Grenadier,
    ];

    /// Base market weight of this role.
    ///
    /// Unrecognized roles fall back to a flat 5 rather than failing.
    pub fn base_weight(&self) -> f64 {
        match self {
            Role::Rush1 => 12.0,
            Role::Rush2 => 11.0,
            Role::Flex => 10.0,
            Role::Sniper => 9.0,
            Role::Grenadier => 9.0,
            Role::Unspecified => 5.0,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Rush1 => write!(f, "RUSH1"),
            Role::Rush2 => write!(f, "RUSH2"),
            Role::Flex => write!(f, "FLEX"),
            Role::Sniper => write!(f, "SNIPER"),
            Role::Grenadier => write!(f, "GRENADIER"),
            Role::Unspecified => write!(f, "UNSPECIFIED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_weights() {
        assert_eq!(Role::Rush1.base_weight(), 12.0);
        assert_eq!(Role::Rush2.base_weight(), 11.0);
        assert_eq!(Role::Flex.base_weight(), 10.0);
        assert_eq!(Role::Sniper.base_weight(), 9.0);
        assert_eq!(Role::Grenadier.base_weight(), 9.0);
        assert_eq!(Role::Unspecified.base_weight(), 5.0);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Rush1).unwrap();
        assert_eq!(json, "\"RUSH1\"");

        let deserialized: Role = serde_json::from_str("\"GRENADIER\"").unwrap();
        assert_eq!(deserialized, Role::Grenadier);
    }

    #[test]
    fn test_unknown_role_falls_back() {
        let deserialized: Role = serde_json::from_str("\"IGL\"").unwrap();
        assert_eq!(deserialized, Role::Unspecified);
        assert_eq!(deserialized.base_weight(), 5.0);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Rush1), "RUSH1");
        assert_eq!(format!("{}", Role::Grenadier), "GRENADIER");
    }

    #[test]
    fn test_default_role() {
        assert_eq!(Role::default(), Role::Rush1);
    }
}
