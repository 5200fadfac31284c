//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts. Identifiers are
//! minted by the league's document store; the engine only carries them.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(PlayerId, "Unique identifier for a player in the league's player pool.");
define_id!(TeamId, "Unique identifier for a fantasy team.");
define_id!(SeasonId, "Identifier for a league season (e.g. \"2025-26\").");
define_id!(LeagueId, "Unique identifier for a league.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_new_and_display() {
        let id = PlayerId::new("p-123");
        assert_eq!(id.as_str(), "p-123");
        assert_eq!(format!("{id}"), "p-123");
    }

    #[test]
    fn player_id_equality() {
        let id1 = PlayerId::new("p-123");
        let id2 = PlayerId::new("p-123");
        let id3 = PlayerId::new("p-456");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn team_id_from_string() {
        let id: TeamId = "team-1".into();
        assert_eq!(id.as_str(), "team-1");

        let id: TeamId = String::from("team-2").into();
        assert_eq!(id.as_str(), "team-2");
    }

    #[test]
    fn season_id_into_inner() {
        let id = SeasonId::new("2025-26");
        assert_eq!(id.into_inner(), "2025-26");
    }

    #[test]
    fn league_id_as_ref() {
        let id = LeagueId::new("lg-9");
        let s: &str = id.as_ref();
        assert_eq!(s, "lg-9");
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = PlayerId::new("p-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-7\"");
        let parsed: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
