//! Crew roster records for the coordination features

use serde::{Deserialize, Serialize};

/// One member of a cleanup crew
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrewMember {
    /// Display name
    pub name: String,
    /// Emoji avatar shown on the crew card
    pub avatar: String,
    /// Whether this member leads the crew
    #[serde(default)]
    pub is_leader: bool,
    /// Whether this member joined within the last week
    #[serde(default)]
    pub joined_recently: bool,
    /// Number of cleanups this member contributed to
    #[serde(default)]
    pub contributions: u32,
}

/// Crew roster plus aggregate impact figures
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrewSummary {
    /// Crew members
    pub members: Vec<CrewMember>,
    /// Total cleanups this crew completed
    pub total_cleanups: u32,
    /// Human-readable impact line
    pub impact: String,
}

impl CrewSummary {
    /// Demo roster served until real crew coordination lands
    #[must_use]
    pub fn demo() -> Self {
        Self {
            members: vec![
                CrewMember {
                    name: "Alex".to_string(),
                    avatar: "👩‍🌾".to_string(),
                    is_leader: false,
                    joined_recently: true,
                    contributions: 0,
                },
                CrewMember {
                    name: "Jordan".to_string(),
                    avatar: "🧑‍🎓".to_string(),
                    is_leader: true,
                    joined_recently: false,
                    contributions: 0,
                },
                CrewMember {
                    name: "Sam".to_string(),
                    avatar: "👨‍💼".to_string(),
                    is_leader: false,
                    joined_recently: false,
                    contributions: 15,
                },
            ],
            total_cleanups: 23,
            impact: "2.3 tons collected".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_roster_has_one_leader() {
        let crew = CrewSummary::demo();
        assert_eq!(crew.members.len(), 3);
        assert_eq!(crew.members.iter().filter(|m| m.is_leader).count(), 1);
        assert_eq!(crew.total_cleanups, 23);
    }
}
