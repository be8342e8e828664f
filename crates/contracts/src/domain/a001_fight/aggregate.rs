use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Value objects
// ============================================================================

/// Side a fighter belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Heroes,
    Villains,
    /// Any team name the service adds later
    #[default]
    #[serde(other)]
    Other,
}

impl Team {
    pub fn label(&self) -> &'static str {
        match self {
            Team::Heroes => "Heroes",
            Team::Villains => "Villains",
            Team::Other => "Unknown",
        }
    }
}

/// Place where a fight happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FightLocation {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A finished fight as returned by `GET /api/fights`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: String,
    pub fight_date: DateTime<Utc>,

    pub winner_name: String,
    pub winner_level: i32,
    #[serde(default)]
    pub winner_powers: Option<String>,
    #[serde(default)]
    pub winner_picture: Option<String>,

    pub loser_name: String,
    pub loser_level: i32,
    #[serde(default)]
    pub loser_powers: Option<String>,
    #[serde(default)]
    pub loser_picture: Option<String>,

    #[serde(default)]
    pub winner_team: Team,
    #[serde(default)]
    pub loser_team: Team,

    #[serde(default)]
    pub location: Option<FightLocation>,
}

impl Fight {
    /// One-line result, e.g. "Superman (level 10) defeated Lex Luthor (level 5)"
    pub fn headline(&self) -> String {
        format!(
            "{} (level {}) defeated {} (level {})",
            self.winner_name, self.winner_level, self.loser_name, self.loser_level
        )
    }

    pub fn location_name(&self) -> &str {
        self.location
            .as_ref()
            .map(|l| l.name.as_str())
            .unwrap_or("-")
    }

    /// Picks the most recent fight by date; ties keep the first one seen.
    pub fn latest(fights: &[Fight]) -> Option<&Fight> {
        fights.iter().fold(None, |best: Option<&Fight>, f| match best {
            Some(b) if b.fight_date >= f.fight_date => Some(b),
            _ => Some(f),
        })
    }
}
