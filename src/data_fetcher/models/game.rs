use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single scheduled game, keyed to the local calendar date it is played on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub date: NaiveDate,
    pub home: String,
    pub away: String,
}

impl Game {
    pub fn new(date: NaiveDate, home: impl Into<String>, away: impl Into<String>) -> Self {
        Game {
            date,
            home: home.into(),
            away: away.into(),
        }
    }

    /// Whether `team` plays in this game, home or away.
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}

/// Games fetched for one week plus the number of events whose local date
/// had to fall back to the UTC date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedWeek {
    pub games: Vec<Game>,
    pub parse_errors: usize,
}
