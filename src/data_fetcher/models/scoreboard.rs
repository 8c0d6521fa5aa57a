//! Wire types for the ESPN site scoreboard endpoint.
//!
//! Only the fields the fetcher reads are modelled. Every field is optional
//! or defaulted so a partially filled event deserializes and can be skipped
//! later instead of failing the whole response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<EspnEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EspnEvent {
    #[serde(default)]
    pub id: Option<String>,
    /// UTC start timestamp, e.g. `2025-11-24T00:30Z`
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<EspnStatus>,
    #[serde(default)]
    pub competitions: Vec<EspnCompetition>,
}

impl EspnEvent {
    /// The display string that carries the local date, e.g. `11/23 - 8:00 PM EST`.
    pub fn short_detail(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.status_type.as_ref())
            .and_then(|t| t.short_detail.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EspnStatus {
    #[serde(rename = "type", default)]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EspnStatusType {
    #[serde(rename = "shortDetail", default)]
    pub short_detail: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EspnCompetition {
    #[serde(default)]
    pub competitors: Vec<EspnCompetitor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EspnCompetitor {
    /// `"home"` or `"away"`
    #[serde(rename = "homeAway", default)]
    pub home_away: Option<String>,
    #[serde(default)]
    pub team: Option<EspnTeam>,
}

impl EspnCompetitor {
    pub fn is_home(&self) -> bool {
        self.home_away.as_deref() == Some("home")
    }

    pub fn abbreviation(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| t.abbreviation.as_deref())
    }

    /// Full team name, falling back to the abbreviation.
    pub fn display_name(&self) -> Option<&str> {
        self.team
            .as_ref()
            .and_then(|t| t.display_name.as_deref())
            .or_else(|| self.abbreviation())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EspnTeam {
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}
