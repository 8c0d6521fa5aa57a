//! Per-day lineup analysis over a Monday..Sunday week.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

use crate::constants::lineup::LINEUP_SIZE;
use crate::data_fetcher::models::FetchedWeek;
use crate::lineup::{
    Lineup, Roster, compute_days_playable, generate_lineups, teams_playing_that_day,
};
use crate::schedule::{WeekSchedule, group_by_game_count};

/// Days in an analysed week
pub const DAYS_IN_WEEK: u64 = 7;

/// Lineup availability for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub fc_play: Vec<String>,
    pub bc_play: Vec<String>,
    pub lineups: Vec<Lineup>,
    pub playable_players: usize,
}

impl DaySummary {
    pub fn total_players(&self) -> usize {
        self.fc_play.len() + self.bc_play.len()
    }

    /// More eligible players than a lineup can hold.
    pub fn is_crunch_day(&self) -> bool {
        self.total_players() > LINEUP_SIZE
    }
}

/// A day's summary with the context the report prints around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub date: NaiveDate,
    /// 1-based position among the week's days that have games
    pub gameday_number: Option<usize>,
    pub num_games: usize,
    pub teams_playing: BTreeSet<String>,
    pub summary: DaySummary,
}

impl DayReport {
    /// Teams playing that day with no roster slot.
    pub fn unrostered_teams(&self) -> Vec<String> {
        self.teams_playing
            .iter()
            .filter(|t| !self.summary.fc_play.contains(t) && !self.summary.bc_play.contains(t))
            .cloned()
            .collect()
    }
}

/// Everything computed for one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekAnalysis {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub roster: Roster,
    pub days: Vec<DayReport>,
    /// League-wide `(games, teams)` groups, most games first
    pub team_game_groups: Vec<(usize, Vec<String>)>,
    /// Days each roster team plays this week
    pub squad_game_counts: BTreeMap<String, usize>,
    pub weeks_playable_players: usize,
    pub gameday_count: usize,
    pub parse_errors: usize,
}

/// JSON document written by the save step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRun {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub fc_teams: Vec<String>,
    pub bc_teams: Vec<String>,
    /// Keyed by ISO date
    pub results: BTreeMap<String, DaySummary>,
    pub weeks_playable_players: usize,
}

/// Runs the lineup analysis for the seven days starting at `week_start`.
pub fn analyze_week(week_start: NaiveDate, fetched: &FetchedWeek, roster: &Roster) -> WeekAnalysis {
    let schedule = WeekSchedule::from_games(&fetched.games);
    let week_end = week_start + Days::new(DAYS_IN_WEEK - 1);

    let mut squad_game_counts: BTreeMap<String, usize> =
        roster.teams().into_iter().map(|t| (t, 0)).collect();
    let mut days = Vec::with_capacity(DAYS_IN_WEEK as usize);
    let mut gameday_count = 0;
    let mut weeks_playable_players = 0;

    for offset in 0..DAYS_IN_WEEK {
        let date = week_start + Days::new(offset);
        let day_games = schedule.games_on(date);

        let (fc_play, bc_play) =
            teams_playing_that_day(day_games, &roster.frontcourt, &roster.backcourt);

        let playing_today: BTreeSet<&String> = fc_play.iter().chain(&bc_play).collect();
        for team in playing_today {
            *squad_game_counts.entry(team.clone()).or_insert(0) += 1;
        }

        let playable_players = compute_days_playable(&fc_play, &bc_play);
        weeks_playable_players += playable_players;
        let lineups = generate_lineups(&fc_play, &bc_play);

        let gameday_number = if day_games.is_empty() {
            None
        } else {
            gameday_count += 1;
            Some(gameday_count)
        };

        debug!(
            "{date}: {} games, {} FC + {} BC playing, {playable_players} playable, {} lineups",
            day_games.len(),
            fc_play.len(),
            bc_play.len(),
            lineups.len()
        );

        days.push(DayReport {
            date,
            gameday_number,
            num_games: day_games.len(),
            teams_playing: schedule.teams_on(date),
            summary: DaySummary {
                fc_play,
                bc_play,
                lineups,
                playable_players,
            },
        });
    }

    info!(
        "Analysed week {week_start}..={week_end}: {gameday_count} gamedays, {weeks_playable_players} playable players"
    );

    WeekAnalysis {
        week_start,
        week_end,
        roster: roster.clone(),
        days,
        team_game_groups: group_by_game_count(&schedule.team_game_counts),
        squad_game_counts,
        weeks_playable_players,
        gameday_count,
        parse_errors: fetched.parse_errors,
    }
}

impl WeekAnalysis {
    /// Number of days with 0, 1, ..., 5 playable players.
    pub fn playable_distribution(&self) -> [usize; LINEUP_SIZE + 1] {
        let mut distribution = [0; LINEUP_SIZE + 1];
        for day in &self.days {
            distribution[day.summary.playable_players.min(LINEUP_SIZE)] += 1;
        }
        distribution
    }

    /// `None` for a week without games.
    pub fn average_playable_per_gameday(&self) -> Option<f64> {
        (self.gameday_count > 0)
            .then(|| self.weeks_playable_players as f64 / self.gameday_count as f64)
    }

    pub fn total_possible_players(&self) -> usize {
        LINEUP_SIZE * self.gameday_count
    }

    /// Roster teams grouped by days played, most first.
    pub fn squad_game_groups(&self) -> Vec<(usize, Vec<String>)> {
        group_by_game_count(&self.squad_game_counts)
    }

    pub fn to_saved_run(&self) -> SavedRun {
        SavedRun {
            week_start: self.week_start,
            week_end: self.week_end,
            fc_teams: self.roster.frontcourt.clone(),
            bc_teams: self.roster.backcourt.clone(),
            results: self
                .days
                .iter()
                .map(|day| (day.date.to_string(), day.summary.clone()))
                .collect(),
            weeks_playable_players: self.weeks_playable_players,
        }
    }
}
