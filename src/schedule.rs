//! Day bucketing of a week's games.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::data_fetcher::models::Game;

/// A week's games grouped by day and by team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    pub games_by_day: BTreeMap<NaiveDate, Vec<Game>>,
    pub teams_by_day: BTreeMap<NaiveDate, BTreeSet<String>>,
    /// Games per team for the whole week, home and away each counting once
    pub team_game_counts: BTreeMap<String, usize>,
}

impl WeekSchedule {
    pub fn from_games(games: &[Game]) -> Self {
        let mut schedule = WeekSchedule::default();

        for game in games {
            schedule
                .games_by_day
                .entry(game.date)
                .or_default()
                .push(game.clone());

            let teams = schedule.teams_by_day.entry(game.date).or_default();
            teams.insert(game.home.clone());
            teams.insert(game.away.clone());

            *schedule
                .team_game_counts
                .entry(game.home.clone())
                .or_insert(0) += 1;
            *schedule
                .team_game_counts
                .entry(game.away.clone())
                .or_insert(0) += 1;
        }

        schedule
    }

    /// Games on `day`, empty when nothing is scheduled.
    pub fn games_on(&self, day: NaiveDate) -> &[Game] {
        self.games_by_day
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every team playing on `day`.
    pub fn teams_on(&self, day: NaiveDate) -> BTreeSet<String> {
        self.teams_by_day.get(&day).cloned().unwrap_or_default()
    }
}

/// Inverts a team → games map into `(games, teams)` groups, most games
/// first, teams sorted alphabetically within a group.
pub fn group_by_game_count(counts: &BTreeMap<String, usize>) -> Vec<(usize, Vec<String>)> {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (team, &count) in counts {
        groups.entry(count).or_default().push(team.clone());
    }

    groups
        .into_iter()
        .rev()
        .map(|(count, mut teams)| {
            teams.sort();
            (count, teams)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    fn sample_games() -> Vec<Game> {
        vec![
            Game::new(day(24), "BOS", "NYK"),
            Game::new(day(24), "DEN", "LAL"),
            Game::new(day(25), "BOS", "MIA"),
            Game::new(day(27), "LAL", "BOS"),
        ]
    }

    #[test]
    fn test_games_by_day() {
        let schedule = WeekSchedule::from_games(&sample_games());
        assert_eq!(schedule.games_on(day(24)).len(), 2);
        assert_eq!(schedule.games_on(day(25)).len(), 1);
        assert!(schedule.games_on(day(26)).is_empty());
        assert_eq!(schedule.games_by_day.len(), 3);
    }

    #[test]
    fn test_teams_by_day() {
        let schedule = WeekSchedule::from_games(&sample_games());
        let teams: Vec<String> = schedule.teams_on(day(24)).into_iter().collect();
        assert_eq!(teams, vec!["BOS", "DEN", "LAL", "NYK"]);
        assert!(schedule.teams_on(day(30)).is_empty());
    }

    #[test]
    fn test_team_game_counts() {
        let schedule = WeekSchedule::from_games(&sample_games());
        assert_eq!(schedule.team_game_counts["BOS"], 3);
        assert_eq!(schedule.team_game_counts["LAL"], 2);
        assert_eq!(schedule.team_game_counts["MIA"], 1);
        assert_eq!(schedule.team_game_counts.values().sum::<usize>(), 8);
    }

    #[test]
    fn test_group_by_game_count() {
        let schedule = WeekSchedule::from_games(&sample_games());
        let groups = group_by_game_count(&schedule.team_game_counts);
        assert_eq!(
            groups,
            vec![
                (3, vec!["BOS".to_string()]),
                (2, vec!["LAL".to_string()]),
                (
                    1,
                    vec!["DEN".to_string(), "MIA".to_string(), "NYK".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_empty_week() {
        let schedule = WeekSchedule::from_games(&[]);
        assert!(schedule.team_game_counts.is_empty());
        assert!(group_by_game_count(&schedule.team_game_counts).is_empty());
    }
}
