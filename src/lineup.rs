//! Roster availability and lineup enumeration.
//!
//! A legal lineup is five players split 3 frontcourt + 2 backcourt or
//! 2 frontcourt + 3 backcourt. Roster slots are the unit of selection, so a
//! team that fills two slots can appear twice in the same lineup.

use crate::constants::lineup::{LINEUP_SIZE, MAX_PER_SIDE, MIN_PER_SIDE};
use crate::data_fetcher::models::Game;
use serde::{Deserialize, Serialize};

/// One complete lineup: five team codes, frontcourt picks first.
pub type Lineup = Vec<String>;

/// The user's roster, one team code per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub frontcourt: Vec<String>,
    pub backcourt: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        use crate::constants::roster::{BACKCOURT, FRONTCOURT};
        Roster {
            frontcourt: FRONTCOURT.iter().map(|t| t.to_string()).collect(),
            backcourt: BACKCOURT.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Roster {
    pub fn new(frontcourt: Vec<String>, backcourt: Vec<String>) -> Self {
        Roster {
            frontcourt,
            backcourt,
        }
    }

    /// Parses a comma separated list like `"lal, bos,DEN"` into team codes.
    pub fn parse_codes(input: &str) -> Vec<String> {
        clean_codes(input.split(','))
    }

    /// Returns a copy with every code trimmed and uppercased, empty codes dropped.
    pub fn normalized(&self) -> Self {
        Roster {
            frontcourt: clean_codes(self.frontcourt.iter().map(String::as_str)),
            backcourt: clean_codes(self.backcourt.iter().map(String::as_str)),
        }
    }

    /// Unique roster teams in first-seen order, frontcourt before backcourt.
    pub fn teams(&self) -> Vec<String> {
        let mut teams: Vec<String> = Vec::new();
        for team in self.frontcourt.iter().chain(&self.backcourt) {
            if !teams.contains(team) {
                teams.push(team.clone());
            }
        }
        teams
    }
}

fn clean_codes<'a>(codes: impl Iterator<Item = &'a str>) -> Vec<String> {
    codes
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}

/// Returns the frontcourt and backcourt slots whose team plays in any of
/// `games`, in slot order. A team that fills several slots appears once per slot.
pub fn teams_playing_that_day(
    games: &[Game],
    fc_teams: &[String],
    bc_teams: &[String],
) -> (Vec<String>, Vec<String>) {
    let plays = |team: &str| games.iter().any(|g| g.involves(team));

    let fc_play = fc_teams.iter().filter(|t| plays(t.as_str())).cloned().collect();
    let bc_play = bc_teams.iter().filter(|t| plays(t.as_str())).cloned().collect();
    (fc_play, bc_play)
}

/// Enumerates every complete lineup for the day.
///
/// All 3FC+2BC combinations come first, then all 2FC+3BC combinations.
/// Within each pattern combinations follow input order. A pattern with too
/// few players on either side contributes nothing.
pub fn generate_lineups(fc_play: &[String], bc_play: &[String]) -> Vec<Lineup> {
    let mut lineups = Vec::new();

    for (fc_count, bc_count) in [(MAX_PER_SIDE, MIN_PER_SIDE), (MIN_PER_SIDE, MAX_PER_SIDE)] {
        if fc_play.len() < fc_count || bc_play.len() < bc_count {
            continue;
        }
        let bc_combos = combinations(bc_play, bc_count);
        for fc_combo in combinations(fc_play, fc_count) {
            for bc_combo in &bc_combos {
                let mut lineup = Vec::with_capacity(LINEUP_SIZE);
                lineup.extend(fc_combo.iter().cloned());
                lineup.extend(bc_combo.iter().cloned());
                lineups.push(lineup);
            }
        }
    }

    lineups
}

/// Maximum number of players that can be fielded on a day: at most three
/// from either side, never more than are available, and never more than five.
pub fn compute_days_playable(fc_play: &[String], bc_play: &[String]) -> usize {
    playable_count(fc_play.len(), bc_play.len())
}

/// [`compute_days_playable`] on plain counts.
pub fn playable_count(fc: usize, bc: usize) -> usize {
    let max_from_each = fc.min(MAX_PER_SIDE) + bc.min(MAX_PER_SIDE);
    LINEUP_SIZE.min(max_from_each).min(fc + bc)
}

/// All `k`-element combinations of `items` by position, in lexicographic
/// index order.
fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        result.push(indices.iter().map(|&i| items[i].clone()).collect());

        // Rightmost index that can still advance
        let Some(pos) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return result;
        };
        indices[pos] += 1;
        for j in pos + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}
