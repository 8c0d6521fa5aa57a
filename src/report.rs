//! Text report and JSON dump of a week's analysis.

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::analysis::{DayReport, SavedRun, WeekAnalysis};
use crate::constants::lineup::LINEUP_SIZE;
use crate::constants::report::{LINEUP_SAMPLE_LIMIT, MISSING_TEAMS_THRESHOLD};
use crate::error::AppError;

const HEADER_COLOR: Color = Color::Cyan;
const WARNING_COLOR: Color = Color::Yellow;

/// Writes `text` and a newline, colored unless `plain` is set.
fn write_colored(out: &mut impl Write, text: &str, color: Color, plain: bool) -> io::Result<()> {
    if plain {
        writeln!(out, "{text}")
    } else {
        queue!(
            out,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        )
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn list_or_none(teams: &[String]) -> String {
    if teams.is_empty() {
        "None".to_string()
    } else {
        teams.join(", ")
    }
}

fn write_game_groups(out: &mut impl Write, groups: &[(usize, Vec<String>)]) -> io::Result<()> {
    if groups.is_empty() {
        return writeln!(out, "No games found this week");
    }
    for (count, teams) in groups {
        writeln!(out, "  {count} game{}: {}", plural(*count), teams.join(", "))?;
    }
    Ok(())
}

/// Writes the full week report: league game counts, one section per day,
/// week totals and the squad's game counts.
pub fn write_week_report(
    out: &mut impl Write,
    analysis: &WeekAnalysis,
    plain: bool,
) -> io::Result<()> {
    writeln!(out, "\nTeams grouped by number of games this week:")?;
    write_game_groups(out, &analysis.team_game_groups)?;

    write_colored(out, "\n=== WEEK SUMMARY ===", HEADER_COLOR, plain)?;
    for day in &analysis.days {
        write_day_summary(out, day, plain)?;
    }

    writeln!(
        out,
        "\nTotal playable players for the week (capped at {LINEUP_SIZE} per day): {}",
        analysis.weeks_playable_players
    )?;
    writeln!(
        out,
        "Total possible players for the week: {}",
        analysis.total_possible_players()
    )?;
    for (playable, days) in analysis.playable_distribution().iter().enumerate() {
        writeln!(out, "Number of days with {playable} playable players: {days}")?;
    }
    match analysis.average_playable_per_gameday() {
        Some(average) => writeln!(out, "Average playable players per day: {average:.2}")?,
        None => writeln!(out, "Average playable players per day: n/a (no gamedays)")?,
    }

    writeln!(out, "\nSquad grouped by number of games this week:")?;
    write_game_groups(out, &analysis.squad_game_groups())?;

    if analysis.parse_errors > 0 {
        write_colored(
            out,
            &format!(
                "\nNote: There were {} errors parsing game data.",
                analysis.parse_errors
            ),
            WARNING_COLOR,
            plain,
        )?;
    }

    Ok(())
}

/// Writes one day's section.
pub fn write_day_summary(out: &mut impl Write, day: &DayReport, plain: bool) -> io::Result<()> {
    let Some(gameday_number) = day.gameday_number else {
        write_colored(
            out,
            &format!("\n=== Not a Gameday - {} ===", day.date),
            HEADER_COLOR,
            plain,
        )?;
        return writeln!(out, "No games scheduled.");
    };

    let summary = &day.summary;
    let total_players = summary.total_players();

    write_colored(
        out,
        &format!("\n=== Gameday {gameday_number} - {} ===", day.date),
        HEADER_COLOR,
        plain,
    )?;
    writeln!(out, "Number of games: {}", day.num_games)?;
    writeln!(
        out,
        "Frontcourt playing ({}): {}",
        summary.fc_play.len(),
        list_or_none(&summary.fc_play)
    )?;
    writeln!(
        out,
        "Backcourt playing ({}): {}",
        summary.bc_play.len(),
        list_or_none(&summary.bc_play)
    )?;
    writeln!(out, "Total players available: {total_players}")?;
    writeln!(out, "Maximum playable players: {}", summary.playable_players)?;

    if total_players < LINEUP_SIZE {
        write_colored(out, "!!  Not enough players to form a lineup!", WARNING_COLOR, plain)?;
    } else if summary.is_crunch_day() && summary.lineups.is_empty() {
        write_colored(
            out,
            "!!  *Crunch day*: More than 5 players play but no legal FC/BC combinations fit 5.",
            WARNING_COLOR,
            plain,
        )?;
    } else if summary.is_crunch_day() {
        write_colored(
            out,
            "!!  Crunch day (you have more than 5 possible players).",
            WARNING_COLOR,
            plain,
        )?;
    }

    writeln!(out, "Complete lineup combinations: {}", summary.lineups.len())?;
    for (i, lineup) in summary.lineups.iter().take(LINEUP_SAMPLE_LIMIT).enumerate() {
        writeln!(out, "  {}. {}", i + 1, lineup.join(", "))?;
    }
    if summary.lineups.len() > LINEUP_SAMPLE_LIMIT {
        writeln!(
            out,
            "  ... ({} more)",
            summary.lineups.len() - LINEUP_SAMPLE_LIMIT
        )?;
    }

    if total_players < MISSING_TEAMS_THRESHOLD {
        let missing = day.unrostered_teams();
        if !missing.is_empty() {
            writeln!(
                out,
                "Teams playing that are NOT in your roster: {}",
                missing.join(", ")
            )?;
        }
    }

    Ok(())
}

/// Writes `run` as indented JSON to `path`, creating parent directories.
///
/// # Errors
/// * `AppError::ApiParse` - If serialization fails
/// * `AppError::Io` - If the directory or file cannot be written
pub async fn save_run(path: &str, run: &SavedRun) -> Result<(), AppError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(run)?;
    let mut file = fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;

    info!("Saved run for week {} to {path}", run.week_start);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_week;
    use crate::data_fetcher::models::{FetchedWeek, Game};
    use crate::lineup::Roster;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    fn render(analysis: &WeekAnalysis) -> String {
        let mut buffer = Vec::new();
        write_week_report(&mut buffer, analysis, true).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn analysis_for(games: Vec<Game>, parse_errors: usize) -> WeekAnalysis {
        analyze_week(
            day(24),
            &FetchedWeek {
                games,
                parse_errors,
            },
            &Roster::default(),
        )
    }

    #[test]
    fn test_not_a_gameday_section() {
        let output = render(&analysis_for(Vec::new(), 0));
        assert!(output.contains("=== Not a Gameday - 2025-11-24 ==="));
        assert!(output.contains("No games scheduled."));
        assert!(output.contains("No games found this week"));
        assert!(output.contains("Average playable players per day: n/a"));
        assert!(output.contains("Number of days with 0 playable players: 7"));
    }

    #[test]
    fn test_not_enough_players_flag_and_missing_teams() {
        let output = render(&analysis_for(
            vec![
                Game::new(day(24), "BOS", "LAL"),
                Game::new(day(24), "GSW", "SAC"),
            ],
            0,
        ));
        assert!(output.contains("=== Gameday 1 - 2025-11-24 ==="));
        assert!(output.contains("Frontcourt playing (1): BOS"));
        assert!(output.contains("Backcourt playing (0): None"));
        assert!(output.contains("!!  Not enough players to form a lineup!"));
        assert!(output.contains("Teams playing that are NOT in your roster: GSW, LAL, SAC"));
        assert!(output.contains("Average playable players per day: 1.00"));
    }

    #[test]
    fn test_crunch_day_lineup_sample_is_capped() {
        let output = render(&analysis_for(
            vec![
                Game::new(day(24), "BOS", "PHI"),
                Game::new(day(24), "CHA", "OKC"),
                Game::new(day(24), "DEN", "UTA"),
            ],
            0,
        ));
        assert!(output.contains("!!  Crunch day (you have more than 5 possible players)."));
        assert!(output.contains("Complete lineup combinations: 18"));
        assert!(output.contains("  1. BOS, CHA, DEN, OKC, PHI"));
        assert!(output.contains("  10. "));
        assert!(!output.contains("  11. "));
        assert!(output.contains("  ... (8 more)"));
        assert!(!output.contains("NOT in your roster"));
    }

    #[test]
    fn test_crunch_day_without_legal_lineup() {
        // Six frontcourt-only slots cannot fill a 3/2 or 2/3 split
        let roster = Roster::new(
            ["BOS", "CHA", "DEN", "WAS", "POR", "LAL"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vec!["OKC".to_string()],
        );
        let games = vec![
            Game::new(day(24), "BOS", "CHA"),
            Game::new(day(24), "DEN", "WAS"),
            Game::new(day(24), "POR", "LAL"),
        ];
        let analysis = analyze_week(
            day(24),
            &FetchedWeek {
                games,
                parse_errors: 0,
            },
            &roster,
        );
        let output = render(&analysis);
        assert!(output.contains("*Crunch day*: More than 5 players play but no legal FC/BC"));
        assert!(output.contains("Complete lineup combinations: 0"));
    }

    #[test]
    fn test_parse_error_note() {
        let output = render(&analysis_for(vec![Game::new(day(24), "BOS", "PHI")], 2));
        assert!(output.contains("Note: There were 2 errors parsing game data."));

        let output = render(&analysis_for(vec![Game::new(day(24), "BOS", "PHI")], 0));
        assert!(!output.contains("errors parsing game data"));
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let analysis = analysis_for(Vec::new(), 0);
        let mut buffer = Vec::new();
        write_week_report(&mut buffer, &analysis, false).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("=== WEEK SUMMARY ==="));
    }

    #[tokio::test]
    async fn test_save_run_writes_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("runs").join("last_run.json");
        let path_str = path.to_string_lossy();

        let analysis = analysis_for(vec![Game::new(day(24), "BOS", "PHI")], 0);
        let saved = analysis.to_saved_run();
        save_run(&path_str, &saved).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("\"week_start\": \"2025-11-24\""));
        let loaded: SavedRun = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, saved);
    }
}
