// src/main.rs
mod cli;
mod logging;

use chrono::Local;
use clap::Parser;
use cli::Args;
use fantasy_hoops_week::analysis::analyze_week;
use fantasy_hoops_week::config::Config;
use fantasy_hoops_week::data_fetcher::fetch_week_schedule;
use fantasy_hoops_week::error::AppError;
use fantasy_hoops_week::report::{save_run, write_week_report};
use fantasy_hoops_week::week::{prompt_for_week_start, resolve_week_start};
use std::io::{Write, stdout};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    config.roster = args.roster_with_overrides(&config.roster);
    config.validate_roster()?;

    if args.save_roster {
        config.save().await?;
        println!("Roster saved to {}", Config::get_config_path());
    }

    println!("=== NBA Fantasy Weekly Lineup ===\n");

    let selection = match args.week.as_deref() {
        Some(week) => resolve_week_start(week, Local::now().date_naive())?,
        None => prompt_for_week_start().await?,
    };
    if selection.adjusted {
        warn!("Week start moved back to Monday {}", selection.monday);
        println!("Warning: Provided date not Monday, adjusting to previous Monday.");
    }

    let (monday, sunday) = (selection.monday, selection.sunday());
    println!("Week selected: {monday} -> {sunday}");
    println!("FC teams: {}", config.roster.frontcourt.join(", "));
    println!("BC teams: {}", config.roster.backcourt.join(", "));

    println!("\nFetching weekly schedule from ESPN...");
    let fetched = fetch_week_schedule(&config, monday, sunday).await?;
    info!("Fetched {} games", fetched.games.len());

    let analysis = analyze_week(monday, &fetched, &config.roster);
    {
        let mut out = stdout().lock();
        write_week_report(&mut out, &analysis, args.plain)?;
        out.flush()?;
    }

    if let Some(path) = args.save.as_deref() {
        save_run(path, &analysis.to_saved_run()).await?;
        println!("\nSaved to {path}");
    }

    println!("\nDone.");
    Ok(())
}
