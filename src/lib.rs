//! Weekly fantasy basketball lineup planner.
//!
//! Given a roster of frontcourt and backcourt team slots, this library
//! fetches one Monday-to-Sunday week of NBA games and works out, day by day,
//! which rostered teams play and which complete 5-player lineups
//! (3 FC + 2 BC or 2 FC + 3 BC) can be fielded.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fantasy_hoops_week::analysis::analyze_week;
//! use fantasy_hoops_week::data_fetcher::fetch_week_schedule;
//! use fantasy_hoops_week::report::write_week_report;
//! use fantasy_hoops_week::{AppError, Config};
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let monday = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
//!     let sunday = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
//!
//!     let fetched = fetch_week_schedule(&config, monday, sunday).await?;
//!     let analysis = analyze_week(monday, &fetched, &config.roster);
//!
//!     write_week_report(&mut std::io::stdout(), &analysis, true)?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod lineup;
pub mod report;
pub mod schedule;
pub mod week;

// Re-export commonly used types for convenience
pub use analysis::{DaySummary, WeekAnalysis, analyze_week};
pub use config::Config;
pub use data_fetcher::models::{FetchedWeek, Game};
pub use error::AppError;
pub use lineup::{Roster, compute_days_playable, generate_lineups, teams_playing_that_day};
