pub mod api;
pub mod models;
pub mod processors;

pub use api::{fetch_week_schedule, parse_scoreboard};
pub use models::{FetchedWeek, Game};
