//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers used by the fetcher, the lineup
//! engine and the report so they can be tuned in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool.
/// A run makes a single request, so there is nothing to gain from a large pool.
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 1;

/// Default scoreboard API domain
pub const DEFAULT_API_DOMAIN: &str = "https://site.api.espn.com";

/// Name used for the config directory and the log file
pub const APP_NAME: &str = "fantasy_hoops_week";

/// Default file the `--save` flag writes to when no path is given
pub const DEFAULT_SAVE_FILE: &str = "last_run.json";

/// Lineup rules
pub mod lineup {
    /// Players in a complete lineup
    pub const LINEUP_SIZE: usize = 5;

    /// Most players one position group may contribute to a lineup
    pub const MAX_PER_SIDE: usize = 3;

    /// Fewest players one position group must contribute to a lineup
    pub const MIN_PER_SIDE: usize = LINEUP_SIZE - MAX_PER_SIDE;

    /// Roster slots per position group
    pub const SLOTS_PER_SIDE: usize = 5;
}

/// Report layout
pub mod report {
    /// Lineups printed per day before the rest is summarized
    pub const LINEUP_SAMPLE_LIMIT: usize = 10;

    /// Below this many available players the report lists the
    /// non-rostered teams that play that day
    pub const MISSING_TEAMS_THRESHOLD: usize = 4;
}

/// Default roster used until one is stored in the config file
pub mod roster {
    pub const FRONTCOURT: [&str; 5] = ["BOS", "CHA", "DEN", "WAS", "POR"];
    pub const BACKCOURT: [&str; 5] = ["OKC", "PHI", "PHI", "UTA", "MIL"];
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_DOMAIN: &str = "FANTASY_HOOPS_API_DOMAIN";
    pub const LOG_FILE: &str = "FANTASY_HOOPS_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FANTASY_HOOPS_HTTP_TIMEOUT";
}
