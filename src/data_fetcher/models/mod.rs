pub mod game;
pub mod scoreboard;

// Re-export all public types for convenience
pub use game::{FetchedWeek, Game};
pub use scoreboard::{
    EspnCompetition, EspnCompetitor, EspnEvent, EspnStatus, EspnStatusType, EspnTeam,
    ScoreboardResponse,
};
