pub mod date_parsing;
pub mod team_codes;

pub use date_parsing::{extract_local_date, parse_short_detail};
pub use team_codes::to_nba_code;
