pub mod urls;
pub mod http_client;
mod scoreboard_api;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
// Re-export core API functions
pub use scoreboard_api::*;
