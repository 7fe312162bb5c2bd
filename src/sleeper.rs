//! Sleeper API access: the HTTP client, response shapes, and the
//! filter/projection step that turns responses into output records.

pub mod http;
pub mod transform;
pub mod types;

pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use types::{RookieRecord, TeamOffenseRecord};
