//! Type-safe wrappers and enums for Sleeper NFL data.

pub mod position;
pub mod time;

pub use position::Position;
pub use time::Season;
