//! Fantasy-relevant offensive positions.

use crate::error::SleeperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offensive positions tracked for rookie intake.
///
/// Sleeper reports many more position codes (K, DEF, LB, ...). Only these
/// four are ever emitted in a rookie record.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::Position;
///
/// let wr: Position = "WR".parse().unwrap();
/// assert_eq!(wr, Position::WR);
/// assert_eq!(wr.to_string(), "WR");
/// assert!("K".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// Every tracked position, in display order.
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    /// Sleeper's position code for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }

    /// Match a raw Sleeper position code exactly. Codes are case-sensitive
    /// upstream, so `"qb"` is not a quarterback.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == code)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = SleeperError;

    /// Lenient parse for CLI input: accepts any casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_uppercase()).ok_or_else(|| SleeperError::InvalidPosition {
            position: s.to_string(),
        })
    }
}
