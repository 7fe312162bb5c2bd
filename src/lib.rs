//! Sleeper NFL Data Intake Library
//!
//! Pulls player and team data from the public Sleeper API, reshapes it into
//! flat records, and saves them as CSV for downstream analysis.
//!
//! ## Features
//!
//! - **Rookie Intake**: Offensive rookies (QB, RB, WR, TE) from the current player pool
//! - **Team Offense Intake**: Regular-season offensive rankings per team for a season
//! - **CSV Output**: Header row, one row per record, empty cells for missing values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::{commands::rookies::get_rookies, core::ensure_data_dir, Position, Season, SleeperClient};
//! use std::path::Path;
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let data_dir = Path::new("data/raw");
//! ensure_data_dir(data_dir)?;
//!
//! let client = SleeperClient::new()?;
//! let rookies = get_rookies(&client, data_dir, Season::new(2025), &Position::ALL).await?;
//! println!("{} rookies", rookies.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SLEEPER_FFL_DATA_DIR=/srv/fantasy/raw        # default: data/raw
//! export SLEEPER_API_BASE_URL=http://localhost:8080   # default: https://api.sleeper.app/v1
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{Position, Season};
pub use error::{Result, SleeperError};
pub use sleeper::{RookieRecord, SleeperClient, TeamOffenseRecord};

pub const DATA_DIR_ENV_VAR: &str = "SLEEPER_FFL_DATA_DIR";
pub const BASE_URL_ENV_VAR: &str = "SLEEPER_API_BASE_URL";
