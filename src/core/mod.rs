//! Core utilities for the Sleeper data intake CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `http`: default request headers for the Sleeper API
//! - `paths`: output directory handling and output file names
//! - `table`: CSV serialization of output records

pub mod http;
pub mod paths;
pub mod table;

// Re-export commonly used items for convenience
pub use paths::{ensure_data_dir, rookies_path, team_stats_path, DEFAULT_DATA_DIR};
pub use table::{write_records, CsvRecord};
