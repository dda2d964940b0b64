//! turf-reach - TURF (Total Unduplicated Reach and Frequency) reach engine
//!
//! This crate provides functionality to:
//! - Load boolean-coded survey data from delimited text
//! - Enumerate every fixed-size combination of selected items
//! - Compute each combination's total reach and its order-dependent
//!   per-item incremental reach
//! - Rank combinations and format plain text reports

pub mod constants;
pub mod domain;
pub mod error;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::engine::{
    ReachOptions, compute_reach, compute_reach_parallel, compute_reach_str,
    compute_reach_str_with_options, compute_reach_with_options, reach_of,
};
pub use app::ranking::{best_combination, rank_by_total_reach};
pub use domain::dataset::Dataset;
pub use domain::result::{ColumnReach, CombinationResult};
pub use error::{DatasetError, LoadError, ReachError};
pub use infra::csv_io::{CsvOptions, load_dataset};
