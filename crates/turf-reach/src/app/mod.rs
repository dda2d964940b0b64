//! Application layer - Use case implementations
//!
//! This module coordinates domain types to implement the analysis use cases.

pub mod engine;
pub mod ranking;
