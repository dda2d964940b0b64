//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and data types without I/O dependencies.

pub mod coercion;
pub mod combination;
pub mod coverage;
pub mod dataset;
pub mod result;
