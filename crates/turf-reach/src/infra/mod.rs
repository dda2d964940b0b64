//! Infrastructure layer - I/O and presentation helpers
//!
//! This module handles file input and text report output.

pub mod csv_io;
pub mod report;
