//! Reach engine constants
//!
//! Note: cell coercion tokens live in domain/coercion.rs next to the rule that uses them.

// =============================================================================
// Reach computation
// =============================================================================

/// Scale factor from a true-fraction to a percentage
pub const PERCENT_SCALE: f64 = 100.0;

/// Bits per row mask word
pub const MASK_WORD_BITS: usize = 64;

/// Combination count above which a run logs a warning
///
/// Cost is C(n, k) combinations × k mask unions, so a run past this point
/// takes noticeably long on survey-sized data.
#[cfg(not(test))]
pub const COMBINATION_WARN_THRESHOLD: u64 = 1_000_000;

/// Combination count warning threshold - reduced for unit tests
#[cfg(test)]
pub const COMBINATION_WARN_THRESHOLD: u64 = 1_000;

/// Combinations handed to the rayon pool at a time
///
/// Bounds the index buffer of a parallel run; results still accumulate in full.
#[cfg(not(test))]
pub const PARALLEL_BATCH_SIZE: usize = 1 << 16;

/// Parallel batch size - reduced for unit tests
#[cfg(test)]
pub const PARALLEL_BATCH_SIZE: usize = 4;

// =============================================================================
// Text input
// =============================================================================

/// Default field delimiter for delimited text input
pub const DEFAULT_DELIMITER: char = ',';

/// Quote character for delimited text input
pub const QUOTE_CHAR: char = '"';

// =============================================================================
// Report
// =============================================================================

/// Separator used when a combination is rendered as a single label
pub const LABEL_SEPARATOR: &str = ", ";

/// Width in characters of a full (100%) waterfall bar
pub const WATERFALL_BAR_WIDTH: usize = 50;
