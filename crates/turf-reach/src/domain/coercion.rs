//! Cell parsing and boolean coercion
//!
//! Survey exports mix checkmarks, 0/1 codes, TRUE/FALSE and blanks. Every raw
//! cell is first classified as a [`Cell`], then coerced to "reached" with one
//! fixed rule:
//!
//! | Cell                               | Reached            |
//! |------------------------------------|--------------------|
//! | `Missing` (blank, NA, NaN, null…)  | false              |
//! | `Bool(b)`                          | `b`                |
//! | `Number(x)`                        | `x != 0 && !x.is_nan()` |
//! | `Text(_)`                          | true               |
//!
//! Missing values are filled with false before coercion, never passed through
//! as text.

/// Tokens (case-insensitive) read as a missing value
const MISSING_TOKENS: [&str; 6] = ["na", "n/a", "nan", "null", "none", "#n/a"];

/// A raw cell before coercion
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Blank or explicit missing marker
    Missing,
    /// TRUE / FALSE literal
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Any other text
    Text(String),
}

impl Cell {
    /// Classify a raw text field
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }

        let lower = trimmed.to_ascii_lowercase();
        if MISSING_TOKENS.contains(&lower.as_str()) {
            return Self::Missing;
        }

        match lower.as_str() {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }

        match trimmed.parse::<f64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    /// Coerce to "reached"
    pub fn is_reached(&self) -> bool {
        match self {
            Self::Missing => false,
            Self::Bool(b) => *b,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(_) => true,
        }
    }
}

/// Parse and coerce a raw text field in one step
pub fn coerce_field(raw: &str) -> bool {
    Cell::parse(raw).is_reached()
}
