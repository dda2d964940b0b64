//! Row coverage mask for tracking reached respondents
//!
//! This module provides a packed bitmap with one bit per dataset row.
//! A column's mask marks the rows it reaches; the union of several masks marks
//! the rows reached by at least one of them.

use crate::constants::{MASK_WORD_BITS, PERCENT_SCALE};

/// Row reachability bitmap
///
/// Uses 1 bit per row packed into `u64` words. Bits past `len` in the last
/// word are always zero, so `count_reached` never over-counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMask {
    /// Bitmap storage (64 rows per element)
    words: Vec<u64>,
    /// Number of rows
    len: usize,
}

impl RowMask {
    /// Create a mask of `len` rows with no row reached
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(MASK_WORD_BITS)],
            len,
        }
    }

    /// Build a mask from per-row booleans
    pub fn from_bools(values: &[bool]) -> Self {
        let mut mask = Self::new(values.len());
        for (row, &reached) in values.iter().enumerate() {
            if reached {
                mask.set(row);
            }
        }
        mask
    }

    /// Number of rows covered by this mask
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the mask has zero rows
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark a row as reached
    ///
    /// # Panics
    ///
    /// Panics if `row >= len`.
    #[inline]
    pub fn set(&mut self, row: usize) {
        assert!(row < self.len, "row {} out of range ({})", row, self.len);
        self.words[row / MASK_WORD_BITS] |= 1u64 << (row % MASK_WORD_BITS);
    }

    /// Check if a row is reached
    #[inline]
    pub fn is_set(&self, row: usize) -> bool {
        row < self.len && (self.words[row / MASK_WORD_BITS] >> (row % MASK_WORD_BITS)) & 1 != 0
    }

    /// OR another mask of the same length into this one
    #[inline]
    pub fn union_with(&mut self, other: &RowMask) {
        debug_assert_eq!(self.len, other.len);
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst |= *src;
        }
    }

    /// Count the number of reached rows
    pub fn count_reached(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Reached rows as a percentage of all rows
    ///
    /// Returns `None` for a zero-row mask, where the percentage is undefined.
    pub fn reach_percent(&self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        Some(self.count_reached() as f64 / self.len as f64 * PERCENT_SCALE)
    }

    /// Iterate over per-row booleans
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |row| self.is_set(row))
    }
}
