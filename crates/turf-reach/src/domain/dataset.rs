//! Boolean survey dataset
//!
//! Columns are stored as [`RowMask`]s so reach is computed with word-wide
//! ORs and popcounts instead of per-row scans.

use crate::domain::coverage::RowMask;
use crate::error::DatasetError;

#[cfg(feature = "fx-lookup")]
type ColumnIndex = rustc_hash::FxHashMap<String, usize>;

#[cfg(not(feature = "fx-lookup"))]
type ColumnIndex = std::collections::HashMap<String, usize>;

/// Rows × named boolean columns
#[derive(Clone, Debug)]
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<RowMask>,
    row_count: usize,
    index: ColumnIndex,
}

impl Dataset {
    /// Build a dataset from `(name, values)` pairs in column order
    ///
    /// # Errors
    ///
    /// Fails if there are no columns, a name repeats, or columns differ in length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (S, Vec<bool>)>,
        S: Into<String>,
    {
        Self::from_masks(
            columns
                .into_iter()
                .map(|(name, values)| (name.into(), RowMask::from_bools(&values))),
        )
    }

    /// Build a dataset from already packed column masks
    pub fn from_masks<I>(columns: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (String, RowMask)>,
    {
        let mut names = Vec::new();
        let mut masks: Vec<RowMask> = Vec::new();
        let mut index = ColumnIndex::default();

        for (name, mask) in columns {
            if let Some(first) = masks.first()
                && first.len() != mask.len()
            {
                return Err(DatasetError::ColumnLengthMismatch {
                    column: name,
                    expected: first.len(),
                    found: mask.len(),
                });
            }
            if index.insert(name.clone(), names.len()).is_some() {
                return Err(DatasetError::DuplicateColumn(name));
            }
            names.push(name);
            masks.push(mask);
        }

        let Some(first) = masks.first() else {
            return Err(DatasetError::NoColumns);
        };
        let row_count = first.len();

        Ok(Self {
            names,
            columns: masks,
            row_count,
            index,
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Column names in dataset order
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Row mask of a column by name
    pub fn column(&self, name: &str) -> Option<&RowMask> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Row mask of a column by position
    pub fn column_at(&self, index: usize) -> Option<&RowMask> {
        self.columns.get(index)
    }
}
