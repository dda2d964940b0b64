//! Per-combination result records

use crate::constants::LABEL_SEPARATOR;

/// Reach figures for one column inside one combination
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnReach {
    /// Column name
    pub column: String,
    /// Reach of the column on its own (%), independent of the combination
    pub solo_reach: f64,
    /// New reach added at this reveal position (%)
    pub incremental_reach: f64,
    /// Reveal position, 1-indexed
    pub position: usize,
}

/// Result of evaluating one combination
#[derive(Clone, Debug, PartialEq)]
pub struct CombinationResult {
    /// Reach of the whole combination (%)
    pub total_reach: f64,
    /// Columns in reveal order
    pub columns: Vec<ColumnReach>,
}

impl CombinationResult {
    /// Column names in reveal order
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.column.as_str())
    }

    /// Display label, e.g. `"A, B"`
    pub fn label(&self) -> String {
        self.column_names().collect::<Vec<_>>().join(LABEL_SEPARATOR)
    }

    /// Figures for one column of this combination
    pub fn column(&self, name: &str) -> Option<&ColumnReach> {
        self.columns.iter().find(|c| c.column == name)
    }

    /// Waterfall series: the total bar, then each column's increment in reveal order
    pub fn waterfall(&self) -> Vec<(String, f64)> {
        let mut bars = Vec::with_capacity(self.columns.len() + 1);
        bars.push((format!("Total: {}", self.label()), self.total_reach));
        bars.extend(
            self.columns
                .iter()
                .map(|c| (c.column.clone(), c.incremental_reach)),
        );
        bars
    }
}
