//! Reach engine
//!
//! Enumerates every k-subset of the selected columns and decomposes each
//! subset's reach into per-column incremental contributions in reveal order.
//!
//! Cost is C(n, k) combinations × k mask unions of ⌈rows / 64⌉ words each.

use crate::constants::{COMBINATION_WARN_THRESHOLD, PARALLEL_BATCH_SIZE, PERCENT_SCALE};
use crate::domain::combination::{Combinations, combination_count};
use crate::domain::coverage::RowMask;
use crate::domain::dataset::Dataset;
use crate::domain::result::{ColumnReach, CombinationResult};
use crate::error::ReachError;
use log::{debug, warn};
use rayon::prelude::*;

/// Options for a reach run
#[derive(Clone, Debug, Default)]
pub struct ReachOptions {
    /// Evaluate combinations on the rayon thread pool
    ///
    /// Combinations are generated in batches of [`PARALLEL_BATCH_SIZE`], so
    /// memory grows with the results only, as in a sequential run. Both paths
    /// keep every result, so set `max_combinations` for unbounded selections.
    pub parallel: bool,
    /// Refuse runs with more combinations than this (None = no limit)
    pub max_combinations: Option<u64>,
}

impl ReachOptions {
    /// Enable or disable parallel evaluation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the combination limit
    pub fn with_max_combinations(mut self, limit: u64) -> Self {
        self.max_combinations = Some(limit);
        self
    }
}

/// Compute reach for every `subset_size`-combination of `selected`
///
/// Results are in lexicographic order of the selection; inside each result
/// columns keep selection order, which is also their reveal order.
///
/// # Errors
///
/// See [`ReachError`]. Validation happens before any combination is evaluated.
pub fn compute_reach<S: AsRef<str>>(
    dataset: &Dataset,
    selected: &[S],
    subset_size: usize,
) -> Result<Vec<CombinationResult>, ReachError> {
    compute_reach_with_options(dataset, selected, subset_size, &ReachOptions::default())
}

/// Same as [`compute_reach`], evaluating combinations in parallel
///
/// Output order is identical to the sequential version.
pub fn compute_reach_parallel<S: AsRef<str>>(
    dataset: &Dataset,
    selected: &[S],
    subset_size: usize,
) -> Result<Vec<CombinationResult>, ReachError> {
    compute_reach_with_options(
        dataset,
        selected,
        subset_size,
        &ReachOptions::default().with_parallel(true),
    )
}

/// Compute reach with a subset size given as user text
///
/// Non-integer text fails with [`ReachError::InvalidSubsetSize`].
pub fn compute_reach_str<S: AsRef<str>>(
    dataset: &Dataset,
    selected: &[S],
    subset_size: &str,
) -> Result<Vec<CombinationResult>, ReachError> {
    compute_reach_str_with_options(dataset, selected, subset_size, &ReachOptions::default())
}

/// Textual subset size with explicit options
pub fn compute_reach_str_with_options<S: AsRef<str>>(
    dataset: &Dataset,
    selected: &[S],
    subset_size: &str,
    options: &ReachOptions,
) -> Result<Vec<CombinationResult>, ReachError> {
    if selected.is_empty() {
        return Err(ReachError::NoColumnsSelected);
    }
    let size = parse_subset_size(subset_size)?;
    run(dataset, selected, i128::from(size), options)
}

/// Typed subset size with explicit options
pub fn compute_reach_with_options<S: AsRef<str>>(
    dataset: &Dataset,
    selected: &[S],
    subset_size: usize,
    options: &ReachOptions,
) -> Result<Vec<CombinationResult>, ReachError> {
    run(dataset, selected, subset_size as i128, options)
}

/// Parse a subset size from user text
///
/// Surrounding whitespace is ignored. Negative values parse; the range check
/// rejects them later.
pub fn parse_subset_size(text: &str) -> Result<i64, ReachError> {
    text.trim()
        .parse()
        .map_err(|_| ReachError::InvalidSubsetSize(text.to_string()))
}

/// Reach (%) of the union of `columns`
///
/// An empty column list reaches nobody.
pub fn reach_of<S: AsRef<str>>(dataset: &Dataset, columns: &[S]) -> Result<f64, ReachError> {
    let mut covered = RowMask::new(dataset.row_count());
    for name in columns {
        let name = name.as_ref();
        let mask = dataset
            .column(name)
            .ok_or_else(|| ReachError::UnknownColumn(name.to_string()))?;
        covered.union_with(mask);
    }
    covered.reach_percent().ok_or(ReachError::EmptyDataset)
}

fn run<S: AsRef<str>>(
    dataset: &Dataset,
    selected: &[S],
    size: i128,
    options: &ReachOptions,
) -> Result<Vec<CombinationResult>, ReachError> {
    let plan = ReachPlan::prepare(dataset, selected, size, options)?;
    let mut combinations = Combinations::new(plan.names.len(), plan.subset_size);

    let results: Vec<CombinationResult> = if options.parallel {
        let mut results = Vec::new();
        loop {
            let batch: Vec<Vec<usize>> =
                combinations.by_ref().take(PARALLEL_BATCH_SIZE).collect();
            if batch.is_empty() {
                break;
            }
            results.par_extend(batch.par_iter().map(|combo| plan.evaluate(combo)));
        }
        results
    } else {
        combinations.map(|combo| plan.evaluate(&combo)).collect()
    };

    Ok(results)
}

/// Validated inputs of one run
struct ReachPlan<'a> {
    names: Vec<&'a str>,
    masks: Vec<&'a RowMask>,
    /// Solo reach per selected column, same order as `names`
    solo: Vec<f64>,
    subset_size: usize,
    rows: usize,
}

impl<'a> ReachPlan<'a> {
    fn prepare<S: AsRef<str>>(
        dataset: &'a Dataset,
        selected: &[S],
        size: i128,
        options: &ReachOptions,
    ) -> Result<Self, ReachError> {
        if selected.is_empty() {
            return Err(ReachError::NoColumnsSelected);
        }

        let mut names = Vec::with_capacity(selected.len());
        let mut masks = Vec::with_capacity(selected.len());
        let mut seen = vec![false; dataset.column_count()];
        for name in selected {
            let name = name.as_ref();
            let index = dataset
                .column_index(name)
                .ok_or_else(|| ReachError::UnknownColumn(name.to_string()))?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(ReachError::DuplicateColumn(name.to_string()));
            }
            let (Some(column_name), Some(mask)) = (
                dataset.column_names().get(index),
                dataset.column_at(index),
            ) else {
                return Err(ReachError::UnknownColumn(name.to_string()));
            };
            names.push(column_name.as_str());
            masks.push(mask);
        }

        let n = names.len();
        if size < 1 || size > n as i128 {
            return Err(ReachError::SubsetSizeOutOfRange { size, max: n });
        }
        let subset_size = size as usize;

        let rows = dataset.row_count();
        if rows == 0 {
            return Err(ReachError::EmptyDataset);
        }

        let count = combination_count(n, subset_size);
        if let Some(limit) = options.max_combinations {
            let count = count.unwrap_or(u64::MAX);
            if count > limit {
                return Err(ReachError::TooManyCombinations { count, limit });
            }
        }
        if let Some(message) = combination_warning(n, subset_size, count) {
            warn!("{}", message);
        }
        debug!(
            "Evaluating {:?} combinations of size {} from {} columns over {} rows",
            count, subset_size, n, rows
        );

        let solo = masks
            .iter()
            .map(|mask| percent(mask.count_reached(), rows))
            .collect();

        Ok(Self {
            names,
            masks,
            solo,
            subset_size,
            rows,
        })
    }

    /// Reveal the columns of `combo` in order, recording each step's marginal reach
    fn evaluate(&self, combo: &[usize]) -> CombinationResult {
        let mut covered = RowMask::new(self.rows);
        let mut previous = 0.0;
        let mut columns = Vec::with_capacity(combo.len());

        for (pos, &i) in combo.iter().enumerate() {
            covered.union_with(self.masks[i]);
            let cumulative = percent(covered.count_reached(), self.rows);
            columns.push(ColumnReach {
                column: self.names[i].to_string(),
                solo_reach: self.solo[i],
                incremental_reach: cumulative - previous,
                position: pos + 1,
            });
            previous = cumulative;
        }

        CombinationResult {
            total_reach: previous,
            columns,
        }
    }
}

/// Warning for runs past [`COMBINATION_WARN_THRESHOLD`], `None` otherwise
fn combination_warning(n: usize, k: usize, count: Option<u64>) -> Option<String> {
    match count {
        Some(c) if c <= COMBINATION_WARN_THRESHOLD => None,
        Some(c) => Some(format!(
            "C({}, {}) = {} combinations; this run will take a while",
            n, k, c
        )),
        None => Some(format!(
            "C({}, {}) overflows u64; this run will not finish in practice",
            n, k
        )),
    }
}

#[inline]
fn percent(reached: usize, rows: usize) -> f64 {
    reached as f64 / rows as f64 * PERCENT_SCALE
}
