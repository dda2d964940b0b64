//! Reach engine property tests
//!
//! Random boolean datasets (seeded, so failures reproduce) are run through the
//! engine and checked against invariants that hold for every input:
//!
//! - result count is C(n, k)
//! - total reach equals a direct row-by-row OR, whatever the reveal order
//! - incremental reaches are non-negative and sum to the total
//! - solo reach of a column does not depend on the combination

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use turf_reach::domain::combination::combination_count;
use turf_reach::{Dataset, compute_reach, compute_reach_parallel, reach_of};

// =============================================================================
// Constants
// =============================================================================

const TOLERANCE: f64 = 1e-9;
const SEEDS: [u64; 4] = [1, 7, 42, 2024];

// =============================================================================
// Helper functions
// =============================================================================

/// Random dataset with per-column reach probability drawn from [0.05, 0.6]
fn random_dataset(rng: &mut StdRng, rows: usize, cols: usize) -> (Dataset, Vec<Vec<bool>>) {
    let values: Vec<Vec<bool>> = (0..cols)
        .map(|_| {
            let p = rng.gen_range(0.05..0.6);
            (0..rows).map(|_| rng.gen_bool(p)).collect()
        })
        .collect();
    let names = (0..cols).map(|i| format!("Item {}", i + 1));
    let dataset = Dataset::from_columns(names.zip(values.clone())).unwrap();
    (dataset, values)
}

/// Reach by scanning rows directly, independent of the engine's masks
fn naive_reach(values: &[Vec<bool>], columns: &[usize]) -> f64 {
    let rows = values[0].len();
    let reached = (0..rows)
        .filter(|&row| columns.iter().any(|&c| values[c][row]))
        .count();
    reached as f64 / rows as f64 * 100.0
}

fn column_names(cols: usize) -> Vec<String> {
    (0..cols).map(|i| format!("Item {}", i + 1)).collect()
}

fn index_of(name: &str) -> usize {
    name.trim_start_matches("Item ").parse::<usize>().unwrap() - 1
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_result_count_is_binomial() {
    let mut rng = StdRng::seed_from_u64(SEEDS[0]);
    let (dataset, _) = random_dataset(&mut rng, 50, 7);
    let selected = column_names(7);

    for k in 1..=7 {
        let results = compute_reach(&dataset, &selected, k).unwrap();
        assert_eq!(Some(results.len() as u64), combination_count(7, k), "k={}", k);
    }
}

#[test]
fn test_total_reach_matches_direct_or() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (dataset, values) = random_dataset(&mut rng, 137, 6);
        let selected = column_names(6);

        for result in compute_reach(&dataset, &selected, 3).unwrap() {
            let indices: Vec<usize> = result.column_names().map(index_of).collect();
            let expected = naive_reach(&values, &indices);
            assert!(
                (result.total_reach - expected).abs() < TOLERANCE,
                "seed={} combo={} total={} expected={}",
                seed,
                result.label(),
                result.total_reach,
                expected
            );

            let mut reversed: Vec<&str> = result.column_names().collect();
            reversed.reverse();
            let reversed_reach = reach_of(&dataset, &reversed).unwrap();
            assert!((result.total_reach - reversed_reach).abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_incremental_reach_decomposes_total() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (dataset, _) = random_dataset(&mut rng, 200, 6);
        let selected = column_names(6);

        for result in compute_reach(&dataset, &selected, 4).unwrap() {
            let sum: f64 = result.columns.iter().map(|c| c.incremental_reach).sum();
            assert!(
                (sum - result.total_reach).abs() < TOLERANCE,
                "seed={} combo={} sum={} total={}",
                seed,
                result.label(),
                sum,
                result.total_reach
            );
            for column in &result.columns {
                assert!(column.incremental_reach >= 0.0);
                assert!(column.incremental_reach <= column.solo_reach + TOLERANCE);
            }
        }
    }
}

#[test]
fn test_cumulative_reach_by_position() {
    let mut rng = StdRng::seed_from_u64(SEEDS[1]);
    let (dataset, values) = random_dataset(&mut rng, 80, 5);
    let selected = column_names(5);

    for result in compute_reach(&dataset, &selected, 3).unwrap() {
        let indices: Vec<usize> = result.column_names().map(index_of).collect();
        let mut running = 0.0;
        for (i, column) in result.columns.iter().enumerate() {
            assert_eq!(column.position, i + 1);
            running += column.incremental_reach;
            let expected = naive_reach(&values, &indices[..=i]);
            assert!((running - expected).abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_solo_reach_is_position_independent() {
    let mut rng = StdRng::seed_from_u64(SEEDS[2]);
    let (dataset, values) = random_dataset(&mut rng, 90, 6);
    let selected = column_names(6);
    let results = compute_reach(&dataset, &selected, 3).unwrap();

    for (i, name) in selected.iter().enumerate() {
        let expected = naive_reach(&values, &[i]);
        for result in &results {
            if let Some(column) = result.column(name) {
                assert_eq!(column.solo_reach, expected, "column {}", name);
            }
        }
    }
}

#[test]
fn test_singletons_reach_equals_solo() {
    let mut rng = StdRng::seed_from_u64(SEEDS[3]);
    let (dataset, _) = random_dataset(&mut rng, 64, 5);
    let selected = column_names(5);

    let results = compute_reach(&dataset, &selected, 1).unwrap();
    assert_eq!(results.len(), 5);
    for result in &results {
        let column = &result.columns[0];
        assert_eq!(column.incremental_reach, column.solo_reach);
        assert_eq!(result.total_reach, column.solo_reach);
    }
}

#[test]
fn test_full_size_single_combination() {
    let mut rng = StdRng::seed_from_u64(SEEDS[0]);
    let (dataset, _) = random_dataset(&mut rng, 40, 5);
    let selected = column_names(5);

    let results = compute_reach(&dataset, &selected, 5).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].column_names().collect::<Vec<_>>(), selected);
}

#[test]
fn test_parallel_matches_sequential() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (dataset, _) = random_dataset(&mut rng, 300, 9);
        let selected = column_names(9);

        let sequential = compute_reach(&dataset, &selected, 4).unwrap();
        let parallel = compute_reach_parallel(&dataset, &selected, 4).unwrap();
        assert_eq!(sequential, parallel, "seed={}", seed);
    }
}
