use turf_reach::{
    CombinationResult, Dataset, ReachError, best_combination, compute_reach, compute_reach_str,
    rank_by_total_reach,
};

const T: bool = true;
const F: bool = false;

fn dataset(columns: &[(&str, [bool; 4])]) -> Dataset {
    Dataset::from_columns(columns.iter().map(|(name, values)| (*name, values.to_vec()))).unwrap()
}

fn increments(result: &CombinationResult) -> Vec<f64> {
    result.columns.iter().map(|c| c.incremental_reach).collect()
}

#[test]
fn test_disjoint_pair() {
    let data = dataset(&[("A", [T, F, F, F]), ("B", [F, T, F, F])]);
    let results = compute_reach(&data, &["A", "B"], 2).unwrap();

    assert_eq!(results.len(), 1);
    let combo = &results[0];
    assert_eq!(combo.label(), "A, B");
    assert_eq!(combo.total_reach, 50.0);
    assert_eq!(combo.column("A").map(|c| c.solo_reach), Some(25.0));
    assert_eq!(combo.column("B").map(|c| c.solo_reach), Some(25.0));
    assert_eq!(increments(combo), [25.0, 25.0]);
}

#[test]
fn test_redundant_item_depends_on_reveal_order() {
    let data = dataset(&[("A", [T, T, F, F]), ("B", [T, F, F, F])]);

    let ab = compute_reach(&data, &["A", "B"], 2).unwrap();
    assert_eq!(increments(&ab[0]), [50.0, 0.0]);

    let ba = compute_reach(&data, &["B", "A"], 2).unwrap();
    assert_eq!(ba[0].label(), "B, A");
    assert_eq!(increments(&ba[0]), [25.0, 25.0]);

    assert_eq!(ab[0].total_reach, 50.0);
    assert_eq!(ba[0].total_reach, 50.0);
}

#[test]
fn test_three_items_ranking() {
    let data = dataset(&[
        ("A", [T, T, F, F]),
        ("B", [T, F, F, F]),
        ("C", [F, F, T, F]),
    ]);
    let results = compute_reach(&data, &["A", "B", "C"], 2).unwrap();

    let labels: Vec<_> = results.iter().map(CombinationResult::label).collect();
    assert_eq!(labels, ["A, B", "A, C", "B, C"]);

    let ranked: Vec<_> = rank_by_total_reach(&results)
        .iter()
        .map(|r| (r.label(), r.total_reach))
        .collect();
    assert_eq!(
        ranked,
        [
            ("A, C".to_string(), 75.0),
            ("A, B".to_string(), 50.0),
            ("B, C".to_string(), 50.0),
        ]
    );
    assert_eq!(best_combination(&results).map(|r| r.label()), Some("A, C".to_string()));
}

#[test]
fn test_never_reached_column() {
    let data = dataset(&[("A", [T, F, T, F]), ("Z", [F, F, F, F])]);
    let results = compute_reach(&data, &["Z", "A"], 2).unwrap();

    assert_eq!(increments(&results[0]), [0.0, 50.0]);
    assert_eq!(results[0].column("Z").map(|c| c.solo_reach), Some(0.0));
}

#[test]
fn test_invalid_inputs() {
    let data = dataset(&[("A", [T, F, F, F]), ("B", [F, T, F, F])]);

    assert_eq!(
        compute_reach_str(&data, &["A", "B"], "abc"),
        Err(ReachError::InvalidSubsetSize("abc".to_string()))
    );
    assert_eq!(
        compute_reach_str(&data, &["A", "B"], "0"),
        Err(ReachError::SubsetSizeOutOfRange { size: 0, max: 2 })
    );
    assert_eq!(
        compute_reach_str(&data, &["A", "B"], "3"),
        Err(ReachError::SubsetSizeOutOfRange { size: 3, max: 2 })
    );
    let none: [&str; 0] = [];
    assert_eq!(
        compute_reach_str(&data, &none, "1"),
        Err(ReachError::NoColumnsSelected)
    );
    assert_eq!(
        compute_reach(&data, &["A", "Q"], 1),
        Err(ReachError::UnknownColumn("Q".to_string()))
    );
}

#[test]
fn test_runs_do_not_share_state() {
    let data = dataset(&[("A", [T, T, F, F]), ("B", [T, F, F, F])]);

    let first = compute_reach(&data, &["A", "B"], 1).unwrap();
    let second = compute_reach(&data, &["B"], 1).unwrap();
    let again = compute_reach(&data, &["A", "B"], 1).unwrap();

    assert_eq!(second.len(), 1);
    assert_eq!(first, again);
}
