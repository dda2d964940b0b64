//! Plain text report formatting

use crate::constants::WATERFALL_BAR_WIDTH;
use crate::domain::result::CombinationResult;

const HEADERS: [&str; 5] = [
    "Combination",
    "Total Reach (%)",
    "Concept",
    "Total Reach of Concept (%)",
    "Incremental Reach (%)",
];

/// Column gap between table cells
const GAP: usize = 2;

/// Render results as a table with one line per (combination, concept)
pub fn format_results_table(results: &[CombinationResult]) -> String {
    let rows: Vec<[String; 5]> = results
        .iter()
        .flat_map(|result| {
            let label = result.label();
            let total = format!("{:.2}", result.total_reach);
            result.columns.iter().map(move |c| {
                [
                    label.clone(),
                    total.clone(),
                    c.column.clone(),
                    format!("{:.2}", c.solo_reach),
                    format!("{:.2}", c.incremental_reach),
                ]
            })
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let total_width = widths.iter().sum::<usize>() + GAP * (widths.len() - 1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            out.push_str(cell.as_ref());
        } else {
            out.push_str(&format!("{:<w$}", cell.as_ref(), w = width + GAP));
        }
    }
    out.push('\n');
}

/// Render the waterfall series of one combination as horizontal bars
pub fn format_waterfall(result: &CombinationResult) -> String {
    let bars = result.waterfall();
    let label_width = bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in &bars {
        let len = (value.max(0.0) / 100.0 * WATERFALL_BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{:<w$}  {:>6.2}%  {}\n",
            label,
            value,
            "#".repeat(len),
            w = label_width
        ));
    }
    out
}
