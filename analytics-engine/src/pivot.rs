//! FILENAME: analytics-engine/src/pivot.rs
//! Cross-tabulation: dense sport × year matrices for heatmap rendering.
//!
//! Both pivots materialize the full cartesian grid of observed row labels ×
//! observed column labels, zero-filling cells with no data, since the
//! consuming visualizer renders a dense matrix.

use rustc_hash::{FxHashMap, FxHashSet};

use dataset::Dataset;

use crate::dedup::dedupe_medal_rows;
use crate::view::PivotTable;

/// Number of distinct events per sport per year.
///
/// Deduplicates on `(year, sport, event)` first, so an event counts once per
/// edition however many athletes entered it.
pub fn sport_year_pivot(dataset: &Dataset) -> PivotTable {
    let mut seen: FxHashSet<(i32, &str, &str)> = FxHashSet::default();
    let mut cells: FxHashMap<(&str, i32), u32> = FxHashMap::default();

    for record in dataset.records() {
        if seen.insert((record.year, record.sport.as_str(), record.event.as_str())) {
            *cells.entry((record.sport.as_str(), record.year)).or_default() += 1;
        }
    }

    dense_grid(cells)
}

/// Medal count per sport per year for one country.
///
/// Starts from the deduplicated medal-row set and keeps only medal-bearing
/// rows of the given country, so team awards count once.
pub fn country_sport_heatmap(dataset: &Dataset, country: &str) -> PivotTable {
    let mut cells: FxHashMap<(&str, i32), u32> = FxHashMap::default();

    for record in dedupe_medal_rows(dataset.records()) {
        if record.medal.is_none() || record.region.as_deref() != Some(country) {
            continue;
        }
        *cells.entry((record.sport.as_str(), record.year)).or_default() += 1;
    }

    dense_grid(cells)
}

/// Expands sparse `(sport, year) -> count` cells into the dense matrix:
/// sports ascending down the side, years ascending across the top, zeros
/// where no combination was observed.
fn dense_grid(cells: FxHashMap<(&str, i32), u32>) -> PivotTable {
    let mut row_labels: Vec<&str> = Vec::new();
    let mut col_labels: Vec<i32> = Vec::new();
    for &(sport, year) in cells.keys() {
        if !row_labels.contains(&sport) {
            row_labels.push(sport);
        }
        if !col_labels.contains(&year) {
            col_labels.push(year);
        }
    }
    row_labels.sort_unstable();
    col_labels.sort_unstable();

    let grid: Vec<Vec<u32>> = row_labels
        .iter()
        .map(|&sport| {
            col_labels
                .iter()
                .map(|&year| cells.get(&(sport, year)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    PivotTable {
        row_labels: row_labels.into_iter().map(String::from).collect(),
        col_labels,
        cells: grid,
    }
}
