//! FILENAME: analytics-engine/src/trends.rs
//! Time-series aggregation: distinct dimension values per Games year.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use dataset::Dataset;

use crate::view::YearCount;

/// The dimension whose distinct values are counted per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDimension {
    /// Participating nations over the years.
    Region,
    /// Events held over the years.
    Event,
    /// Athletes competing over the years.
    Athlete,
}

/// Counts distinct dimension values per year, ascending by year.
///
/// Each `(year, value)` pair counts once however many rows carry it. Rows
/// with an unresolved region are dropped for the `Region` dimension rather
/// than counted as a category. Empty input yields an empty table.
pub fn data_over_time(dataset: &Dataset, dimension: TrendDimension) -> Vec<YearCount> {
    let mut seen: FxHashSet<(i32, &str)> = FxHashSet::default();
    let mut counts: FxHashMap<i32, u64> = FxHashMap::default();

    for record in dataset.records() {
        let value = match dimension {
            TrendDimension::Region => match record.region.as_deref() {
                Some(region) => region,
                None => continue,
            },
            TrendDimension::Event => record.event.as_str(),
            TrendDimension::Athlete => record.athlete.as_str(),
        };
        if seen.insert((record.year, value)) {
            *counts.entry(record.year).or_default() += 1;
        }
    }

    let mut rows: Vec<YearCount> = counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect();
    rows.sort_by_key(|row| row.year);
    rows
}
