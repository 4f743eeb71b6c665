//! FILENAME: analytics-engine/src/stats.rs
//! Headline statistics for the dashboard's overview panel.

use rustc_hash::FxHashSet;

use dataset::Dataset;

use crate::view::SummaryStats;

/// Distinct-value counts across the whole dataset.
///
/// `editions` subtracts one from the distinct-year count: the source data
/// includes the 1906 Intercalated Games, which are not an official edition.
pub fn summary_stats(dataset: &Dataset) -> SummaryStats {
    let mut cities: FxHashSet<&str> = FxHashSet::default();
    let mut events: FxHashSet<&str> = FxHashSet::default();
    let mut athletes: FxHashSet<&str> = FxHashSet::default();
    for record in dataset.records() {
        cities.insert(&record.city);
        events.insert(&record.event);
        athletes.insert(&record.athlete);
    }

    SummaryStats {
        editions: dataset.years().len().saturating_sub(1),
        hosts: cities.len(),
        sports: dataset.sports().len(),
        events: events.len(),
        athletes: athletes.len(),
        nations: dataset.regions().len(),
    }
}
