//! FILENAME: analytics-engine/src/ranking.rs
//! Top-N athlete rankings by medal count.
//!
//! Counting walks the medal-bearing rows in original order, so equal counts
//! tie-break by first encounter (the sort below is stable). Sport and region
//! for a ranked athlete are joined back from that athlete's first record in
//! original dataset order — athletes with entries in several sports resolve
//! deterministically to the earliest one.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use dataset::{Dataset, Record};

use crate::selection::SportSelection;
use crate::view::{CountryTopAthleteRow, TopAthleteRow};

/// Row cap for the overall ranking.
const TOP_OVERALL: usize = 15;

/// Row cap for the per-country ranking.
const TOP_COUNTRYWISE: usize = 10;

/// The most successful athletes, optionally restricted to one sport.
/// At most 15 rows; fewer qualifying athletes return all of them.
pub fn most_successful(dataset: &Dataset, sport: &SportSelection) -> Vec<TopAthleteRow> {
    let ranked = rank_athletes(
        dataset,
        |record| record.medal.is_some() && sport.matches(record),
        TOP_OVERALL,
    );
    let first_records = first_record_by_athlete(dataset);

    ranked
        .into_iter()
        .map(|(name, medals)| {
            let first = first_records[name];
            TopAthleteRow {
                name: name.to_string(),
                medals,
                sport: first.sport.clone(),
                region: first.region.clone(),
            }
        })
        .collect()
}

/// The top athletes of one country. At most 10 rows; the region column is
/// omitted since it is the queried country throughout.
pub fn most_successful_countrywise(dataset: &Dataset, country: &str) -> Vec<CountryTopAthleteRow> {
    let ranked = rank_athletes(
        dataset,
        |record| record.medal.is_some() && record.region.as_deref() == Some(country),
        TOP_COUNTRYWISE,
    );
    let first_records = first_record_by_athlete(dataset);

    ranked
        .into_iter()
        .map(|(name, medals)| CountryTopAthleteRow {
            name: name.to_string(),
            medals,
            sport: first_records[name].sport.clone(),
        })
        .collect()
}

/// Counts qualifying rows per athlete and returns the top `limit` as
/// `(name, count)`, descending by count, ties in first-encounter order.
fn rank_athletes<'a>(
    dataset: &'a Dataset,
    qualifies: impl Fn(&Record) -> bool,
    limit: usize,
) -> Vec<(&'a str, u32)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: FxHashMap<&str, u32> = FxHashMap::default();

    for record in dataset.records() {
        if !qualifies(record) {
            continue;
        }
        match counts.entry(record.athlete.as_str()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                order.push(record.athlete.as_str());
                entry.insert(1);
            }
        }
    }

    let mut ranked: Vec<(&str, u32)> = order
        .into_iter()
        .map(|name| (name, counts[name]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// First record per athlete name, in original dataset order.
fn first_record_by_athlete(dataset: &Dataset) -> FxHashMap<&str, &Record> {
    let mut first: FxHashMap<&str, &Record> = FxHashMap::default();
    for record in dataset.records() {
        first.entry(record.athlete.as_str()).or_insert(record);
    }
    first
}
