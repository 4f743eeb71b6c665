//! FILENAME: analytics-engine/src/athletes.rs
//! Demographic aggregations over the deduplicated athlete set.
//!
//! Every query here first collapses to one row per `(athlete, region)` pair:
//! an athlete counts once regardless of how many events they entered, and
//! their surviving row is the first one in original dataset order.

use rustc_hash::FxHashMap;

use dataset::{Dataset, Medal, Sex};

use crate::dedup::dedupe_athletes;
use crate::selection::SportSelection;
use crate::view::{AgeDistribution, AthleteProfileRow, SexSplitRow, SportAgeSample};

/// Per-athlete height/weight projection for the scatter plot.
///
/// A passthrough, not a reduction: missing measurements stay `None`, and
/// non-placing athletes are recoded to the explicit `"No Medal"` category
/// rather than dropped. Optionally restricted to one sport (applied after
/// the athlete dedup, so the surviving row decides the sport).
pub fn weight_vs_height(dataset: &Dataset, sport: &SportSelection) -> Vec<AthleteProfileRow> {
    dedupe_athletes(dataset.records())
        .into_iter()
        .filter(|record| sport.matches(record))
        .map(|record| AthleteProfileRow {
            name: record.athlete.clone(),
            sport: record.sport.clone(),
            sex: record.sex,
            height: record.height,
            weight: record.weight,
            medal: record.medal.into(),
        })
        .collect()
}

/// Distinct athletes per year split by sex, ascending by year.
///
/// The per-sex counts are outer-joined on year: a year where only one sex
/// competed still gets a row, with the missing side at zero.
pub fn men_vs_women(dataset: &Dataset) -> Vec<SexSplitRow> {
    let mut by_year: FxHashMap<i32, (u64, u64)> = FxHashMap::default();
    for record in dedupe_athletes(dataset.records()) {
        let entry = by_year.entry(record.year).or_default();
        match record.sex {
            Sex::M => entry.0 += 1,
            Sex::F => entry.1 += 1,
        }
    }

    let mut rows: Vec<SexSplitRow> = by_year
        .into_iter()
        .map(|(year, (male, female))| SexSplitRow { year, male, female })
        .collect();
    rows.sort_by_key(|row| row.year);
    rows
}

/// Age samples for the distribution plot: every athlete with a known age,
/// plus one sample per medal tier. Missing ages are dropped, never recoded.
pub fn age_distribution(dataset: &Dataset) -> AgeDistribution {
    let mut dist = AgeDistribution::default();
    for record in dedupe_athletes(dataset.records()) {
        let Some(age) = record.age else {
            continue;
        };
        dist.overall.push(age);
        match record.medal {
            Some(Medal::Gold) => dist.gold.push(age),
            Some(Medal::Silver) => dist.silver.push(age),
            Some(Medal::Bronze) => dist.bronze.push(age),
            None => {}
        }
    }
    dist
}

/// Gold-medalist age samples per sport, for a caller-supplied sport list.
/// Requested sports with no qualifying athletes still appear, with an empty
/// sample, so plot labels line up with the request.
pub fn gold_medal_ages_by_sport(dataset: &Dataset, sports: &[String]) -> Vec<SportAgeSample> {
    let athletes = dedupe_athletes(dataset.records());
    sports
        .iter()
        .map(|sport| {
            let ages: Vec<f64> = athletes
                .iter()
                .filter(|record| {
                    record.sport == *sport && record.medal == Some(Medal::Gold)
                })
                .filter_map(|record| record.age)
                .collect();
            SportAgeSample {
                sport: sport.clone(),
                ages,
            }
        })
        .collect()
}
