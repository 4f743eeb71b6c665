//! FILENAME: analytics-engine/src/lib.rs
//! Aggregation engine for the Olympics dashboard.
//!
//! This crate is the query layer: a fixed set of pure functions, each taking
//! the dataset handle plus typed filter parameters and returning a fresh
//! derived table. It depends on `dataset` only for the shared record model.
//!
//! Layers:
//! - `selection`: Typed filter parameters (what the query RESTRICTS)
//! - `dedup`: Deduplication and filter primitives (HOW rows are collapsed)
//! - `view`: Renderable output tables (WHAT we display)
//! - `tally`/`trends`/`pivot`/`ranking`/`athletes`/`stats`: the queries
//!
//! Nothing here caches across calls: the dataset is bounded, queries are
//! recomputed on demand, and there is no shared mutable state to go stale.

pub mod athletes;
pub mod dedup;
pub mod pivot;
pub mod ranking;
pub mod selection;
pub mod stats;
pub mod tally;
pub mod trends;
pub mod view;

pub use athletes::{age_distribution, gold_medal_ages_by_sport, men_vs_women, weight_vs_height};
pub use dedup::{dedupe_athletes, dedupe_medal_rows, filter_by};
pub use pivot::{country_sport_heatmap, sport_year_pivot};
pub use ranking::{most_successful, most_successful_countrywise};
pub use selection::{
    CountrySelection, FilterError, Selection, SportSelection, YearSelection, OVERALL,
};
pub use stats::summary_stats;
pub use tally::{fetch_medal_tally, yearwise_medal_tally};
pub use trends::{data_over_time, TrendDimension};
pub use view::{
    AgeDistribution, AthleteProfileRow, CountryTopAthleteRow, MedalCategory, MedalTally,
    MedalTallyRow, PivotTable, SexSplitRow, SportAgeSample, SummaryStats, TallyKey, TallyShape,
    TopAthleteRow, YearCount,
};
