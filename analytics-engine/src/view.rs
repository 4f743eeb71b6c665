//! FILENAME: analytics-engine/src/view.rs
//! Query views - Renderable output for the dashboard.
//!
//! Every query produces a fresh table built from these types; none retains
//! identity across calls. Chart and table renderers bind to the serialized
//! column names directly, so the `#[serde(rename = …)]` attributes here are
//! part of the external contract and must stay stable:
//! - Medal tallies: `Gold`, `Silver`, `Bronze`, `total`
//! - Rankings: `Name`, `Medals`, `Sport`, `region`
//! - Trends and splits: `Year`, `Male`, `Female`
//! - Athlete profiles: medal category including the literal `"No Medal"`

use serde::{Deserialize, Serialize};

use dataset::{Medal, Sex};

// ============================================================================
// MEDAL TALLY
// ============================================================================

/// Which dimension keys the tally rows: one row per leading region, or one
/// row per Games edition for a single country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyShape {
    ByRegion,
    ByYear,
}

/// The key column of a medal-tally row. Flattened into the row when
/// serialized, so renderers see a top-level `region` or `Year` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyKey {
    #[serde(rename = "region")]
    Region(String),
    #[serde(rename = "Year")]
    Year(i32),
}

/// One row of a medal tally. All four counts are non-negative and
/// `total == gold + silver + bronze` by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTallyRow {
    #[serde(flatten)]
    pub key: TallyKey,
    #[serde(rename = "Gold")]
    pub gold: u32,
    #[serde(rename = "Silver")]
    pub silver: u32,
    #[serde(rename = "Bronze")]
    pub bronze: u32,
    #[serde(rename = "total")]
    pub total: u32,
}

/// A medal-tally table. Empty filtered input yields an empty `rows` vector
/// with the shape still describing the key column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub shape: TallyShape,
    pub rows: Vec<MedalTallyRow>,
}

impl MedalTally {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rendered name of the key column.
    pub fn key_column(&self) -> &'static str {
        match self.shape {
            TallyShape::ByRegion => "region",
            TallyShape::ByYear => "Year",
        }
    }
}

// ============================================================================
// TIME SERIES
// ============================================================================

/// One point of a per-year trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    #[serde(rename = "Year")]
    pub year: i32,
    pub count: u64,
}

// ============================================================================
// PIVOT / CROSS-TAB
// ============================================================================

/// A dense cross-tab matrix: sports down the side, Games years across the
/// top, every observed (row, column) combination materialized (zero-filled
/// where no data exists) so the consuming heatmap can render a full grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotTable {
    /// Row labels (sports), ascending.
    pub row_labels: Vec<String>,
    /// Column labels (years), ascending.
    pub col_labels: Vec<i32>,
    /// `cells[r][c]` is the count for `(row_labels[r], col_labels[c])`.
    pub cells: Vec<Vec<u32>>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_labels.len()
    }

    /// Looks up a cell by labels. `None` only when the label itself was
    /// never observed; observed combinations always have a value.
    pub fn cell(&self, row: &str, col: i32) -> Option<u32> {
        let r = self.row_labels.iter().position(|label| label == row)?;
        let c = self.col_labels.iter().position(|&label| label == col)?;
        Some(self.cells[r][c])
    }
}

// ============================================================================
// RANKINGS
// ============================================================================

/// One row of the overall most-successful-athletes ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopAthleteRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Medals")]
    pub medals: u32,
    #[serde(rename = "Sport")]
    pub sport: String,
    pub region: Option<String>,
}

/// One row of a single country's top-athletes ranking. The region column is
/// omitted since it is constant for the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTopAthleteRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Medals")]
    pub medals: u32,
    #[serde(rename = "Sport")]
    pub sport: String,
}

// ============================================================================
// DEMOGRAPHICS
// ============================================================================

/// Medal result recoded as an explicit category, so non-placing athletes
/// stay visible in demographic scatter plots instead of dropping out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedalCategory {
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "No Medal")]
    NoMedal,
}

impl From<Option<Medal>> for MedalCategory {
    fn from(medal: Option<Medal>) -> Self {
        match medal {
            Some(Medal::Gold) => MedalCategory::Gold,
            Some(Medal::Silver) => MedalCategory::Silver,
            Some(Medal::Bronze) => MedalCategory::Bronze,
            None => MedalCategory::NoMedal,
        }
    }
}

impl MedalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MedalCategory::Gold => "Gold",
            MedalCategory::Silver => "Silver",
            MedalCategory::Bronze => "Bronze",
            MedalCategory::NoMedal => "No Medal",
        }
    }
}

/// One deduplicated athlete for the height/weight scatter. A passthrough
/// projection, not a reduction: missing measurements stay `None` and the
/// renderer decides what to do with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfileRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sport")]
    pub sport: String,
    pub sex: Sex,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medal: MedalCategory,
}

/// Per-year athlete counts split by sex. Years where only one sex appears
/// still get a row, with the missing side at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexSplitRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Male")]
    pub male: u64,
    #[serde(rename = "Female")]
    pub female: u64,
}

/// Age samples for distribution plots: all athletes plus one sample per
/// medal tier. Missing ages are dropped from every sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgeDistribution {
    pub overall: Vec<f64>,
    pub gold: Vec<f64>,
    pub silver: Vec<f64>,
    pub bronze: Vec<f64>,
}

/// Gold-medalist age sample for one sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportAgeSample {
    pub sport: String,
    pub ages: Vec<f64>,
}

// ============================================================================
// HEADLINE STATISTICS
// ============================================================================

/// The dashboard's headline counts. `editions` is the distinct-year count
/// minus one, matching the source data's treatment of the 1906 Intercalated
/// Games as a non-edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub athletes: usize,
    pub nations: usize,
}
