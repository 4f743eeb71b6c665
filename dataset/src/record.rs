//! FILENAME: dataset/src/record.rs
//! PURPOSE: Defines the fundamental data structures for a single participation record.
//! CONTEXT: This file contains the `Record` struct and the `Sex`/`Medal` enums.
//! One `Record` is one row of the source data: one athlete, in one event, at
//! one Games, with the result (if any) that athlete achieved there.
//! It is designed to be lightweight as hundreds of thousands of these
//! instances may exist.

use serde::{Deserialize, Serialize};

/// Athlete sex as recorded in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

/// Medal placement for a row. Non-placing rows carry no medal at all
/// (`Option<Medal>` is `None`), which is the majority of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

/// One row of the source dataset: a single athlete-event-result.
///
/// Team events repeat the same award across every team member: such rows
/// share `(team, noc, games, year, city, sport, event, medal)` and differ
/// only in `athlete`. Collapsing those duplicates is the query layer's job;
/// the record itself stores the data exactly as loaded.
///
/// `region` is the resolved country name for the raw `noc` code. NOC codes
/// with no known mapping stay `None` — never a placeholder string — and
/// region-keyed groupings drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: i32,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub athlete: String,
    pub sex: Sex,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medal: Option<Medal>,
    pub region: Option<String>,
}

impl Record {
    /// Creates a record with the mandatory fields set and every optional
    /// field absent. The `with_*` builders below fill in the rest.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        team: &str,
        noc: &str,
        games: &str,
        year: i32,
        city: &str,
        sport: &str,
        event: &str,
        athlete: &str,
        sex: Sex,
    ) -> Self {
        Record {
            team: team.to_string(),
            noc: noc.to_string(),
            games: games.to_string(),
            year,
            city: city.to_string(),
            sport: sport.to_string(),
            event: event.to_string(),
            athlete: athlete.to_string(),
            sex,
            age: None,
            height: None,
            weight: None,
            medal: None,
            region: None,
        }
    }

    pub fn with_medal(mut self, medal: Medal) -> Self {
        self.medal = Some(medal);
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_round_trip() {
        let record = Record::new(
            "United States",
            "USA",
            "2008 Summer",
            2008,
            "Beijing",
            "Swimming",
            "Swimming Men's 100 metres Butterfly",
            "Michael Phelps",
            Sex::M,
        )
        .with_region("USA")
        .with_medal(Medal::Gold)
        .with_age(23.0);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["medal"], "Gold");
        assert_eq!(json["sex"], "M");
        assert_eq!(json["region"], "USA");
        // Absent optionals serialize as null, never a placeholder string.
        assert!(json["height"].is_null());

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_medal_names_serialize_as_tier_labels() {
        for (medal, label) in [
            (Medal::Gold, "Gold"),
            (Medal::Silver, "Silver"),
            (Medal::Bronze, "Bronze"),
        ] {
            assert_eq!(
                serde_json::to_value(medal).unwrap(),
                serde_json::Value::String(label.to_string())
            );
        }
    }
}
