//! FILENAME: analytics-engine/src/selection.rs
//! Selection - The typed filter parameters of the query surface.
//!
//! This module contains the types that DESCRIBE a query's restriction on the
//! three filterable dimensions (year, country, sport). These structures are
//! designed to be:
//! - Serializable (for saving/restoring dashboard state)
//! - Parsed from the UI collaborator's string widgets, where the literal
//!   `"Overall"` means "no restriction" on a dimension
//! - Immutable snapshots of user intent
//!
//! Parsing is the one place filter input can fail; applying a parsed
//! selection never does.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dataset::Record;

/// The sentinel the UI sends for an unrestricted dimension.
pub const OVERALL: &str = "Overall";

/// Rejected filter parameter text. Caught at the boundary; queries built
/// from already-typed selections cannot hit this.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid year filter: {0:?} is neither \"Overall\" nor a positive integer")]
    InvalidYear(String),

    #[error("invalid country filter: {0:?}")]
    InvalidCountry(String),

    #[error("invalid sport filter: {0:?}")]
    InvalidSport(String),
}

/// Restriction on the Games year dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum YearSelection {
    #[default]
    Overall,
    Year(i32),
}

impl YearSelection {
    /// Parses UI text: `"Overall"` or a positive integer year.
    pub fn parse(text: &str) -> Result<Self, FilterError> {
        let text = text.trim();
        if text == OVERALL {
            return Ok(YearSelection::Overall);
        }
        match text.parse::<i32>() {
            Ok(year) if year > 0 => Ok(YearSelection::Year(year)),
            _ => Err(FilterError::InvalidYear(text.to_string())),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            YearSelection::Overall => true,
            YearSelection::Year(year) => record.year == *year,
        }
    }
}

/// Restriction on the resolved country (region) dimension.
///
/// A specific country never matches a record whose region is unresolved:
/// null is not a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CountrySelection {
    #[default]
    Overall,
    Country(String),
}

impl CountrySelection {
    /// Parses UI text: `"Overall"` or a non-blank country name.
    pub fn parse(text: &str) -> Result<Self, FilterError> {
        let text = text.trim();
        if text == OVERALL {
            return Ok(CountrySelection::Overall);
        }
        if text.is_empty() {
            return Err(FilterError::InvalidCountry(text.to_string()));
        }
        Ok(CountrySelection::Country(text.to_string()))
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            CountrySelection::Overall => true,
            CountrySelection::Country(country) => record.region.as_deref() == Some(country),
        }
    }
}

/// Restriction on the sport dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SportSelection {
    #[default]
    Overall,
    Sport(String),
}

impl SportSelection {
    /// Parses UI text: `"Overall"` or a non-blank sport name.
    pub fn parse(text: &str) -> Result<Self, FilterError> {
        let text = text.trim();
        if text == OVERALL {
            return Ok(SportSelection::Overall);
        }
        if text.is_empty() {
            return Err(FilterError::InvalidSport(text.to_string()));
        }
        Ok(SportSelection::Sport(text.to_string()))
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            SportSelection::Overall => true,
            SportSelection::Sport(sport) => record.sport == *sport,
        }
    }
}

/// The combined restriction over all three dimensions. Each dimension is
/// optional and independent; the default selects everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Selection {
    pub year: YearSelection,
    pub country: CountrySelection,
    pub sport: SportSelection,
}

impl Selection {
    pub fn year(year: YearSelection) -> Self {
        Selection {
            year,
            ..Selection::default()
        }
    }

    pub fn country(country: CountrySelection) -> Self {
        Selection {
            country,
            ..Selection::default()
        }
    }

    pub fn sport(sport: SportSelection) -> Self {
        Selection {
            sport,
            ..Selection::default()
        }
    }

    /// True when the record passes every supplied dimension filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.year.matches(record) && self.country.matches(record) && self.sport.matches(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::Sex;

    fn record_for(year: i32, region: Option<&str>, sport: &str) -> Record {
        let mut r = Record::new(
            "Team", "NOC", "Games", year, "City", sport, "Event", "Athlete", Sex::F,
        );
        r.region = region.map(String::from);
        r
    }

    #[test]
    fn test_parse_overall_sentinel() {
        assert_eq!(YearSelection::parse("Overall").unwrap(), YearSelection::Overall);
        assert_eq!(
            CountrySelection::parse("Overall").unwrap(),
            CountrySelection::Overall
        );
        assert_eq!(
            SportSelection::parse(" Overall ").unwrap(),
            SportSelection::Overall
        );
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(
            YearSelection::parse("2008").unwrap(),
            YearSelection::Year(2008)
        );
        assert_eq!(
            YearSelection::parse("abc").unwrap_err(),
            FilterError::InvalidYear("abc".to_string())
        );
        assert_eq!(
            YearSelection::parse("-4").unwrap_err(),
            FilterError::InvalidYear("-4".to_string())
        );
    }

    #[test]
    fn test_parse_blank_country_and_sport_rejected() {
        assert!(matches!(
            CountrySelection::parse("  "),
            Err(FilterError::InvalidCountry(_))
        ));
        assert!(matches!(
            SportSelection::parse(""),
            Err(FilterError::InvalidSport(_))
        ));
    }

    #[test]
    fn test_country_never_matches_unresolved_region() {
        let unmapped = record_for(2008, None, "Judo");
        let selection = CountrySelection::Country("USA".to_string());
        assert!(!selection.matches(&unmapped));
        assert!(CountrySelection::Overall.matches(&unmapped));
    }

    #[test]
    fn test_combined_selection_is_independent_per_dimension() {
        let r = record_for(2008, Some("USA"), "Judo");
        let selection = Selection {
            year: YearSelection::Year(2008),
            country: CountrySelection::Country("USA".to_string()),
            sport: SportSelection::Sport("Judo".to_string()),
        };
        assert!(selection.matches(&r));

        let wrong_sport = record_for(2008, Some("USA"), "Fencing");
        assert!(!selection.matches(&wrong_sport));
    }

    #[test]
    fn test_default_selection_matches_everything() {
        let r = record_for(1896, None, "Athletics");
        assert!(Selection::default().matches(&r));
    }
}
