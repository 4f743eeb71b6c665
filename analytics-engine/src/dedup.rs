//! FILENAME: analytics-engine/src/dedup.rs
//! Deduplication and filter primitives.
//!
//! Team events record one row per team member for the same award, so the raw
//! data over-counts team medals proportional to team size. Every medal
//! aggregation therefore starts by collapsing duplicates of the medal-row
//! tuple `(team, noc, games, year, city, sport, event, medal)` to a single
//! surviving row. Participation and demographic views instead collapse to
//! one row per `(athlete, region)` pair.
//!
//! All primitives borrow: they return references into the input in original
//! order (first occurrence survives) and never mutate or copy records.

use rustc_hash::FxHashSet;

use dataset::{Medal, Record};

use crate::selection::Selection;

/// Borrowed hash key over the medal-row tuple.
#[derive(PartialEq, Eq, Hash)]
struct MedalRowKey<'a> {
    team: &'a str,
    noc: &'a str,
    games: &'a str,
    year: i32,
    city: &'a str,
    sport: &'a str,
    event: &'a str,
    medal: Option<Medal>,
}

impl<'a> MedalRowKey<'a> {
    fn of(record: &'a Record) -> Self {
        MedalRowKey {
            team: &record.team,
            noc: &record.noc,
            games: &record.games,
            year: record.year,
            city: &record.city,
            sport: &record.sport,
            event: &record.event,
            medal: record.medal,
        }
    }
}

/// Collapses duplicate medal-row tuples to one surviving row each.
///
/// Mandatory first step before any medal-count aggregation. Which duplicate
/// survives does not affect counts; the first occurrence is kept so output
/// order stays deterministic.
pub fn dedupe_medal_rows(records: &[Record]) -> Vec<&Record> {
    let mut seen = FxHashSet::default();
    records
        .iter()
        .filter(|record| seen.insert(MedalRowKey::of(record)))
        .collect()
}

/// Collapses to one row per distinct `(athlete, region)` pair.
///
/// Used by participation and demographic views, where an athlete counts once
/// regardless of how many events they entered. First occurrence survives.
pub fn dedupe_athletes(records: &[Record]) -> Vec<&Record> {
    let mut seen: FxHashSet<(&str, Option<&str>)> = FxHashSet::default();
    records
        .iter()
        .filter(|record| seen.insert((record.athlete.as_str(), record.region.as_deref())))
        .collect()
}

/// Returns the subset of `records` matching the selection, preserving order.
pub fn filter_by<'a>(records: &[&'a Record], selection: &Selection) -> Vec<&'a Record> {
    records
        .iter()
        .copied()
        .filter(|record| selection.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{CountrySelection, YearSelection};
    use dataset::Sex;

    fn team_gold(athlete: &str) -> Record {
        Record::new(
            "United States",
            "USA",
            "2008 Summer",
            2008,
            "Beijing",
            "Basketball",
            "Basketball Men's Basketball",
            athlete,
            Sex::M,
        )
        .with_region("USA")
        .with_medal(Medal::Gold)
    }

    #[test]
    fn test_team_medal_rows_collapse_to_one() {
        let records = vec![team_gold("A"), team_gold("B"), team_gold("C")];
        let deduped = dedupe_medal_rows(&records);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].athlete, "A");
    }

    #[test]
    fn test_distinct_events_survive_dedup() {
        let mut other_event = team_gold("A");
        other_event.event = "Basketball Women's Basketball".to_string();
        let mut other_medal = team_gold("B");
        other_medal.medal = Some(Medal::Silver);
        let records = vec![team_gold("A"), other_event, other_medal];
        assert_eq!(dedupe_medal_rows(&records).len(), 3);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let records = vec![team_gold("A"), team_gold("B"), team_gold("C")];
        let once: Vec<Record> = dedupe_medal_rows(&records).into_iter().cloned().collect();
        let twice: Vec<Record> = dedupe_medal_rows(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedupe_athletes_one_row_per_athlete() {
        let mut second_games = team_gold("A");
        second_games.year = 2012;
        second_games.games = "2012 Summer".to_string();
        let records = vec![team_gold("A"), second_games, team_gold("B")];
        let athletes = dedupe_athletes(&records);
        assert_eq!(athletes.len(), 2);
        assert_eq!(athletes[0].year, 2008);
    }

    #[test]
    fn test_dedupe_athletes_separates_unresolved_region() {
        // Same name under a resolved and an unresolved region stays two rows.
        let mut unmapped = team_gold("A");
        unmapped.region = None;
        let records = vec![team_gold("A"), unmapped];
        assert_eq!(dedupe_athletes(&records).len(), 2);
    }

    #[test]
    fn test_filter_by_is_monotone_and_preserves_order() {
        let records = vec![team_gold("A"), team_gold("B"), team_gold("C")];
        let refs: Vec<&Record> = records.iter().collect();

        let all = filter_by(&refs, &Selection::default());
        assert_eq!(all.len(), refs.len());

        let by_year = filter_by(&refs, &Selection::year(YearSelection::Year(2008)));
        assert!(by_year.len() <= refs.len());
        assert_eq!(by_year[0].athlete, "A");

        let none = filter_by(
            &refs,
            &Selection::country(CountrySelection::Country("Atlantis".to_string())),
        );
        assert!(none.is_empty());
    }
}
