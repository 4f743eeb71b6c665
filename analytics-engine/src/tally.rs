//! FILENAME: analytics-engine/src/tally.rs
//! Medal tally aggregation.
//!
//! Both queries here start from the deduplicated medal-row set (see `dedup`),
//! so a team award counts once however many athletes shared it. Group
//! membership comes from the filtered set itself: a region (or year) that
//! appears only through non-placing rows still gets a tally row with
//! all-zero counts.

use rustc_hash::FxHashMap;

use dataset::{Dataset, Medal, Record};

use crate::dedup::{dedupe_medal_rows, filter_by};
use crate::selection::{CountrySelection, Selection, YearSelection};
use crate::view::{MedalTally, MedalTallyRow, TallyKey, TallyShape, YearCount};

/// Running per-group medal counts.
#[derive(Debug, Clone, Copy, Default)]
struct MedalCounts {
    gold: u32,
    silver: u32,
    bronze: u32,
}

impl MedalCounts {
    fn add(&mut self, medal: Option<Medal>) {
        match medal {
            Some(Medal::Gold) => self.gold += 1,
            Some(Medal::Silver) => self.silver += 1,
            Some(Medal::Bronze) => self.bronze += 1,
            None => {}
        }
    }

    fn into_row(self, key: TallyKey) -> MedalTallyRow {
        MedalTallyRow {
            key,
            gold: self.gold,
            silver: self.silver,
            bronze: self.bronze,
            total: self.gold + self.silver + self.bronze,
        }
    }
}

/// Computes a medal tally under the year/country filters.
///
/// With a specific country the table answers "this country's tally across
/// editions": one row per year, ascending. Otherwise it answers "who leads
/// the medal table": one row per region, sorted descending by Gold with ties
/// kept in alphabetical region order (stable sort over the pre-sorted
/// groups). Empty filtered input yields an empty table, not an error.
pub fn fetch_medal_tally(
    dataset: &Dataset,
    year: &YearSelection,
    country: &CountrySelection,
) -> MedalTally {
    let deduped = dedupe_medal_rows(dataset.records());
    let selection = Selection {
        year: *year,
        country: country.clone(),
        ..Selection::default()
    };
    let filtered = filter_by(&deduped, &selection);

    match country {
        CountrySelection::Country(_) => MedalTally {
            shape: TallyShape::ByYear,
            rows: tally_by_year(&filtered),
        },
        CountrySelection::Overall => MedalTally {
            shape: TallyShape::ByRegion,
            rows: tally_by_region(&filtered),
        },
    }
}

fn tally_by_year(records: &[&Record]) -> Vec<MedalTallyRow> {
    let mut groups: FxHashMap<i32, MedalCounts> = FxHashMap::default();
    for record in records {
        groups.entry(record.year).or_default().add(record.medal);
    }

    let mut rows: Vec<(i32, MedalCounts)> = groups.into_iter().collect();
    rows.sort_by_key(|(year, _)| *year);
    rows.into_iter()
        .map(|(year, counts)| counts.into_row(TallyKey::Year(year)))
        .collect()
}

fn tally_by_region(records: &[&Record]) -> Vec<MedalTallyRow> {
    let mut groups: FxHashMap<&str, MedalCounts> = FxHashMap::default();
    for record in records {
        // Unresolved regions are dropped, never grouped as a category.
        let Some(region) = record.region.as_deref() else {
            continue;
        };
        groups.entry(region).or_default().add(record.medal);
    }

    let mut rows: Vec<(&str, MedalCounts)> = groups.into_iter().collect();
    rows.sort_by_key(|(region, _)| *region);
    // Stable: equal-Gold regions keep their alphabetical order.
    rows.sort_by(|a, b| b.1.gold.cmp(&a.1.gold));
    rows.into_iter()
        .map(|(region, counts)| counts.into_row(TallyKey::Region(region.to_string())))
        .collect()
}

/// Total medals per year for one country, ascending by year. Feeds the
/// country trend line; years where the country won nothing are absent.
pub fn yearwise_medal_tally(dataset: &Dataset, country: &str) -> Vec<YearCount> {
    let mut counts: FxHashMap<i32, u64> = FxHashMap::default();
    for record in dedupe_medal_rows(dataset.records()) {
        if record.medal.is_some() && record.region.as_deref() == Some(country) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::Sex;

    fn gold_row(athlete: &str, year: i32, region: &str, event: &str) -> Record {
        Record::new(
            region,
            &region[..3.min(region.len())].to_uppercase(),
            &format!("{} Summer", year),
            year,
            "Beijing",
            "Basketball",
            event,
            athlete,
            Sex::M,
        )
        .with_region(region)
        .with_medal(Medal::Gold)
    }

    fn team_gold_dataset() -> Dataset {
        // Three athletes sharing one team gold: must tally as a single medal.
        Dataset::new(vec![
            gold_row("A", 2008, "USA", "Basketball Men's Basketball"),
            gold_row("B", 2008, "USA", "Basketball Men's Basketball"),
            gold_row("C", 2008, "USA", "Basketball Men's Basketball"),
        ])
        .unwrap()
    }

    #[test]
    fn test_team_gold_counts_once() {
        let ds = team_gold_dataset();
        let tally = fetch_medal_tally(
            &ds,
            &YearSelection::Overall,
            &CountrySelection::Country("USA".to_string()),
        );
        assert_eq!(tally.shape, TallyShape::ByYear);
        assert_eq!(tally.rows.len(), 1);
        let row = &tally.rows[0];
        assert_eq!(row.key, TallyKey::Year(2008));
        assert_eq!((row.gold, row.silver, row.bronze, row.total), (1, 0, 0, 1));
    }

    #[test]
    fn test_overall_tally_groups_by_region() {
        let ds = Dataset::new(vec![
            gold_row("A", 2008, "USA", "Basketball Men's Basketball"),
            gold_row("B", 2008, "China", "Basketball Women's Basketball"),
            {
                let mut r = gold_row("C", 2008, "China", "Basketball Men's 3x3");
                r.medal = Some(Medal::Bronze);
                r
            },
        ])
        .unwrap();

        let tally = fetch_medal_tally(&ds, &YearSelection::Overall, &CountrySelection::Overall);
        assert_eq!(tally.shape, TallyShape::ByRegion);
        assert_eq!(tally.key_column(), "region");
        assert_eq!(tally.rows.len(), 2);
        for row in &tally.rows {
            assert_eq!(row.total, row.gold + row.silver + row.bronze);
        }
    }

    #[test]
    fn test_region_sort_gold_descending_ties_alphabetical() {
        let ds = Dataset::new(vec![
            gold_row("A", 2008, "Zimbabwe", "Event A"),
            gold_row("B", 2008, "Argentina", "Event B"),
            gold_row("C", 2008, "USA", "Event C"),
            gold_row("D", 2008, "USA", "Event D"),
        ])
        .unwrap();

        let tally = fetch_medal_tally(&ds, &YearSelection::Overall, &CountrySelection::Overall);
        let regions: Vec<&TallyKey> = tally.rows.iter().map(|r| &r.key).collect();
        assert_eq!(
            regions,
            vec![
                &TallyKey::Region("USA".to_string()),
                &TallyKey::Region("Argentina".to_string()),
                &TallyKey::Region("Zimbabwe".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_medal_region_still_listed() {
        let mut no_medal = gold_row("A", 2008, "Iceland", "Handball Men's Handball");
        no_medal.medal = None;
        let ds = Dataset::new(vec![
            no_medal,
            gold_row("B", 2008, "USA", "Basketball Men's Basketball"),
        ])
        .unwrap();

        let tally = fetch_medal_tally(&ds, &YearSelection::Overall, &CountrySelection::Overall);
        assert_eq!(tally.rows.len(), 2);
        let iceland = tally
            .rows
            .iter()
            .find(|r| r.key == TallyKey::Region("Iceland".to_string()))
            .unwrap();
        assert_eq!(iceland.total, 0);
    }

    #[test]
    fn test_unresolved_region_dropped_from_overall_tally() {
        let mut unmapped = gold_row("A", 2008, "USA", "Event A");
        unmapped.region = None;
        let ds = Dataset::new(vec![unmapped]).unwrap();

        let tally = fetch_medal_tally(&ds, &YearSelection::Overall, &CountrySelection::Overall);
        assert!(tally.is_empty());
    }

    #[test]
    fn test_year_and_country_both_selected() {
        let ds = Dataset::new(vec![
            gold_row("A", 2008, "USA", "Event A"),
            gold_row("B", 2012, "USA", "Event B"),
        ])
        .unwrap();

        let tally = fetch_medal_tally(
            &ds,
            &YearSelection::Year(2012),
            &CountrySelection::Country("USA".to_string()),
        );
        assert_eq!(tally.rows.len(), 1);
        assert_eq!(tally.rows[0].key, TallyKey::Year(2012));
        assert_eq!(tally.rows[0].gold, 1);
    }

    #[test]
    fn test_empty_filter_result_yields_empty_table() {
        let ds = team_gold_dataset();
        let tally = fetch_medal_tally(
            &ds,
            &YearSelection::Year(1896),
            &CountrySelection::Overall,
        );
        assert!(tally.is_empty());
        assert_eq!(tally.shape, TallyShape::ByRegion);
    }

    #[test]
    fn test_yearwise_medal_tally_counts_and_sorts() {
        let ds = Dataset::new(vec![
            gold_row("A", 2012, "USA", "Event A"),
            gold_row("B", 2008, "USA", "Event B"),
            gold_row("C", 2008, "USA", "Event C"),
            gold_row("D", 2008, "China", "Event D"),
        ])
        .unwrap();

        let rows = yearwise_medal_tally(&ds, "USA");
        assert_eq!(
            rows,
            vec![
                YearCount { year: 2008, count: 2 },
                YearCount { year: 2012, count: 1 },
            ]
        );
        assert!(yearwise_medal_tally(&ds, "Atlantis").is_empty());
    }

    #[test]
    fn test_yearwise_medal_tally_dedupes_team_rows() {
        let ds = team_gold_dataset();
        let rows = yearwise_medal_tally(&ds, "USA");
        assert_eq!(rows, vec![YearCount { year: 2008, count: 1 }]);
    }
}
