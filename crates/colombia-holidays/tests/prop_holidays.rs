//! Property-based tests for the holiday engine using proptest.
//!
//! These tests verify invariants that should hold for *any* supported year,
//! not just the specific examples in `engine_tests.rs`.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use colombia_holidays::rules::MOVABLE_TO_MONDAY;
use colombia_holidays::{
    easter_sunday, fixed_holidays, holiday_name, is_holiday, next_monday,
    resolve_easter_relative_holidays, resolve_movable_holidays, resolve_year_holidays, MAX_YEAR,
    MIN_YEAR,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_year() -> impl Strategy<Value = i32> {
    MIN_YEAR..=MAX_YEAR
}

/// Any date in a supported year. Day is capped at 28 to avoid invalid combos.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (arb_year(), 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Easter is a Sunday between March 22 and April 25
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn easter_is_sunday_within_bounds(year in arb_year()) {
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert_eq!(easter.year(), year);

        let earliest = NaiveDate::from_ymd_opt(year, 3, 22).unwrap();
        let latest = NaiveDate::from_ymd_opt(year, 4, 25).unwrap();
        prop_assert!(easter >= earliest && easter <= latest, "Easter {} out of range", easter);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Monday shifting lands on a Monday within the next six days
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn next_monday_is_monday_within_a_week(date in arb_date()) {
        let shifted = next_monday(date);
        prop_assert_eq!(shifted.weekday(), Weekday::Mon);
        let delta = (shifted - date).num_days();
        prop_assert!((0..7).contains(&delta));
        prop_assert_eq!(delta == 0, date.weekday() == Weekday::Mon);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Every movable holiday is observed on a Monday of the same year
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn movable_holidays_resolve_to_mondays(year in arb_year()) {
        let movable = resolve_movable_holidays(year).unwrap();
        prop_assert_eq!(movable.len(), MOVABLE_TO_MONDAY.len());

        for &(nominal, name) in MOVABLE_TO_MONDAY {
            let nominal = nominal.in_year(year).unwrap();
            let observed = movable
                .iter()
                .find(|h| h.name == name)
                .map(|h| h.date)
                .unwrap();
            prop_assert_eq!(observed.weekday(), Weekday::Mon);
            prop_assert_eq!(observed.year(), year);
            prop_assert!(observed >= nominal && observed < nominal + Duration::days(7));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Easter-relative Mondays really are Mondays
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn easter_relative_weekdays(year in arb_year()) {
        let easter = resolve_easter_relative_holidays(year).unwrap();
        let weekdays: Vec<Weekday> = easter.iter().map(|h| h.date.weekday()).collect();
        // Calendar order: Thursday, Friday, then three Mondays.
        prop_assert_eq!(
            weekdays,
            vec![Weekday::Thu, Weekday::Fri, Weekday::Mon, Weekday::Mon, Weekday::Mon]
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Year table size is 18 exactly when the layers are disjoint
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn year_table_size_matches_layer_overlap(year in arb_year()) {
        let fixed = fixed_holidays(year).unwrap();
        let movable = resolve_movable_holidays(year).unwrap();
        let easter = resolve_easter_relative_holidays(year).unwrap();

        let mut keys: Vec<_> = fixed.keys().chain(movable.keys()).chain(easter.keys()).collect();
        keys.sort();
        keys.dedup();

        let table = resolve_year_holidays(year).unwrap();
        prop_assert_eq!(table.len(), keys.len());
        prop_assert!(table.len() <= 18 && table.len() >= 17);
        if keys.len() == 18 {
            prop_assert_eq!(table.len(), fixed.len() + movable.len() + easter.len());
        }

        // Easter-relative entries always survive collisions.
        for holiday in easter.iter() {
            prop_assert_eq!(table.get(holiday.key()).map(|h| h.name), Some(holiday.name));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Resolution is a pure function of the year
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn resolution_is_idempotent(year in arb_year()) {
        prop_assert_eq!(resolve_year_holidays(year).unwrap(), resolve_year_holidays(year).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Property 7: Sundays are always holidays named "Domingo (Sunday)"
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn every_sunday_is_a_holiday(date in arb_date()) {
        let days_to_sunday = 6 - date.weekday().num_days_from_monday();
        let sunday = date + Duration::days(i64::from(days_to_sunday));
        prop_assume!(sunday.year() <= MAX_YEAR);

        prop_assert!(is_holiday(sunday).unwrap());
        prop_assert_eq!(holiday_name(sunday).unwrap(), Some("Domingo (Sunday)"));
    }
}

// ---------------------------------------------------------------------------
// Property 8: is_holiday and holiday_name agree
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn query_functions_agree(date in arb_date()) {
        prop_assert_eq!(is_holiday(date).unwrap(), holiday_name(date).unwrap().is_some());
    }
}
