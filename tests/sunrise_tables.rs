//! Seattle, 2018, first of each month, against published tables.

use chrono::NaiveDate;

use lunisolar::bodies::Body;
use lunisolar::calendar::local_midnight;
use lunisolar::events::{GeographicLocation, RiseEvent, RiseThreshold, body_events};

const SEATTLE: GeographicLocation = GeographicLocation::new(-122.3321, 47.6062);
const PDT: f64 = -7.0;
const TOLERANCE_MINUTES: f64 = 1.5;

/// Months whose published times are in PST rather than PDT.
const STANDARD_TIME_MONTHS: [u32; 4] = [1, 2, 3, 12];

type Table = [(&'static str, &'static str); 12];

const SUN: Table = [
    ("07:57", "16:28"), ("07:35", "17:10"), ("06:49", "17:54"), ("06:47", "19:39"),
    ("05:52", "20:21"), ("05:15", "20:59"), ("05:15", "21:10"), ("05:47", "20:43"),
    ("06:27", "19:49"), ("07:08", "18:48"), ("07:53", "17:51"), ("07:37", "16:19"),
];
const CIVIL: Table = [
    ("07:22", "17:04"), ("07:02", "17:44"), ("06:18", "18:25"), ("06:16", "20:10"),
    ("05:17", "20:56"), ("04:36", "21:39"), ("04:35", "21:51"), ("05:11", "21:19"),
    ("05:56", "20:21"), ("06:37", "19:19"), ("07:21", "18:23"), ("07:01", "16:55"),
];
const NAUTICAL: Table = [
    ("06:42", "17:43"), ("06:25", "18:20"), ("05:43", "19:01"), ("05:39", "20:48"),
    ("04:34", "21:40"), ("03:43", "22:32"), ("03:40", "22:46"), ("04:24", "22:05"),
    ("05:17", "20:59"), ("06:02", "19:54"), ("06:44", "19:00"), ("06:22", "17:33"),
];
const ASTRONOMICAL: Table = [
    ("06:05", "18:20"), ("05:49", "18:56"), ("05:07", "19:37"), ("05:00", "21:27"),
    ("03:44", "22:29"), ("02:27", "23:48"), ("02:13", "00:12"), ("03:28", "23:00"),
    ("04:35", "21:41"), ("05:25", "20:30"), ("06:09", "19:36"), ("05:46", "18:10"),
];

fn minutes(text: &str) -> f64 {
    let (h, m) = text.split_once(':').expect("HH:MM");
    h.parse::<f64>().unwrap() * 60.0 + m.parse::<f64>().unwrap()
}


fn check_table(threshold: RiseThreshold, table: &Table) {
    for (index, (rise, set)) in table.iter().enumerate() {
        let month = index as u32 + 1;
        let date = NaiveDate::from_ymd_opt(2018, month, 1).unwrap();
        let start = local_midnight(date, PDT).expect("local midnight");
        let event = body_events(Body::Sun, start, threshold, &SEATTLE);
        let RiseEvent::RisesAndSets { rise: r, set: s } = event else {
            panic!("{threshold} {date}: expected rise and set, got {event:?}");
        };

        // Published standard-time rows are an hour behind the PDT clock.
        let shift = if STANDARD_TIME_MONTHS.contains(&month) { 60.0 } else { 0.0 };
        let computed_rise = (r - start) * 1_440.0;
        let computed_set = (s - start) * 1_440.0;
        let rise_error = (computed_rise - (minutes(rise) + shift)).abs();
        let set_error = (computed_set - (minutes(set) + shift)).abs();
        assert!(rise_error <= TOLERANCE_MINUTES, "{threshold} {date} rise off by {rise_error:.2} min");
        assert!(set_error <= TOLERANCE_MINUTES, "{threshold} {date} set off by {set_error:.2} min");
    }
}

#[test]
fn sunrise_and_sunset() {
    check_table(RiseThreshold::Sunrise, &SUN);
}

#[test]
fn civil_twilight() {
    check_table(RiseThreshold::CivilTwilight, &CIVIL);
}

#[test]
fn nautical_twilight() {
    check_table(RiseThreshold::NauticalTwilight, &NAUTICAL);
}

#[test]
fn astronomical_twilight() {
    check_table(RiseThreshold::AstronomicalTwilight, &ASTRONOMICAL);
}

#[test]
fn july_dusk_is_the_previous_evening() {
    // The first set found on July 1 is the tail of June 30's twilight,
    // 12.8 minutes after local midnight; the evening dusk is not reached
    // before the scan ends.
    let date = NaiveDate::from_ymd_opt(2018, 7, 1).unwrap();
    let start = local_midnight(date, PDT).unwrap();
    let event = body_events(Body::Sun, start, RiseThreshold::AstronomicalTwilight, &SEATTLE);
    let RiseEvent::RisesAndSets { rise, set } = event else {
        panic!("expected dawn and dusk, got {event:?}");
    };
    let set_minutes = (set - start) * 1_440.0;
    assert!(set < rise, "dusk {set} should precede dawn {rise}");
    assert!((set_minutes - 12.8).abs() < 1.0, "dusk {set_minutes:.2} min after midnight");
}

#[test]
fn june_first_matches_to_the_minute() {
    let date = NaiveDate::from_ymd_opt(2018, 6, 1).unwrap();
    let start = local_midnight(date, PDT).unwrap();
    let event = body_events(Body::Sun, start, RiseThreshold::Sunrise, &SEATTLE);
    let rise = event.rise().expect("sunrise");
    let set = event.set().expect("sunset");
    assert!(((rise - start) * 24.0 - (5.0 + 15.8 / 60.0)).abs() < 0.01);
    assert!(((set - start) * 24.0 - (20.0 + 59.36 / 60.0)).abs() < 0.01);
}

#[test]
fn moon_rises_late_and_sets_in_the_morning() {
    let date = NaiveDate::from_ymd_opt(2018, 6, 1).unwrap();
    let start = local_midnight(date, PDT).unwrap();
    let event = body_events(Body::Moon, start, RiseThreshold::Moonrise, &SEATTLE);
    let RiseEvent::RisesAndSets { rise, set } = event else {
        panic!("expected moonrise and moonset, got {event:?}");
    };
    assert!(((rise - start) * 24.0 - 23.811).abs() < 0.02, "moonrise {rise}");
    assert!(((set - start) * 24.0 - 7.703).abs() < 0.02, "moonset {set}");
}
