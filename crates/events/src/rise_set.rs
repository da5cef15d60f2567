//! Hour-by-hour search for horizon crossings over one local day.

use log::{debug, trace};
use lunisolar_bodies::Body;
use lunisolar_core::Spherical;
use lunisolar_core::constants::HOURS_PER_DAY;

use crate::altitude::sin_altitude_of;
use crate::location::GeographicLocation;
use crate::quadratic::{QuadraticFit, Roots};
use crate::threshold::RiseThreshold;

/// Outcome of a one-day search. Times are days since J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseEvent {
    /// Below the threshold for the whole day.
    NeverRises,
    /// Above the threshold for the whole day.
    NeverSets,
    Rises(f64),
    Sets(f64),
    RisesAndSets { rise: f64, set: f64 },
}

impl RiseEvent {
    fn classify(rise: Option<f64>, set: Option<f64>, above: bool) -> Self {
        match (rise, set) {
            (Some(rise), Some(set)) => RiseEvent::RisesAndSets { rise, set },
            (Some(rise), None) => RiseEvent::Rises(rise),
            (None, Some(set)) => RiseEvent::Sets(set),
            (None, None) if above => RiseEvent::NeverSets,
            (None, None) => RiseEvent::NeverRises,
        }
    }

    pub fn rise(&self) -> Option<f64> {
        match *self {
            RiseEvent::Rises(rise) | RiseEvent::RisesAndSets { rise, .. } => Some(rise),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<f64> {
        match *self {
            RiseEvent::Sets(set) | RiseEvent::RisesAndSets { set, .. } => Some(set),
            _ => None,
        }
    }

    /// Snake-case name of the variant, used in exported tables.
    pub fn label(&self) -> &'static str {
        match self {
            RiseEvent::NeverRises => "never_rises",
            RiseEvent::NeverSets => "never_sets",
            RiseEvent::Rises(_) => "rises",
            RiseEvent::Sets(_) => "sets",
            RiseEvent::RisesAndSets { .. } => "rises_and_sets",
        }
    }
}

/// Find the first rise and first set after `start`.
///
/// `position` maps a J2000 day count to right ascension / declination.
/// The scan covers 25 hours from `start` in 2-hour windows and stops early
/// once both events are known.
pub fn rise_set_events<F>(
    position: F,
    start: f64,
    sin_threshold: f64,
    location: &GeographicLocation,
) -> RiseEvent
where
    F: Fn(f64) -> Spherical,
{
    let offset = |hour: f64| {
        let days = start + hour / HOURS_PER_DAY;
        sin_altitude_of(days, &position(days), location) - sin_threshold
    };

    let mut rise = None;
    let mut set = None;
    let mut y_minus = offset(0.0);
    let above = y_minus > 0.0;
    let mut hour = 1.0;

    loop {
        let y_zero = offset(hour);
        let y_plus = offset(hour + 1.0);
        let fit = QuadraticFit::through(y_minus, y_zero, y_plus);
        let roots = fit.roots();
        trace!("window {hour:>4}: y = ({y_minus:.6}, {y_zero:.6}, {y_plus:.6}) roots {roots:?}");

        match roots {
            Roots::None => {}
            Roots::One(x) => {
                if y_minus < 0.0 {
                    rise.get_or_insert(hour + x);
                } else {
                    set.get_or_insert(hour + x);
                }
                debug!("window {hour}: single crossing at hour {:.4}", hour + x);
            }
            Roots::Two(first, second) => {
                let ye = fit.extremum().map_or(0.0, |(_, ye)| ye);
                let (r, s) = if ye < 0.0 { (second, first) } else { (first, second) };
                rise.get_or_insert(hour + r);
                set.get_or_insert(hour + s);
                debug!(
                    "window {hour}: two crossings at hours {:.4} and {:.4}",
                    hour + first,
                    hour + second
                );
            }
        }

        y_minus = y_plus;
        hour += 2.0;
        if hour >= 25.0 || (rise.is_some() && set.is_some()) {
            break;
        }
    }

    let to_days = |h: f64| start + h / HOURS_PER_DAY;
    let event = RiseEvent::classify(rise.map(to_days), set.map(to_days), above);
    debug!("search from {start:.5}: rise hour {rise:?}, set hour {set:?} -> {event:?}");
    event
}

/// [`rise_set_events`] for one of the modelled bodies.
pub fn body_events(
    body: Body,
    start: f64,
    threshold: RiseThreshold,
    location: &GeographicLocation,
) -> RiseEvent {
    debug!("{body} {threshold} at ({}, {})", location.latitude_deg, location.longitude_deg);
    rise_set_events(
        |days| body.equatorial_direction_at(days),
        start,
        threshold.sin_altitude(),
        location,
    )
}
