//! Daily rise, set and twilight tables for an observer.

use std::io::Write;

use chrono::{Days, NaiveDate};
use log::debug;
use thiserror::Error;

use lunisolar_bodies::{Body, Illumination, moon_illumination_at};
use lunisolar_config::SiteConfig;
use lunisolar_events::{GeographicLocation, RiseEvent, RiseThreshold, body_events};
use lunisolar_export::almanac::{Record, write_header};
use lunisolar_export::json::{AlmanacDocument, DayEntry, EventTimes, SiteSummary};

use crate::calendar::{CalendarError, local_datetime, local_midnight};

/// Half a minute in days; event times are rounded to the nearest minute.
const HALF_MINUTE_DAYS: f64 = 30.0 / 86_400.0;

#[derive(Debug, Error)]
pub enum AlmanacError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error("{days} day(s) from {start} run past the supported calendar")]
    DateOverflow { start: NaiveDate, days: u32 },
    #[error("failed to write almanac: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the almanac reports for one local date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAlmanac {
    pub date: NaiveDate,
    pub utc_offset_hours: f64,
    /// Local midnight as a J2000 day count; the search starts here.
    pub start: f64,
    pub sunrise: RiseEvent,
    pub civil: RiseEvent,
    pub nautical: RiseEvent,
    pub astronomical: RiseEvent,
    pub moon: RiseEvent,
    /// Evaluated at local noon.
    pub moon_illumination: Illumination,
}

/// A day's events formatted as local `HH:MM`. A `+1` suffix marks an event
/// that rounds past the following midnight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlmanacRow {
    pub date: String,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub civil_dawn: Option<String>,
    pub civil_dusk: Option<String>,
    pub nautical_dawn: Option<String>,
    pub nautical_dusk: Option<String>,
    pub astronomical_dawn: Option<String>,
    pub astronomical_dusk: Option<String>,
    pub moonrise: Option<String>,
    pub moonset: Option<String>,
    pub moon_fraction: f64,
    pub moon_phase_deg: f64,
}

pub fn site_location(site: &SiteConfig) -> GeographicLocation {
    GeographicLocation::new(site.longitude_deg, site.latitude_deg)
}

/// Solve every threshold for one local date.
pub fn daily_almanac(
    location: &GeographicLocation,
    date: NaiveDate,
    utc_offset_hours: f64,
) -> Result<DailyAlmanac, AlmanacError> {
    let start = local_midnight(date, utc_offset_hours)?;
    let sun = |threshold| body_events(Body::Sun, start, threshold, location);

    let almanac = DailyAlmanac {
        date,
        utc_offset_hours,
        start,
        sunrise: sun(RiseThreshold::Sunrise),
        civil: sun(RiseThreshold::CivilTwilight),
        nautical: sun(RiseThreshold::NauticalTwilight),
        astronomical: sun(RiseThreshold::AstronomicalTwilight),
        moon: body_events(Body::Moon, start, RiseThreshold::Moonrise, location),
        moon_illumination: moon_illumination_at(start + 0.5),
    };
    debug!(
        "{date}: sun {}, civil {}, moon {}, illuminated {:.3}",
        almanac.sunrise.label(),
        almanac.civil.label(),
        almanac.moon.label(),
        almanac.moon_illumination.fraction
    );
    Ok(almanac)
}

/// Consecutive daily almanacs starting at `start`.
pub fn almanac_range(
    location: &GeographicLocation,
    start: NaiveDate,
    days: u32,
    utc_offset_hours: f64,
) -> Result<Vec<DailyAlmanac>, AlmanacError> {
    (0..days)
        .map(|index| {
            let date = start
                .checked_add_days(Days::new(u64::from(index)))
                .ok_or(AlmanacError::DateOverflow { start, days })?;
            daily_almanac(location, date, utc_offset_hours)
        })
        .collect()
}

impl DailyAlmanac {
    pub fn row(&self) -> Result<AlmanacRow, CalendarError> {
        let (sunrise, sunset) = self.event_times(&self.sunrise)?;
        let (civil_dawn, civil_dusk) = self.event_times(&self.civil)?;
        let (nautical_dawn, nautical_dusk) = self.event_times(&self.nautical)?;
        let (astronomical_dawn, astronomical_dusk) = self.event_times(&self.astronomical)?;
        let (moonrise, moonset) = self.event_times(&self.moon)?;
        Ok(AlmanacRow {
            date: self.date.format("%Y-%m-%d").to_string(),
            sunrise,
            sunset,
            civil_dawn,
            civil_dusk,
            nautical_dawn,
            nautical_dusk,
            astronomical_dawn,
            astronomical_dusk,
            moonrise,
            moonset,
            moon_fraction: self.moon_illumination.fraction,
            moon_phase_deg: self.moon_illumination.phase_angle_deg(),
        })
    }

    fn event_times(
        &self,
        event: &RiseEvent,
    ) -> Result<(Option<String>, Option<String>), CalendarError> {
        let rise = event.rise().map(|days| self.local_time(days)).transpose()?;
        let set = event.set().map(|days| self.local_time(days)).transpose()?;
        Ok((rise, set))
    }

    fn local_time(&self, days: f64) -> Result<String, CalendarError> {
        let local = local_datetime(days + HALF_MINUTE_DAYS, self.utc_offset_hours)?;
        let mut text = local.format("%H:%M").to_string();
        if local.date_naive() > self.date {
            text.push_str("+1");
        }
        Ok(text)
    }
}

/// Write the almanac as CSV with the standard header.
pub fn write_csv(writer: &mut dyn Write, days: &[DailyAlmanac]) -> Result<(), AlmanacError> {
    write_header(writer)?;
    for day in days {
        let row = day.row()?;
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        let columns = [
            field(&row.sunrise),
            field(&row.sunset),
            field(&row.civil_dawn),
            field(&row.civil_dusk),
            field(&row.nautical_dawn),
            field(&row.nautical_dusk),
            field(&row.astronomical_dawn),
            field(&row.astronomical_dusk),
            field(&row.moonrise),
            field(&row.moonset),
        ];
        Record {
            date: &row.date,
            sunrise: &columns[0],
            sunset: &columns[1],
            civil_dawn: &columns[2],
            civil_dusk: &columns[3],
            nautical_dawn: &columns[4],
            nautical_dusk: &columns[5],
            astronomical_dawn: &columns[6],
            astronomical_dusk: &columns[7],
            moonrise: &columns[8],
            moonset: &columns[9],
            moon_fraction: row.moon_fraction,
            moon_phase_deg: row.moon_phase_deg,
        }
        .write_to(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Build the JSON document for a site.
pub fn document(site: &SiteConfig, days: &[DailyAlmanac]) -> Result<AlmanacDocument, AlmanacError> {
    let entries = days
        .iter()
        .map(|day| {
            let row = day.row()?;
            let times = |event: &RiseEvent, rise: &Option<String>, set: &Option<String>| EventTimes {
                state: event.label().to_string(),
                rise: rise.clone(),
                set: set.clone(),
            };
            Ok(DayEntry {
                sun: times(&day.sunrise, &row.sunrise, &row.sunset),
                civil_twilight: times(&day.civil, &row.civil_dawn, &row.civil_dusk),
                nautical_twilight: times(&day.nautical, &row.nautical_dawn, &row.nautical_dusk),
                astronomical_twilight: times(
                    &day.astronomical,
                    &row.astronomical_dawn,
                    &row.astronomical_dusk,
                ),
                moon: times(&day.moon, &row.moonrise, &row.moonset),
                moon_fraction: row.moon_fraction,
                moon_phase_deg: row.moon_phase_deg,
                date: row.date,
            })
        })
        .collect::<Result<Vec<_>, CalendarError>>()?;

    Ok(AlmanacDocument {
        site: SiteSummary {
            name: site.name.clone(),
            latitude_deg: site.latitude_deg,
            longitude_deg: site.longitude_deg,
            utc_offset_hours: site.utc_offset_hours,
        },
        days: entries,
    })
}
