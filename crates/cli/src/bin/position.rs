use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use clap::Parser;
use log::{LevelFilter, debug};
use lunisolar::bodies::{Body, moon_illumination_at};
use lunisolar::calendar::j2000_from_datetime;
use lunisolar::config::{find_site, load_sites};
use lunisolar::events::{GeographicLocation, horizontal_position};
use lunisolar::time::century_from_j2000;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Right ascension, declination and horizon position of the Sun or Moon"
)]
struct Cli {
    /// Body to locate (sun or moon)
    #[arg(long)]
    body: Body,

    /// Instant in RFC 3339 form; defaults to now
    #[arg(long, value_parser = parse_instant)]
    at: Option<DateTime<Utc>>,

    /// Observer site from the catalog
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    site: Option<String>,

    /// Site catalog used with --site
    #[arg(long, default_value = "configs/sites")]
    sites: PathBuf,

    /// Observer latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,

    /// Observer longitude in degrees (east positive)
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,

    /// Log loader details
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let at = cli.at.unwrap_or_else(Utc::now);
    let days = j2000_from_datetime(&at);
    let century = century_from_j2000(days);
    debug!("{} at J2000 day {days:.6}", cli.body);

    let location = observer(&cli)?;
    let equatorial = cli.body.equatorial_position(century);

    println!("=== {} ===", cli.body);
    println!(
        "Instant         : {} (J2000 day {:.5})",
        at.to_rfc3339_opts(SecondsFormat::Secs, true),
        days
    );
    println!(
        "Right ascension : {:.4} deg ({})",
        equatorial.right_ascension_deg(),
        hours_minutes_seconds(equatorial.right_ascension_deg() / 15.0)
    );
    println!("Declination     : {:.4} deg", equatorial.declination_deg());
    println!("Distance        : {:.0} km (nominal)", equatorial.radius);

    if let Some((label, location)) = location {
        let horizontal = horizontal_position(cli.body, days, &location);
        println!("Observer        : {label}");
        println!("Azimuth         : {:.3} deg", horizontal.azimuth_deg());
        println!("Altitude        : {:.3} deg", horizontal.altitude_deg());
    }

    if cli.body == Body::Moon {
        let illumination = moon_illumination_at(days);
        println!(
            "Illumination    : {:.1}% (phase angle {:.2} deg)",
            illumination.fraction * 100.0,
            illumination.phase_angle_deg()
        );
    }

    Ok(())
}

fn observer(cli: &Cli) -> anyhow::Result<Option<(String, GeographicLocation)>> {
    if let Some(name) = &cli.site {
        let sites = load_sites(&cli.sites)?;
        let site = find_site(&sites, name)?;
        let label = format!("{} ({:.4}, {:.4})", site.name, site.latitude_deg, site.longitude_deg);
        return Ok(Some((
            label,
            GeographicLocation::new(site.longitude_deg, site.latitude_deg),
        )));
    }
    match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                anyhow::bail!("observer ({lat}, {lon}) is outside the valid coordinate range");
            }
            Ok(Some((format!("({lat:.4}, {lon:.4})"), GeographicLocation::new(lon, lat))))
        }
        _ => Ok(None),
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("expected RFC 3339 time such as 2018-06-01T12:00:00Z: {err}"))
}

fn hours_minutes_seconds(hours: f64) -> String {
    let total_seconds = ((hours * 3_600.0).round() as i64).rem_euclid(86_400);
    format!(
        "{:02}h {:02}m {:02}s",
        total_seconds / 3_600,
        (total_seconds / 60) % 60,
        total_seconds % 60
    )
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::hours_minutes_seconds;

    #[test]
    fn right_ascension_wraps_at_a_full_day() {
        assert_eq!(hours_minutes_seconds(11.308_62), "11h 18m 31s");
        assert_eq!(hours_minutes_seconds(24.0 - 0.1 / 3_600.0), "00h 00m 00s");
        assert_eq!(hours_minutes_seconds(0.0), "00h 00m 00s");
    }
}
