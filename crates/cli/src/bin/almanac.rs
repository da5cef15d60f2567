use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use lunisolar::almanac::{self, DailyAlmanac};
use lunisolar::calendar::fixed_offset;
use lunisolar::config::{SiteConfig, find_site, load_sites};
use lunisolar::events::RiseEvent;
use lunisolar::export::almanac::writer_for_path;
use lunisolar::export::json::write_document;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Daily sunrise, twilight and moonrise tables for a catalog site"
)]
struct Cli {
    /// Site name from the catalog (case-insensitive)
    #[arg(long)]
    site: String,

    /// Site catalog: a directory of TOML files, one TOML file, or a YAML list
    #[arg(long, default_value = "configs/sites")]
    sites: PathBuf,

    /// First local date (YYYY-MM-DD); defaults to today at the site
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Number of consecutive days
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=366))]
    days: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output path (`-` or omitted for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log solver and loader details
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let sites = load_sites(&cli.sites)?;
    let site = find_site(&sites, &cli.site)?;
    let start = match cli.start {
        Some(date) => date,
        None => Utc::now()
            .with_timezone(&fixed_offset(site.utc_offset_hours)?)
            .date_naive(),
    };
    info!("{} days for {} from {start}", cli.days, site.name);

    let location = almanac::site_location(site);
    let days = almanac::almanac_range(&location, start, cli.days, site.utc_offset_hours)?;

    let output = cli.output.unwrap_or_else(|| PathBuf::from("-"));
    match cli.format {
        OutputFormat::Table => {
            let mut writer = writer_for_path(&output)?;
            write_table(&mut *writer, site, &days)?;
            writer.flush()?;
        }
        OutputFormat::Csv => {
            let mut writer = writer_for_path(&output)?;
            almanac::write_csv(&mut *writer, &days)?;
        }
        OutputFormat::Json => {
            write_document(&output, &almanac::document(site, &days)?)?;
        }
    }

    if output != Path::new("-") {
        eprintln!("Wrote {} day(s) to {}", days.len(), output.display());
    }
    Ok(())
}

fn write_table(
    writer: &mut dyn Write,
    site: &SiteConfig,
    days: &[DailyAlmanac],
) -> anyhow::Result<()> {
    writeln!(
        writer,
        "=== {} ({:.4}, {:.4}), UTC{:+} ===",
        site.name, site.latitude_deg, site.longitude_deg, site.utc_offset_hours
    )?;
    writeln!(
        writer,
        "{:<10}  {:<13}  {:<13}  {:<13}  {:<13}  {:<13}  {:>5}",
        "date", "sun", "civil", "nautical", "astronomical", "moon", "illum"
    )?;
    for day in days {
        let row = day.row()?;
        writeln!(
            writer,
            "{:<10}  {:<13}  {:<13}  {:<13}  {:<13}  {:<13}  {:>4.0}%",
            row.date,
            span(&row.sunrise, &row.sunset, &day.sunrise),
            span(&row.civil_dawn, &row.civil_dusk, &day.civil),
            span(&row.nautical_dawn, &row.nautical_dusk, &day.nautical),
            span(&row.astronomical_dawn, &row.astronomical_dusk, &day.astronomical),
            span(&row.moonrise, &row.moonset, &day.moon),
            row.moon_fraction * 100.0,
        )?;
    }
    Ok(())
}

/// `rise-set`, or the whole-day state when neither happens.
fn span(rise: &Option<String>, set: &Option<String>, event: &RiseEvent) -> String {
    match (rise, set) {
        (None, None) => event.label().replace('_', " "),
        _ => format!(
            "{}-{}",
            rise.as_deref().unwrap_or("--:--"),
            set.as_deref().unwrap_or("--:--")
        ),
    }
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
