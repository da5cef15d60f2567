//! Observer site catalogs for the lunisolar almanac tools.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

/// Named observing site parsed from a catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: String,
    pub latitude_deg: f64,
    /// East-positive.
    pub longitude_deg: f64,
    /// Fixed civil offset from UTC used to find local midnight.
    #[serde(default)]
    pub utc_offset_hours: f64,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read site catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("site '{name}' is invalid: {reason}")]
    InvalidSite { name: String, reason: String },
    #[error("no site named '{0}' in the catalog")]
    SiteNotFound(String),
}

impl SiteConfig {
    /// Check coordinate and offset ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidSite {
            name: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".into()));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(invalid(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(invalid(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        if !(-14.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(invalid(format!(
                "UTC offset {} h outside [-14, 14]",
                self.utc_offset_hours
            )));
        }
        Ok(())
    }
}

/// Load and validate site configurations.
///
/// `path` may be a directory of `*.toml` files, a single `.toml` file, or a
/// YAML file holding a list of sites.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>, ConfigError> {
    let sites: Vec<SiteConfig> = load_records(path.as_ref())?;
    for site in &sites {
        site.validate()?;
    }
    debug!("loaded {} site(s) from {}", sites.len(), path.as_ref().display());
    Ok(sites)
}

/// Case-insensitive lookup by site name.
pub fn find_site<'a>(sites: &'a [SiteConfig], name: &str) -> Result<&'a SiteConfig, ConfigError> {
    sites
        .iter()
        .find(|site| site.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ConfigError::SiteNotFound(name.to_string()))
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if is_toml(&path) {
            entries.push(path);
        } else {
            debug!("skipping non-site file {}", path.display());
        }
    }
    entries.sort();
    if entries.is_empty() {
        warn!("no *.toml site files in {}", dir.display());
    }

    let mut records = Vec::with_capacity(entries.len());
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
