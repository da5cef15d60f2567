//! Export helpers for almanac tables.

pub mod almanac {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "date,sunrise,sunset,civil_dawn,civil_dusk,nautical_dawn,nautical_dusk,astronomical_dawn,astronomical_dusk,moonrise,moonset,moon_fraction,moon_phase_deg";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard almanac CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One CSV row per local date. Event columns are empty when the event
    /// does not happen that day.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub date: &'a str,
        pub sunrise: &'a str,
        pub sunset: &'a str,
        pub civil_dawn: &'a str,
        pub civil_dusk: &'a str,
        pub nautical_dawn: &'a str,
        pub nautical_dusk: &'a str,
        pub astronomical_dawn: &'a str,
        pub astronomical_dusk: &'a str,
        pub moonrise: &'a str,
        pub moonset: &'a str,
        pub moon_fraction: f64,
        pub moon_phase_deg: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{},{},{},{},{:.4},{:.2}",
                self.date,
                self.sunrise,
                self.sunset,
                self.civil_dawn,
                self.civil_dusk,
                self.nautical_dawn,
                self.nautical_dusk,
                self.astronomical_dawn,
                self.astronomical_dusk,
                self.moonrise,
                self.moonset,
                self.moon_fraction,
                self.moon_phase_deg,
            )
        }
    }
}

pub mod json {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    use crate::almanac::writer_for_path;

    /// Observer block at the top of an almanac document.
    #[derive(Debug, Clone, Serialize)]
    pub struct SiteSummary {
        pub name: String,
        pub latitude_deg: f64,
        pub longitude_deg: f64,
        pub utc_offset_hours: f64,
    }

    /// Rise/set pair for one threshold. `state` names the day's outcome
    /// (`rises_and_sets`, `rises`, `sets`, `never_rises`, `never_sets`).
    #[derive(Debug, Clone, Serialize)]
    pub struct EventTimes {
        pub state: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rise: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub set: Option<String>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct DayEntry {
        pub date: String,
        pub sun: EventTimes,
        pub civil_twilight: EventTimes,
        pub nautical_twilight: EventTimes,
        pub astronomical_twilight: EventTimes,
        pub moon: EventTimes,
        pub moon_fraction: f64,
        pub moon_phase_deg: f64,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct AlmanacDocument {
        pub site: SiteSummary,
        pub days: Vec<DayEntry>,
    }

    /// Write the document as pretty-printed JSON; `-` writes to stdout.
    pub fn write_document(path: &Path, document: &AlmanacDocument) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        to_writer_pretty(&mut writer, document)?;
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::almanac::{Record, write_header};

    #[test]
    fn record_matches_header_columns() {
        let mut buffer = Vec::new();
        write_header(&mut buffer).unwrap();
        Record {
            date: "2018-06-01",
            sunrise: "05:15",
            sunset: "20:59",
            civil_dawn: "04:36",
            civil_dusk: "21:39",
            nautical_dawn: "03:43",
            nautical_dusk: "22:32",
            astronomical_dawn: "02:27",
            astronomical_dusk: "",
            moonrise: "23:48",
            moonset: "07:42",
            moon_fraction: 0.912_34,
            moon_phase_deg: 34.5678,
        }
        .write_to(&mut buffer)
        .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(',').count(), lines[1].split(',').count());
        assert_eq!(
            lines[1],
            "2018-06-01,05:15,20:59,04:36,21:39,03:43,22:32,02:27,,23:48,07:42,0.9123,34.57"
        );
    }
}
