//! Output formatting and persistence for records and feed summaries.
//!
//! Supports pretty-printing, JSON serialization, CSV append and a full CSV
//! export of the record set, optionally gzip-compressed.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fmt::Debug;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::records::QuakeRecord;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl Debug) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Appends one serialized row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &impl Serialize) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening {path}"))?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

/// Writes the whole record set to `path` as CSV, replacing any existing file.
pub fn write_records_csv(path: &str, records: &[QuakeRecord], gzip: bool) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let body = writer.into_inner()?;

    let body = if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&body)?;
        encoder.finish()?
    } else {
        body
    };

    let mut file = File::create(path).with_context(|| format!("creating {path}"))?;
    file.write_all(&body)?;

    info!(path, rows = records.len(), gzip, "Records exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FeedSummary;
    use chrono::{TimeZone, Utc};
    use flate2::read::GzDecoder;
    use std::env;
    use std::fs;
    use std::io::Read;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_records() -> Vec<QuakeRecord> {
        vec![
            QuakeRecord {
                latitude: Some(-5.2),
                longitude: Some(10.5),
                magnitude: Some(4.3),
                time: Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap()),
                depth: Some(12.0),
            },
            QuakeRecord::default(),
        ]
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&FeedSummary::default());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&FeedSummary::default()).unwrap();
    }

    #[test]
    fn test_append_record_writes_header_once() {
        let path = temp_path("quakeplot_test_header.csv");
        let _ = fs::remove_file(&path);

        let summary = FeedSummary::default();
        append_record(&path, &summary).unwrap();
        append_record(&path, &summary).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("timestamp")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_records_csv() {
        let path = temp_path("quakeplot_test_records.csv");
        let _ = fs::remove_file(&path);

        write_records_csv(&path, &sample_records(), false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "latitude,longitude,magnitude,time,depth");
        assert_eq!(lines[1], "-5.2,10.5,4.3,2023-11-14T22:13:20Z,12.0");
        assert_eq!(lines[2], ",,,,");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_records_csv_gzip() {
        let path = temp_path("quakeplot_test_records.csv.gz");
        let _ = fs::remove_file(&path);

        write_records_csv(&path, &sample_records(), true).unwrap();

        let mut decoded = String::new();
        GzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert!(decoded.starts_with("latitude,longitude,magnitude,time,depth\n"));
        assert_eq!(decoded.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }
}
