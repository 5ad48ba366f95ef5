//! CSV export functionality

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use tanker_types::{Error, Result};

use crate::app::{BucketRow, Capacity};

const HEADERS: [&str; 10] = [
    "Vehicle No",
    "Start From",
    "End To",
    "Start Date",
    "Reporting Date",
    "End Date",
    "Last Status",
    "Supervisor",
    "Loading Supervisor",
    "Capacity",
];

/// Export bucket rows to a CSV file
pub fn export_to_csv(rows: &[BucketRow], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv(rows, file)
}

/// Write bucket rows as CSV to any writer
pub fn write_csv<W: Write>(rows: &[BucketRow], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS)
        .map_err(|e| Error::Export(e.to_string()))?;

    for row in rows {
        let trip = &row.trip;
        let capacity = match row.capacity {
            Some(Capacity::Known(tons)) => tons.to_string(),
            Some(Capacity::NotAvailable) => "N/A".to_string(),
            None => String::new(),
        };
        let start_date = timestamp(trip.start_date);
        let reporting_date = timestamp(trip.reporting_date);
        let end_date = timestamp(trip.end_date.or_else(|| trip.unload_date()));
        csv.write_record([
            trip.vehicle_no.as_str(),
            trip.start_from.as_deref().unwrap_or(""),
            trip.end_to.as_deref().unwrap_or(""),
            start_date.as_str(),
            reporting_date.as_str(),
            end_date.as_str(),
            row.last_status.as_str(),
            trip.supervisor.as_deref().unwrap_or(""),
            trip.loading_supervisor().unwrap_or(""),
            capacity.as_str(),
        ])
        .map_err(|e| Error::Export(e.to_string()))?;
    }

    csv.flush()?;
    Ok(())
}

fn timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map(|t| t.to_rfc3339()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanker_types::Trip;

    fn row(vehicle: &str, capacity: Option<Capacity>) -> BucketRow {
        let mut row = BucketRow::from(Trip {
            vehicle_no: vehicle.to_string(),
            end_to: Some("Kandla, Port".to_string()),
            ..Default::default()
        });
        row.capacity = capacity;
        row
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let rows = vec![
            row("GJ01", Some(Capacity::Known(24.0))),
            row("GJ02", Some(Capacity::NotAvailable)),
        ];
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Vehicle No,Start From,End To"));
        assert!(lines[1].starts_with("GJ01,,\"Kandla, Port\""));
        assert!(lines[1].ends_with(",24"));
        assert!(lines[2].ends_with(",N/A"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bucket.csv");
        export_to_csv(&[row("GJ01", None)], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("GJ01"));
    }
}
