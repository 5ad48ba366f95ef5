//! Export bucket contents to files

mod csv_export;

pub use csv_export::{export_to_csv, write_csv};
