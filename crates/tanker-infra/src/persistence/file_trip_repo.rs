//! File-based implementation of TripRepository

use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

use tanker_domain::repository::TripRepository;
use tanker_types::{Error, Trip};

use super::json_file::read_json_array;

/// Trip records stored as a JSON array
pub struct FileTripRepository {
    path: PathBuf,
}

impl FileTripRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TripRepository for FileTripRepository {
    fn find_by_vehicles(&self, vehicle_nos: &BTreeSet<String>) -> Result<Vec<Trip>, Error> {
        let trips: Vec<Trip> = read_json_array(&self.path)?;
        let total = trips.len();
        let selected: Vec<Trip> = trips
            .into_iter()
            .filter(|t| vehicle_nos.contains(&t.vehicle_no))
            .map(|mut t| {
                t.normalize_unload();
                t
            })
            .collect();
        debug!(
            path = %self.path.display(),
            total,
            selected = selected.len(),
            "Loaded trip records"
        );
        Ok(selected)
    }
}
