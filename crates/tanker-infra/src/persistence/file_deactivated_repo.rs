//! File-based implementation of DeactivatedVehicleRepository

use std::path::PathBuf;

use tanker_domain::repository::DeactivatedVehicleRepository;
use tanker_types::{DeactivatedVehicle, Error};

use super::json_file::read_json_array;

pub struct FileDeactivatedVehicleRepository {
    path: PathBuf,
}

impl FileDeactivatedVehicleRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DeactivatedVehicleRepository for FileDeactivatedVehicleRepository {
    fn find_by_user(&self, user_id: &str) -> Result<Vec<DeactivatedVehicle>, Error> {
        let entries: Vec<DeactivatedVehicle> = read_json_array(&self.path)?;
        Ok(entries
            .into_iter()
            .filter(|d| d.deactivated_by == user_id)
            .collect())
    }
}
