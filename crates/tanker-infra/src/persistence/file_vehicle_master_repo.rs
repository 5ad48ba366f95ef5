//! File-based implementation of VehicleRepository

use std::collections::BTreeSet;
use std::path::PathBuf;

use tanker_domain::repository::VehicleRepository;
use tanker_types::{Error, Vehicle};

use crate::vehicle_master_loader::VehicleMasterLoader;

/// Vehicle master repository (TOML)
pub struct FileVehicleMasterRepository {
    toml_path: PathBuf,
}

impl FileVehicleMasterRepository {
    pub fn new(toml_path: PathBuf) -> Self {
        Self { toml_path }
    }
}

impl VehicleRepository for FileVehicleMasterRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        let loader = VehicleMasterLoader::load_from_file(&self.toml_path)?;
        Ok(loader.all_vehicles().cloned().collect())
    }

    fn find_by_numbers(&self, vehicle_nos: &BTreeSet<String>) -> Result<Vec<Vehicle>, Error> {
        let loader = VehicleMasterLoader::load_from_file(&self.toml_path)?;
        Ok(vehicle_nos
            .iter()
            .filter_map(|no| loader.get_vehicle(no).cloned())
            .collect())
    }
}
