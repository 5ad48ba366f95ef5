//! Persistence implementations
//!
//! File-based implementations of the repository traits. Every lookup re-reads
//! its file, so each request sees the store as it is at that moment.

mod file_deactivated_repo;
mod file_trip_repo;
mod file_user_repo;
mod file_vehicle_master_repo;
mod json_file;

pub use file_deactivated_repo::FileDeactivatedVehicleRepository;
pub use file_trip_repo::FileTripRepository;
pub use file_user_repo::FileUserRepository;
pub use file_vehicle_master_repo::FileVehicleMasterRepository;

use std::fs;
use std::path::{Path, PathBuf};

use tanker_types::Result;

pub const TRIPS_FILE: &str = "trips.json";
pub const USERS_FILE: &str = "users.json";
pub const DEACTIVATED_FILE: &str = "deactivated.json";
pub const VEHICLES_FILE: &str = "vehicles.toml";

/// All file repositories of one store directory
pub struct FileFleetStore {
    store_dir: PathBuf,
    pub trips: FileTripRepository,
    pub users: FileUserRepository,
    pub deactivated: FileDeactivatedVehicleRepository,
    pub vehicles: FileVehicleMasterRepository,
}

impl FileFleetStore {
    /// Open (creating if needed) a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            trips: FileTripRepository::new(store_dir.join(TRIPS_FILE)),
            users: FileUserRepository::new(store_dir.join(USERS_FILE)),
            deactivated: FileDeactivatedVehicleRepository::new(store_dir.join(DEACTIVATED_FILE)),
            vehicles: FileVehicleMasterRepository::new(store_dir.join(VEHICLES_FILE)),
            store_dir,
        })
    }

    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }
}
