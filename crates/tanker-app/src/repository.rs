//! Repository adapters for persistence layer

use std::path::PathBuf;
use std::sync::Arc;

use tanker_domain::repository::{
    DeactivatedVehicleRepository, TripRepository, UserRepository, VehicleRepository,
};
use tanker_infra::FileFleetStore;
use tanker_types::Result;

use crate::config::Config;

/// Collaborator readers shared by every request
#[derive(Clone)]
pub struct Repositories {
    pub trips: Arc<dyn TripRepository>,
    pub users: Arc<dyn UserRepository>,
    pub deactivated: Arc<dyn DeactivatedVehicleRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
}

/// Open file-based repositories at the configured store directory
pub fn open_repositories(config: &Config) -> Result<Repositories> {
    open_repositories_at(config.store_dir()?)
}

/// Open file-based repositories at a custom directory
pub fn open_repositories_at(store_dir: PathBuf) -> Result<Repositories> {
    let store = FileFleetStore::open(store_dir)?;
    Ok(Repositories {
        trips: Arc::new(store.trips),
        users: Arc::new(store.users),
        deactivated: Arc::new(store.deactivated),
        vehicles: Arc::new(store.vehicles),
    })
}
