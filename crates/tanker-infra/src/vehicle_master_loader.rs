//! Vehicle master data loader from TOML

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tanker_types::{ConfigError, Error, Result, Vehicle};

/// Container for parsing vehicles.toml
#[derive(Debug, Deserialize)]
struct VehicleMasterFile {
    #[serde(default)]
    vehicles: Vec<Vehicle>,
}

/// Vehicle capacities keyed by vehicle number
#[derive(Debug, Default)]
pub struct VehicleMasterLoader {
    vehicles: BTreeMap<String, Vehicle>,
}

impl VehicleMasterLoader {
    /// Load vehicle master data from a TOML file; a missing file is an empty master
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    /// Load vehicle master data from TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: VehicleMasterFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse vehicle master TOML: {}",
                e
            )))
        })?;

        let vehicles = file
            .vehicles
            .into_iter()
            .map(|v| (v.vehicle_no.clone(), v))
            .collect();

        Ok(Self { vehicles })
    }

    pub fn get_vehicle(&self, vehicle_no: &str) -> Option<&Vehicle> {
        self.vehicles.get(vehicle_no)
    }

    pub fn all_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }
}
