//! Repository trait definitions for the fleet record store
//!
//! The store itself is an external collaborator; these traits are the read
//! side the classification core consumes.

use std::collections::BTreeSet;

use tanker_types::Error;
use tanker_types::{DeactivatedVehicle, Division, Trip, User, Vehicle};

/// Repository for trip records
pub trait TripRepository: Send + Sync {
    /// Find every trip (full history) of the given vehicles
    fn find_by_vehicles(&self, vehicle_nos: &BTreeSet<String>) -> Result<Vec<Trip>, Error>;
}

/// Repository for operator accounts
pub trait UserRepository: Send + Sync {
    /// Find a user by identity
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>, Error>;

    /// Find all users
    fn find_all(&self) -> Result<Vec<User>, Error>;

    /// Find all users of one division
    fn find_by_division(&self, division: Division) -> Result<Vec<User>, Error>;

    /// Find users in any of `divisions` owning at least one of `vehicle_nos`
    fn find_owners(
        &self,
        divisions: &BTreeSet<Division>,
        vehicle_nos: &BTreeSet<String>,
    ) -> Result<Vec<User>, Error>;
}

/// Repository for per-user vehicle deactivations
pub trait DeactivatedVehicleRepository: Send + Sync {
    /// Find the vehicles deactivated by one user
    fn find_by_user(&self, user_id: &str) -> Result<Vec<DeactivatedVehicle>, Error>;
}

/// Repository for vehicle reference data
pub trait VehicleRepository: Send + Sync {
    /// Load all vehicle entries
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;

    /// Find the entries for the given vehicle numbers
    fn find_by_numbers(&self, vehicle_nos: &BTreeSet<String>) -> Result<Vec<Vehicle>, Error>;
}
