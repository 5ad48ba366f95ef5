//! Ownership resolution: which vehicles a user may see

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::repository::{DeactivatedVehicleRepository, UserRepository, VehicleRepository};
use tanker_types::{Division, Error, Result, User};

/// Maps an admin division code to the division it administers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminScope {
    pub code: Division,
    pub division: Division,
}

/// Division code table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionPolicy {
    /// Codes that see the entire fleet
    #[serde(default = "default_management")]
    pub management: BTreeSet<Division>,

    /// Codes that see every vehicle of one division
    #[serde(default = "default_admin")]
    pub admin: Vec<AdminScope>,
}

fn default_management() -> BTreeSet<Division> {
    BTreeSet::from([Division(9)])
}

fn default_admin() -> Vec<AdminScope> {
    (0..4)
        .map(|d| AdminScope {
            code: Division(d + 5),
            division: Division(d),
        })
        .collect()
}

impl Default for DivisionPolicy {
    fn default() -> Self {
        Self {
            management: default_management(),
            admin: default_admin(),
        }
    }
}

/// Visibility scope of a division code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Management,
    DivisionAdmin(Division),
    Own,
}

impl DivisionPolicy {
    pub fn scope_of(&self, division: Division) -> Scope {
        if self.management.contains(&division) {
            return Scope::Management;
        }
        self.admin
            .iter()
            .find(|a| a.code == division)
            .map(|a| Scope::DivisionAdmin(a.division))
            .unwrap_or(Scope::Own)
    }
}

/// Computes the effective vehicle set of a user
pub struct OwnershipResolver<'a> {
    users: &'a dyn UserRepository,
    vehicles: &'a dyn VehicleRepository,
    deactivated: &'a dyn DeactivatedVehicleRepository,
    policy: &'a DivisionPolicy,
}

impl<'a> OwnershipResolver<'a> {
    pub fn new(
        users: &'a dyn UserRepository,
        vehicles: &'a dyn VehicleRepository,
        deactivated: &'a dyn DeactivatedVehicleRepository,
        policy: &'a DivisionPolicy,
    ) -> Self {
        Self {
            users,
            vehicles,
            deactivated,
            policy,
        }
    }

    /// Resolve the visible vehicles of `user_id`, minus those the user deactivated
    pub fn resolve_vehicles(&self, user_id: &str) -> Result<BTreeSet<String>> {
        let user = self
            .users
            .find_by_id(user_id)?
            .ok_or_else(|| Error::NotFound(user_id.to_string()))?;

        let scope = self.policy.scope_of(user.division);
        let mut visible = match scope {
            Scope::Management => self.fleet()?,
            Scope::DivisionAdmin(division) => owned_union(&self.users.find_by_division(division)?),
            Scope::Own => user.owned_vehicle_nos.clone(),
        };

        let deactivated = self.deactivated.find_by_user(&user.user_id)?;
        for entry in &deactivated {
            visible.remove(&entry.vehicle_no);
        }

        debug!(
            user_id = %user.user_id,
            division = %user.division,
            scope = ?scope,
            deactivated = deactivated.len(),
            visible = visible.len(),
            "Resolved vehicle ownership"
        );
        Ok(visible)
    }

    /// Every vehicle known to the fleet: vehicle master plus all owned vehicles
    fn fleet(&self) -> Result<BTreeSet<String>> {
        let mut fleet = owned_union(&self.users.find_all()?);
        fleet.extend(self.vehicles.find_all()?.into_iter().map(|v| v.vehicle_no));
        Ok(fleet)
    }
}

fn owned_union(users: &[User]) -> BTreeSet<String> {
    users
        .iter()
        .flat_map(|u| u.owned_vehicle_nos.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanker_types::{DeactivatedVehicle, Vehicle};

    struct Fixture {
        users: Vec<User>,
        vehicles: Vec<Vehicle>,
        deactivated: Vec<DeactivatedVehicle>,
    }

    impl UserRepository for Fixture {
        fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self.users.iter().find(|u| u.user_id == user_id).cloned())
        }

        fn find_all(&self) -> Result<Vec<User>> {
            Ok(self.users.clone())
        }

        fn find_by_division(&self, division: Division) -> Result<Vec<User>> {
            Ok(self
                .users
                .iter()
                .filter(|u| u.division == division)
                .cloned()
                .collect())
        }

        fn find_owners(
            &self,
            _divisions: &BTreeSet<Division>,
            _vehicle_nos: &BTreeSet<String>,
        ) -> Result<Vec<User>> {
            Ok(Vec::new())
        }
    }

    impl VehicleRepository for Fixture {
        fn find_all(&self) -> Result<Vec<Vehicle>> {
            Ok(self.vehicles.clone())
        }

        fn find_by_numbers(&self, _vehicle_nos: &BTreeSet<String>) -> Result<Vec<Vehicle>> {
            Ok(Vec::new())
        }
    }

    impl DeactivatedVehicleRepository for Fixture {
        fn find_by_user(&self, user_id: &str) -> Result<Vec<DeactivatedVehicle>> {
            Ok(self
                .deactivated
                .iter()
                .filter(|d| d.deactivated_by == user_id)
                .cloned()
                .collect())
        }
    }

    fn user(id: &str, division: u8, owned: &[&str]) -> User {
        User {
            user_id: id.to_string(),
            name: id.to_uppercase(),
            division: Division(division),
            owned_vehicle_nos: owned.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn fixture() -> Fixture {
        Fixture {
            users: vec![
                user("alice", 1, &["V1", "V2"]),
                user("bob", 1, &["V3"]),
                user("carol", 2, &["V4"]),
                user("admin1", 6, &[]),
                user("boss", 9, &[]),
            ],
            vehicles: vec![Vehicle {
                vehicle_no: "V9".to_string(),
                capacity: 24.0,
            }],
            deactivated: vec![
                DeactivatedVehicle {
                    vehicle_no: "V2".to_string(),
                    deactivated_by: "alice".to_string(),
                },
                DeactivatedVehicle {
                    vehicle_no: "V3".to_string(),
                    deactivated_by: "alice".to_string(),
                },
            ],
        }
    }

    fn resolve(f: &Fixture, user_id: &str) -> Result<BTreeSet<String>> {
        let policy = DivisionPolicy::default();
        OwnershipResolver::new(f, f, f, &policy).resolve_vehicles(user_id)
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_own_fleet_minus_own_deactivations() {
        let f = fixture();
        assert_eq!(resolve(&f, "alice").unwrap(), set(&["V1"]));
    }

    #[test]
    fn test_deactivation_is_scoped_to_deactivating_user() {
        let f = fixture();
        assert_eq!(resolve(&f, "bob").unwrap(), set(&["V3"]));
    }

    #[test]
    fn test_division_admin_sees_division() {
        let f = fixture();
        assert_eq!(resolve(&f, "admin1").unwrap(), set(&["V1", "V2", "V3"]));
    }

    #[test]
    fn test_management_sees_fleet() {
        let f = fixture();
        assert_eq!(
            resolve(&f, "boss").unwrap(),
            set(&["V1", "V2", "V3", "V4", "V9"])
        );
    }

    #[test]
    fn test_unknown_user_is_not_found() {
        let f = fixture();
        assert!(matches!(resolve(&f, "mallory"), Err(Error::NotFound(_))));
    }
}
