//! Admin enrichment: supervisor names and vehicle capacity for one page

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, warn};

use tanker_domain::repository::{UserRepository, VehicleRepository};
use tanker_types::{Division, Error, Result, Trip, User, Vehicle};

use super::dto::{BucketRow, Capacity};

pub const SUPERVISOR_NOT_FOUND: &str = "Not found";

/// Attach supervisor and capacity to each trip.
///
/// The owner lookup and the capacity lookup run concurrently. If either fails
/// the page is still returned with `"Not found"` / `"N/A"` defaults.
pub async fn enrich(
    trips: Vec<Trip>,
    users: Arc<dyn UserRepository>,
    vehicles: Arc<dyn VehicleRepository>,
    supervisor_divisions: BTreeSet<Division>,
) -> Vec<BucketRow> {
    if trips.is_empty() {
        return Vec::new();
    }
    let vehicle_nos: BTreeSet<String> = trips.iter().map(|t| t.vehicle_no.clone()).collect();

    let owners_task = {
        let vehicle_nos = vehicle_nos.clone();
        tokio::task::spawn_blocking(move || users.find_owners(&supervisor_divisions, &vehicle_nos))
    };
    let capacity_task =
        tokio::task::spawn_blocking(move || vehicles.find_by_numbers(&vehicle_nos));
    let (owners, capacities) = tokio::join!(owners_task, capacity_task);

    let owners = settle(owners, "supervisor lookup");
    let capacities = settle(capacities, "capacity lookup");

    let supervisors = supervisor_names(&owners);
    let capacities: BTreeMap<&str, f64> = capacities
        .iter()
        .map(|v| (v.vehicle_no.as_str(), v.capacity))
        .collect();

    debug!(
        trips = trips.len(),
        owners = owners.len(),
        capacities = capacities.len(),
        "Enriched bucket page"
    );

    trips
        .into_iter()
        .map(|mut trip| {
            trip.supervisor = Some(
                supervisors
                    .get(trip.vehicle_no.as_str())
                    .cloned()
                    .unwrap_or_else(|| SUPERVISOR_NOT_FOUND.to_string()),
            );
            let capacity = capacities
                .get(trip.vehicle_no.as_str())
                .map(|c| Capacity::Known(*c))
                .unwrap_or(Capacity::NotAvailable);
            let mut row = BucketRow::from(trip);
            row.capacity = Some(capacity);
            row
        })
        .collect()
}

/// Flatten a lookup outcome; failures degrade to an empty result
fn settle<T>(
    outcome: std::result::Result<Result<Vec<T>>, tokio::task::JoinError>,
    lookup: &str,
) -> Vec<T> {
    let degraded = match outcome {
        Ok(Ok(found)) => return found,
        Ok(Err(e)) => Error::EnrichmentDegraded(format!("{}: {}", lookup, e)),
        Err(e) => Error::EnrichmentDegraded(format!("{}: {}", lookup, e)),
    };
    warn!(error = %degraded, "Applying enrichment defaults");
    Vec::new()
}

/// Comma-joined owner names per vehicle, in user order
fn supervisor_names(owners: &[User]) -> BTreeMap<&str, String> {
    let mut names: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for user in owners {
        for vehicle_no in &user.owned_vehicle_nos {
            names.entry(vehicle_no.as_str()).or_default().push(user.name.as_str());
        }
    }
    names
        .into_iter()
        .map(|(vehicle_no, list)| (vehicle_no, list.join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, vehicles: &[&str]) -> User {
        User {
            user_id: id.to_string(),
            name: name.to_string(),
            division: Division(0),
            owned_vehicle_nos: vehicles.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_supervisor_names_joined_per_vehicle() {
        let owners = vec![
            user("u1", "Ravi", &["GJ01", "GJ02"]),
            user("u2", "Meena", &["GJ01"]),
        ];
        let names = supervisor_names(&owners);
        assert_eq!(names.get("GJ01").map(String::as_str), Some("Ravi, Meena"));
        assert_eq!(names.get("GJ02").map(String::as_str), Some("Ravi"));
        assert!(!names.contains_key("GJ03"));
    }

    #[test]
    fn test_settle_failure_is_empty() {
        let failed: std::result::Result<Result<Vec<Vehicle>>, tokio::task::JoinError> =
            Ok(Err(Error::NotFound("store".to_string())));
        assert!(settle(failed, "capacity lookup").is_empty());
    }
}
