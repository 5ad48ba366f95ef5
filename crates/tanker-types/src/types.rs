//! Fleet record types shared across crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Load state value for a trip running loaded
pub const LOAD_STATUS_LOADED: u8 = 1;
/// Load state value for a trip running empty
pub const LOAD_STATUS_EMPTY: u8 = 0;
/// Driver status value meaning no driver is assigned
pub const DRIVER_STATUS_NONE: u8 = 0;

/// One entry in a trip's append-only status log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub user: Option<String>,
}

/// Load-detail sub-record of a trip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTripDetail {
    /// Synonym of `Trip::end_date`; either one marks the cargo as unloaded
    #[serde(default)]
    pub unload_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub loading_supervisor: Option<String>,
}

/// A single loading/unloading cycle of one vehicle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub vehicle_no: String,

    /// 0 = running empty, 1 = running loaded
    #[serde(default)]
    pub load_status: Option<u8>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    /// Lower rank wins when start dates tie
    #[serde(default)]
    pub rank_index: i64,

    #[serde(default)]
    pub reporting_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub load_trip_detail: Option<LoadTripDetail>,

    #[serde(default)]
    pub start_from: Option<String>,

    #[serde(default)]
    pub end_to: Option<String>,

    #[serde(default)]
    pub supervisor: Option<String>,

    #[serde(default)]
    pub odometer: Option<f64>,

    #[serde(default)]
    pub status_update: Vec<StatusUpdate>,

    /// 0 = no driver assigned
    #[serde(default)]
    pub driver_status: Option<u8>,
}

impl Trip {
    /// Status of the last status-log entry, empty if the log is empty
    pub fn last_status(&self) -> &str {
        self.status_update
            .last()
            .map(|s| s.status.as_str())
            .unwrap_or("")
    }

    pub fn is_loaded(&self) -> bool {
        self.load_status == Some(LOAD_STATUS_LOADED)
    }

    pub fn is_empty(&self) -> bool {
        self.load_status == Some(LOAD_STATUS_EMPTY)
    }

    pub fn has_reported(&self) -> bool {
        self.reporting_date.is_some()
    }

    /// Either `end_date` or `load_trip_detail.unload_date` marks the trip unloaded
    pub fn has_unloaded(&self) -> bool {
        self.end_date.is_some() || self.unload_date().is_some()
    }

    pub fn unload_date(&self) -> Option<DateTime<Utc>> {
        self.load_trip_detail.as_ref().and_then(|d| d.unload_date)
    }

    pub fn has_no_driver(&self) -> bool {
        self.driver_status == Some(DRIVER_STATUS_NONE)
    }

    pub fn loading_supervisor(&self) -> Option<&str> {
        self.load_trip_detail
            .as_ref()
            .and_then(|d| d.loading_supervisor.as_deref())
    }

    /// Record unloading, keeping `end_date` and `unload_date` in step
    pub fn mark_unloaded(&mut self, at: DateTime<Utc>) {
        self.end_date = Some(at);
        self.load_trip_detail
            .get_or_insert_with(LoadTripDetail::default)
            .unload_date = Some(at);
    }

    /// Fill whichever of `end_date` / `unload_date` is missing from the other
    pub fn normalize_unload(&mut self) {
        match (self.end_date, self.unload_date()) {
            (Some(at), None) | (None, Some(at)) => self.mark_unloaded(at),
            _ => {}
        }
    }
}

/// Vehicle reference data used for enrichment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_no: String,
    pub capacity: f64,
}

/// Organizational division code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Division(pub u8);

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator account with its owned fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub division: Division,

    #[serde(default)]
    pub owned_vehicle_nos: BTreeSet<String>,
}

/// Per-user suppression entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivatedVehicle {
    pub vehicle_no: String,
    pub deactivated_by: String,
}
