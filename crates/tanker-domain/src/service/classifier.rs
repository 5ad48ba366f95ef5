//! Bucket classification rule engine
//!
//! Every current trip is evaluated once against the sub-bucket predicate
//! table. Predicates are independent axes (load state, maintenance flags,
//! driver assignment), so a trip may land in several buckets and in more than
//! one category.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{BucketKey, Category, SubBucket, TripFacts};
use tanker_types::Trip;

pub const STATUS_IN_DISTILLERY: &str = "In Distillery";
pub const STATUS_LOADED: &str = "Loaded";
pub const STATUS_ACCIDENT: &str = "Accident";
pub const STATUS_BREAKDOWN: &str = "Breakdown";

/// Destinations that are never "outside standing"
const NON_STANDING_DESTINATIONS: [&str; 4] =
    ["gida office", "maintenece", "indian tanker", "maintenance"];
/// Destinations that count as "other standing"
const OTHER_STANDING_DESTINATIONS: [&str; 2] = ["gida office", "indian tanker"];
/// Destinations that mean the vehicle is in the workshop ("maintenece" is a common misspelling in trip data)
const MAINTENANCE_DESTINATIONS: [&str; 2] = ["maintenece", "maintenance"];

/// Tunable parts of the rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRules {
    /// Last statuses that keep a reported empty trip out of `empty_outside_standing`
    #[serde(default = "default_outside_standing_excluded")]
    pub outside_standing_excluded: BTreeSet<String>,
}

fn default_outside_standing_excluded() -> BTreeSet<String> {
    [STATUS_ACCIDENT, STATUS_BREAKDOWN, STATUS_IN_DISTILLERY]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            outside_standing_excluded: default_outside_standing_excluded(),
        }
    }
}

/// Evaluates sub-bucket predicates over current trips
#[derive(Debug, Clone, Default)]
pub struct BucketClassifier {
    rules: ClassificationRules,
}

impl BucketClassifier {
    pub fn new(rules: ClassificationRules) -> Self {
        Self { rules }
    }

    /// Predicate table
    pub fn matches(&self, bucket: SubBucket, f: &TripFacts<'_>) -> bool {
        let trip = f.trip;
        match bucket {
            SubBucket::LoadedOnWay => trip.is_loaded() && !f.has_reported,
            SubBucket::LoadedReported => trip.is_loaded() && f.has_reported && !f.has_unloaded,
            SubBucket::EmptyOnWay => trip.is_empty() && !f.has_reported,
            SubBucket::FactoryIn => {
                trip.is_empty() && f.has_reported && f.status_is(STATUS_IN_DISTILLERY)
            }
            SubBucket::OutsideStanding => {
                trip.is_empty()
                    && f.has_reported
                    && !self.rules.outside_standing_excluded.contains(f.last_status)
                    && !f.end_to_mentions(&NON_STANDING_DESTINATIONS)
                    && !trip.has_no_driver()
            }
            SubBucket::DepotStanding => trip.is_loaded() && f.has_unloaded,
            SubBucket::OtherStanding => {
                trip.is_empty() && f.has_reported && f.end_to_mentions(&OTHER_STANDING_DESTINATIONS)
            }
            SubBucket::LoadedAtDepot => {
                trip.is_empty() && f.has_reported && f.status_is(STATUS_LOADED)
            }
            SubBucket::Maintenance => f.end_to_mentions(&MAINTENANCE_DESTINATIONS),
            SubBucket::Accidental => {
                f.status_is(STATUS_ACCIDENT) || f.status_is(STATUS_BREAKDOWN)
            }
            SubBucket::NoDriver => trip.has_no_driver(),
        }
    }

    /// Sub-buckets one trip belongs to
    pub fn memberships(&self, trip: &Trip) -> Vec<SubBucket> {
        let facts = TripFacts::derive(trip);
        SubBucket::ALL
            .into_iter()
            .filter(|b| self.matches(*b, &facts))
            .collect()
    }

    /// Classify current trips in a single pass
    pub fn classify<I>(&self, current_trips: I) -> Classification
    where
        I: IntoIterator<Item = Trip>,
    {
        let trips: Vec<Trip> = current_trips.into_iter().collect();
        let mut members: BTreeMap<SubBucket, Vec<usize>> = BTreeMap::new();
        for (idx, trip) in trips.iter().enumerate() {
            for bucket in self.memberships(trip) {
                members.entry(bucket).or_default().push(idx);
            }
        }
        Classification { trips, members }
    }
}

/// Bucket membership of a set of current trips
#[derive(Debug, Clone, Default)]
pub struct Classification {
    trips: Vec<Trip>,
    members: BTreeMap<SubBucket, Vec<usize>>,
}

impl Classification {
    /// Number of classified trips
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Trips of one sub-bucket, in input order
    pub fn sub_bucket(&self, bucket: SubBucket) -> Vec<&Trip> {
        self.members
            .get(&bucket)
            .map(|idx| idx.iter().map(|&i| &self.trips[i]).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, bucket: SubBucket) -> usize {
        self.members.get(&bucket).map(Vec::len).unwrap_or(0)
    }

    /// Trips selected by a bucket key, in input order, each vehicle at most once
    pub fn members(&self, key: BucketKey) -> Vec<&Trip> {
        let mut selected: BTreeSet<usize> = BTreeSet::new();
        for (bucket, idx) in &self.members {
            if key.includes(*bucket) {
                selected.extend(idx.iter().copied());
            }
        }
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        selected
            .into_iter()
            .map(|i| &self.trips[i])
            .filter(|t| seen.insert(t.vehicle_no.as_str()))
            .collect()
    }

    /// Distinct vehicles satisfying any sub-bucket of `category`
    pub fn distinct_vehicles(&self, category: Category) -> usize {
        self.members(BucketKey::Category(category)).len()
    }
}
