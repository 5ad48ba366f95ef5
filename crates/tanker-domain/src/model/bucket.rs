//! Dashboard bucket taxonomy
//!
//! Buckets form two levels: a top-level [`Category`] and the [`SubBucket`]s
//! whose predicates are OR-ed together to form it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tanker_types::Error;

/// Top-level dashboard category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Loaded,
    EmptyForLoading,
    EmptyOther,
    UnderMaintenance,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Loaded,
        Category::EmptyForLoading,
        Category::EmptyOther,
        Category::UnderMaintenance,
    ];

    /// Key used by the bucket query and the summary payload
    pub fn key(&self) -> &'static str {
        match self {
            Category::Loaded => "loaded",
            Category::EmptyForLoading => "emptyForLoading",
            Category::EmptyOther => "emptyOther",
            Category::UnderMaintenance => "underMaintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Loaded => "Total Loaded",
            Category::EmptyForLoading => "Empty For Loading",
            Category::EmptyOther => "Empty Other",
            Category::UnderMaintenance => "Under Maintenance",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Loaded => "truck-loaded",
            Category::EmptyForLoading => "truck-empty",
            Category::EmptyOther => "warehouse",
            Category::UnderMaintenance => "wrench",
        }
    }

    pub fn sub_buckets(&self) -> &'static [SubBucket] {
        match self {
            Category::Loaded => &[SubBucket::LoadedOnWay, SubBucket::LoadedReported],
            Category::EmptyForLoading => &[
                SubBucket::EmptyOnWay,
                SubBucket::FactoryIn,
                SubBucket::OutsideStanding,
            ],
            Category::EmptyOther => &[
                SubBucket::DepotStanding,
                SubBucket::OtherStanding,
                SubBucket::LoadedAtDepot,
            ],
            Category::UnderMaintenance => &[
                SubBucket::Maintenance,
                SubBucket::Accidental,
                SubBucket::NoDriver,
            ],
        }
    }
}

/// A single named predicate inside a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubBucket {
    #[serde(rename = "loaded_total_on_way")]
    LoadedOnWay,
    #[serde(rename = "loaded_total_reported")]
    LoadedReported,
    EmptyOnWay,
    #[serde(rename = "empty_factory_in")]
    FactoryIn,
    #[serde(rename = "empty_outside_standing")]
    OutsideStanding,
    DepotStanding,
    OtherStanding,
    LoadedAtDepot,
    Maintenance,
    Accidental,
    NoDriver,
}

impl SubBucket {
    pub const ALL: [SubBucket; 11] = [
        SubBucket::LoadedOnWay,
        SubBucket::LoadedReported,
        SubBucket::EmptyOnWay,
        SubBucket::FactoryIn,
        SubBucket::OutsideStanding,
        SubBucket::DepotStanding,
        SubBucket::OtherStanding,
        SubBucket::LoadedAtDepot,
        SubBucket::Maintenance,
        SubBucket::Accidental,
        SubBucket::NoDriver,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SubBucket::LoadedOnWay => "loaded_total_on_way",
            SubBucket::LoadedReported => "loaded_total_reported",
            SubBucket::EmptyOnWay => "empty_on_way",
            SubBucket::FactoryIn => "empty_factory_in",
            SubBucket::OutsideStanding => "empty_outside_standing",
            SubBucket::DepotStanding => "depot_standing",
            SubBucket::OtherStanding => "other_standing",
            SubBucket::LoadedAtDepot => "loaded_at_depot",
            SubBucket::Maintenance => "maintenance",
            SubBucket::Accidental => "accidental",
            SubBucket::NoDriver => "no_driver",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubBucket::LoadedOnWay => "On Way",
            SubBucket::LoadedReported => "Reported",
            SubBucket::EmptyOnWay => "On Way",
            SubBucket::FactoryIn => "Factory In",
            SubBucket::OutsideStanding => "Outside Standing",
            SubBucket::DepotStanding => "Depot Standing",
            SubBucket::OtherStanding => "Other Standing",
            SubBucket::LoadedAtDepot => "Loaded",
            SubBucket::Maintenance => "Maintenance",
            SubBucket::Accidental => "Accidental",
            SubBucket::NoDriver => "No Driver",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SubBucket::LoadedOnWay | SubBucket::EmptyOnWay => "route",
            SubBucket::LoadedReported => "flag",
            SubBucket::FactoryIn => "factory",
            SubBucket::OutsideStanding => "parking",
            SubBucket::DepotStanding => "warehouse",
            SubBucket::OtherStanding => "building",
            SubBucket::LoadedAtDepot => "droplet",
            SubBucket::Maintenance => "wrench",
            SubBucket::Accidental => "alert-triangle",
            SubBucket::NoDriver => "user-x",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            SubBucket::LoadedOnWay | SubBucket::LoadedReported => Category::Loaded,
            SubBucket::EmptyOnWay | SubBucket::FactoryIn | SubBucket::OutsideStanding => {
                Category::EmptyForLoading
            }
            SubBucket::DepotStanding | SubBucket::OtherStanding | SubBucket::LoadedAtDepot => {
                Category::EmptyOther
            }
            SubBucket::Maintenance | SubBucket::Accidental | SubBucket::NoDriver => {
                Category::UnderMaintenance
            }
        }
    }
}

/// Bucket selector accepted by the paginated query: a whole category or one sub-bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Category(Category),
    Sub(SubBucket),
}

impl BucketKey {
    pub fn key(&self) -> &'static str {
        match self {
            BucketKey::Category(c) => c.key(),
            BucketKey::Sub(s) => s.key(),
        }
    }

    pub fn includes(&self, sub: SubBucket) -> bool {
        match self {
            BucketKey::Category(c) => sub.category() == *c,
            BucketKey::Sub(s) => *s == sub,
        }
    }
}

impl FromStr for BucketKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Some(category) = Category::ALL.iter().find(|c| c.key() == key) {
            return Ok(BucketKey::Category(*category));
        }
        SubBucket::ALL
            .iter()
            .find(|b| b.key() == key)
            .map(|b| BucketKey::Sub(*b))
            .ok_or_else(|| Error::InvalidBucket(key.to_string()))
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
