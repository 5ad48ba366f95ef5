//! Domain model types

pub mod bucket;
pub mod trip_facts;

pub use bucket::{BucketKey, Category, SubBucket};
pub use trip_facts::TripFacts;
