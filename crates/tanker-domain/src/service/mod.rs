//! Domain services

pub mod classifier;
pub mod current_trip;
pub mod ownership;
pub mod summary;

pub use classifier::{BucketClassifier, Classification, ClassificationRules};
pub use current_trip::select_current;
pub use ownership::{AdminScope, DivisionPolicy, OwnershipResolver, Scope};
pub use summary::{summarize, CategorySummary, SubBucketCount};
