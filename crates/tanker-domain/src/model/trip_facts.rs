//! Per-trip derived fields, computed once before predicate evaluation

use tanker_types::Trip;

/// Derived view of a current trip
#[derive(Debug, Clone)]
pub struct TripFacts<'a> {
    pub trip: &'a Trip,
    pub last_status: &'a str,
    pub end_to_lower: String,
    pub has_reported: bool,
    pub has_unloaded: bool,
}

impl<'a> TripFacts<'a> {
    pub fn derive(trip: &'a Trip) -> Self {
        Self {
            trip,
            last_status: trip.last_status(),
            end_to_lower: trip.end_to.as_deref().unwrap_or("").to_lowercase(),
            has_reported: trip.has_reported(),
            has_unloaded: trip.has_unloaded(),
        }
    }

    /// Whether the lowercased destination contains any of the keywords
    pub fn end_to_mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.end_to_lower.contains(k))
    }

    pub fn status_is(&self, status: &str) -> bool {
        self.last_status == status
    }
}
