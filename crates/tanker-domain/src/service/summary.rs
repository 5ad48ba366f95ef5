//! Summary aggregation for dashboard tiles

use serde::Serialize;

use crate::model::{Category, SubBucket};
use crate::service::classifier::Classification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubBucketCount {
    pub bucket: SubBucket,
    pub count: usize,
}

/// Counts of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub sub_bucket_counts: Vec<SubBucketCount>,
    /// Distinct vehicles in any sub-bucket, not the sum of sub-bucket counts
    pub total_count: usize,
}

impl CategorySummary {
    pub fn count_of(&self, bucket: SubBucket) -> usize {
        self.sub_bucket_counts
            .iter()
            .find(|c| c.bucket == bucket)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Per-category counts, in dashboard order
pub fn summarize(classification: &Classification) -> Vec<CategorySummary> {
    Category::ALL
        .into_iter()
        .map(|category| CategorySummary {
            category,
            sub_bucket_counts: category
                .sub_buckets()
                .iter()
                .map(|b| SubBucketCount {
                    bucket: *b,
                    count: classification.count(*b),
                })
                .collect(),
            total_count: classification.distinct_vehicles(category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::classifier::BucketClassifier;
    use chrono::{TimeZone, Utc};
    use tanker_types::Trip;

    fn trip(vehicle: &str, load_status: u8, reported: bool) -> Trip {
        Trip {
            vehicle_no: vehicle.to_string(),
            load_status: Some(load_status),
            reporting_date: reported.then(|| Utc.with_ymd_and_hms(2024, 1, 9, 12, 0, 0).unwrap()),
            driver_status: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_loaded_total_is_on_way_plus_reported() {
        let trips = vec![
            trip("V1", 1, false),
            trip("V2", 1, true),
            trip("V3", 1, true),
            trip("V4", 0, false),
        ];
        let summary = summarize(&BucketClassifier::default().classify(trips));
        let loaded = &summary[0];
        assert_eq!(loaded.category, Category::Loaded);
        assert_eq!(loaded.count_of(SubBucket::LoadedOnWay), 1);
        assert_eq!(loaded.count_of(SubBucket::LoadedReported), 2);
        assert_eq!(loaded.total_count, 3);
        assert_eq!(summary[1].count_of(SubBucket::EmptyOnWay), 1);
    }

    #[test]
    fn test_total_does_not_double_count() {
        let mut t = trip("V1", 0, false);
        t.driver_status = Some(0);
        t.end_to = Some("Maintenance Shed".to_string());
        let summary = summarize(&BucketClassifier::default().classify(vec![t]));
        let maintenance = &summary[3];
        assert_eq!(maintenance.count_of(SubBucket::Maintenance), 1);
        assert_eq!(maintenance.count_of(SubBucket::NoDriver), 1);
        assert_eq!(maintenance.total_count, 1);
    }

    #[test]
    fn test_empty_input_gives_zero_tiles() {
        let summary = summarize(&Classification::default());
        assert_eq!(summary.len(), 4);
        assert!(summary.iter().all(|s| s.total_count == 0));
        assert_eq!(summary[2].sub_bucket_counts.len(), 3);
    }
}
