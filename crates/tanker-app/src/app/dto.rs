//! Response payloads for the summary and bucket endpoints

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use tanker_domain::service::CategorySummary;
use tanker_types::Trip;

use super::bucket_query::{Page, ResolvedQuery};

/// One dashboard tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub key: &'static str,
    pub icon: &'static str,
    pub count: usize,
    pub label: &'static str,
}

/// Tiles of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTiles {
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub total: usize,
    pub filters: Vec<Tile>,
}

/// `GET /summary-stats` payload, keyed by category key
pub type SummaryStats = BTreeMap<&'static str, CategoryTiles>;

impl From<&CategorySummary> for CategoryTiles {
    fn from(summary: &CategorySummary) -> Self {
        let category = summary.category;
        let mut filters: Vec<Tile> = summary
            .sub_bucket_counts
            .iter()
            .map(|c| Tile {
                key: c.bucket.key(),
                icon: c.bucket.icon(),
                count: c.count,
                label: c.bucket.label(),
            })
            .collect();
        // Loaded has two sub-buckets; its rollup fills the third tile
        if filters.len() < 3 {
            filters.insert(
                0,
                Tile {
                    key: category.key(),
                    icon: category.icon(),
                    count: summary.total_count,
                    label: category.label(),
                },
            );
        }
        Self {
            key: category.key(),
            icon: category.icon(),
            label: category.label(),
            total: summary.total_count,
            filters,
        }
    }
}

pub fn summary_stats(summaries: &[CategorySummary]) -> SummaryStats {
    summaries
        .iter()
        .map(|s| (s.category.key(), CategoryTiles::from(s)))
        .collect()
}

/// Vehicle capacity, or "N/A" when unknown
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Capacity {
    Known(f64),
    NotAvailable,
}

impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Capacity::Known(value) => serializer.serialize_f64(*value),
            Capacity::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

/// One trip in a bucket page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRow {
    #[serde(flatten)]
    pub trip: Trip,

    pub last_status: String,

    /// Present only on admin pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
}

impl From<Trip> for BucketRow {
    fn from(trip: Trip) -> Self {
        Self {
            last_status: trip.last_status().to_string(),
            trip,
            capacity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub has_more: bool,
}

/// `GET /bucket-data` payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPage {
    pub bucket: &'static str,
    /// Matches after search
    pub total_count: usize,
    /// Bucket members before search
    pub matched_count: usize,
    pub data: Vec<BucketRow>,
    pub pagination: Pagination,
    pub search_term: String,
    pub sort_by: &'static str,
    pub direction: &'static str,
}

impl BucketPage {
    pub fn new(query: &ResolvedQuery, matched_count: usize, page: Page<BucketRow>) -> Self {
        Self {
            bucket: query.key.key(),
            total_count: page.total_count,
            matched_count,
            pagination: Pagination {
                current_page: page.page,
                total_pages: page.total_pages,
                page_size: page.page_size,
                has_more: page.has_more,
            },
            data: page.data,
            search_term: query.search.clone(),
            sort_by: query.sort.key(),
            direction: query.direction.key(),
        }
    }
}
