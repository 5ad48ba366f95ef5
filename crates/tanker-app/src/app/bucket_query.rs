//! Bucket drill-down: search, stable sort, pagination

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use tanker_domain::model::BucketKey;
use tanker_types::{Result, Trip};

/// Sortable trip fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    VehicleNo,
    #[default]
    EndTo,
    StartFrom,
    StartDate,
    ReportingDate,
    EndDate,
    LastStatus,
    Supervisor,
}

impl SortField {
    pub fn key(&self) -> &'static str {
        match self {
            SortField::VehicleNo => "vehicleNo",
            SortField::EndTo => "endTo",
            SortField::StartFrom => "startFrom",
            SortField::StartDate => "startDate",
            SortField::ReportingDate => "reportingDate",
            SortField::EndDate => "endDate",
            SortField::LastStatus => "lastStatus",
            SortField::Supervisor => "supervisor",
        }
    }

    /// Parse a field name; unknown names sort by destination
    pub fn parse_or_default(name: &str) -> Self {
        const ALL: [SortField; 8] = [
            SortField::VehicleNo,
            SortField::EndTo,
            SortField::StartFrom,
            SortField::StartDate,
            SortField::ReportingDate,
            SortField::EndDate,
            SortField::LastStatus,
            SortField::Supervisor,
        ];
        let name = name.trim();
        ALL.into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Compare two trips on this field; absent values sort lowest
    pub fn compare(&self, a: &Trip, b: &Trip) -> Ordering {
        match self {
            SortField::VehicleNo => a.vehicle_no.cmp(&b.vehicle_no),
            SortField::EndTo => a.end_to.as_deref().cmp(&b.end_to.as_deref()),
            SortField::StartFrom => a.start_from.as_deref().cmp(&b.start_from.as_deref()),
            SortField::StartDate => a.start_date.cmp(&b.start_date),
            SortField::ReportingDate => a.reporting_date.cmp(&b.reporting_date),
            SortField::EndDate => a
                .end_date
                .or_else(|| a.unload_date())
                .cmp(&b.end_date.or_else(|| b.unload_date())),
            SortField::LastStatus => a.last_status().cmp(b.last_status()),
            SortField::Supervisor => a.supervisor.as_deref().cmp(&b.supervisor.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn key(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    pub fn parse_or_default(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

/// Raw drill-down parameters as received from a caller
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRequest {
    #[serde(default)]
    pub bucket: String,

    #[serde(default)]
    pub search_term: Option<String>,

    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde(default)]
    pub direction: Option<String>,

    /// Signed so out-of-range values reach `resolve` and get clamped
    #[serde(default)]
    pub page_size: Option<i64>,

    #[serde(default)]
    pub page_no: Option<i64>,

    #[serde(default)]
    pub is_admin: bool,
}

impl BucketRequest {
    /// Validate the bucket key and clamp paging
    pub fn resolve(&self, default_page_size: usize, max_page_size: usize) -> Result<ResolvedQuery> {
        let key = BucketKey::from_str(&self.bucket)?;
        let max_page_size = i64::try_from(max_page_size.max(1)).unwrap_or(i64::MAX);
        let page_size = self
            .page_size
            .unwrap_or_else(|| i64::try_from(default_page_size).unwrap_or(max_page_size))
            .clamp(1, max_page_size) as usize;
        Ok(ResolvedQuery {
            key,
            search: self.search_term.as_deref().unwrap_or("").trim().to_string(),
            sort: self
                .sort_by
                .as_deref()
                .map(SortField::parse_or_default)
                .unwrap_or_default(),
            direction: self
                .direction
                .as_deref()
                .map(Direction::parse_or_default)
                .unwrap_or_default(),
            page: self.page_no.unwrap_or(1).max(1) as usize,
            page_size,
            is_admin: self.is_admin,
        })
    }
}

/// Validated drill-down parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub key: BucketKey,
    pub search: String,
    pub sort: SortField,
    pub direction: Direction,
    pub page: usize,
    pub page_size: usize,
    pub is_admin: bool,
}

impl ResolvedQuery {
    /// Whether `trip` matches the search term (empty term matches everything)
    pub fn matches_search(&self, trip: &Trip) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            Some(trip.vehicle_no.as_str()),
            trip.end_to.as_deref(),
            trip.start_from.as_deref(),
            trip.supervisor.as_deref(),
            trip.loading_supervisor(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Search and stable-sort bucket members; ties keep input order
    pub fn filter_and_sort(&self, members: Vec<&Trip>) -> Vec<Trip> {
        let mut selected: Vec<Trip> = members
            .into_iter()
            .filter(|t| self.matches_search(t))
            .cloned()
            .collect();
        match self.direction {
            Direction::Asc => selected.sort_by(|a, b| self.sort.compare(a, b)),
            Direction::Desc => selected.sort_by(|a, b| self.sort.compare(b, a)),
        }
        selected
    }

    /// Cut one page out of an already sorted list
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total_count = items.len();
        let total_pages = total_count.div_ceil(self.page_size);
        let skip = (self.page - 1).saturating_mul(self.page_size);
        let data = items.into_iter().skip(skip).take(self.page_size).collect();
        Page {
            data,
            total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages,
            has_more: self.page < total_pages,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Swap the page rows, keeping the paging metadata
    pub fn with_data<U>(self, data: Vec<U>) -> (Vec<T>, Page<U>) {
        let page = Page {
            data,
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_more: self.has_more,
        };
        (self.data, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanker_domain::model::{Category, SubBucket};
    use tanker_types::Error;

    fn trip(vehicle: &str, end_to: Option<&str>, from: &str) -> Trip {
        Trip {
            vehicle_no: vehicle.to_string(),
            end_to: end_to.map(String::from),
            start_from: Some(from.to_string()),
            ..Default::default()
        }
    }

    fn request(bucket: &str) -> BucketRequest {
        BucketRequest {
            bucket: bucket.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_defaults_and_clamps() {
        let mut req = request("loaded");
        req.page_no = Some(0);
        req.page_size = Some(0);
        let q = req.resolve(10, 500).unwrap();
        assert_eq!(q.key, BucketKey::Category(Category::Loaded));
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 1);
        assert_eq!(q.sort, SortField::EndTo);
        assert_eq!(q.direction, Direction::Asc);

        req.page_size = Some(10_000);
        req.sort_by = Some("nonsense".to_string());
        req.direction = Some("DESC".to_string());
        let q = req.resolve(10, 500).unwrap();
        assert_eq!(q.page_size, 500);
        assert_eq!(q.sort, SortField::EndTo);

        req.page_no = Some(-3);
        req.page_size = Some(-5);
        let q = req.resolve(10, 500).unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 1);
        assert_eq!(q.direction, Direction::Desc);
    }

    #[test]
    fn test_unknown_bucket_rejected() {
        let err = request("nowhere").resolve(10, 500).unwrap_err();
        assert!(matches!(err, Error::InvalidBucket(_)));
        let q = request("no_driver").resolve(10, 500).unwrap();
        assert_eq!(q.key, BucketKey::Sub(SubBucket::NoDriver));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut req = request("loaded");
        req.search_term = Some("  kAnD ".to_string());
        let q = req.resolve(10, 500).unwrap();
        assert!(q.matches_search(&trip("GJ01", Some("Kandla Port"), "Vapi")));
        assert!(!q.matches_search(&trip("GJ01", Some("Surat"), "Vapi")));

        let mut t = trip("GJ02", None, "Vapi");
        t.supervisor = Some("Kandarp".to_string());
        assert!(q.matches_search(&t));
    }

    #[test]
    fn test_stable_sort_keeps_input_order_on_ties() {
        let trips = vec![
            trip("A", Some("Surat"), "1"),
            trip("B", Some("Kandla"), "2"),
            trip("C", Some("Surat"), "3"),
            trip("D", None, "4"),
        ];
        let refs: Vec<&Trip> = trips.iter().collect();

        let asc = request("loaded").resolve(10, 500).unwrap();
        let order: Vec<String> = asc
            .filter_and_sort(refs.clone())
            .into_iter()
            .map(|t| t.vehicle_no)
            .collect();
        assert_eq!(order, vec!["D", "B", "A", "C"]);

        let mut req = request("loaded");
        req.direction = Some("desc".to_string());
        let desc = req.resolve(10, 500).unwrap();
        let order: Vec<String> = desc
            .filter_and_sort(refs)
            .into_iter()
            .map(|t| t.vehicle_no)
            .collect();
        assert_eq!(order, vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_pages_concatenate_to_full_result() {
        let items: Vec<u32> = (0..23).collect();
        let mut collected = Vec::new();
        let mut page_no = 1;
        loop {
            let mut req = request("loaded");
            req.page_no = Some(page_no);
            req.page_size = Some(5);
            let page = req.resolve(10, 500).unwrap().paginate(items.clone());
            assert_eq!(page.total_count, 23);
            assert_eq!(page.total_pages, 5);
            collected.extend(page.data);
            if !page.has_more {
                break;
            }
            page_no += 1;
        }
        assert_eq!(page_no, 5);
        assert_eq!(collected, items);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let mut req = request("loaded");
        req.page_no = Some(9);
        let page = req.resolve(10, 500).unwrap().paginate(vec![1, 2, 3]);
        assert!(page.data.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.total_pages, 1);
    }
}
