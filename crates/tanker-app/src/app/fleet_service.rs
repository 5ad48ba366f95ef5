//! Fleet Service - per-request classification pipeline
//!
//! Every call works on a fresh snapshot:
//! 1. Resolve the user's visible vehicles
//! 2. Read their trips and select one current trip per vehicle
//! 3. Classify current trips into buckets
//! 4. Summarize, or search/sort/paginate one bucket
//! 5. Enrich the page for admins

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use tanker_domain::service::{
    select_current, summarize, BucketClassifier, CategorySummary, Classification, DivisionPolicy,
    OwnershipResolver,
};
use tanker_types::{Division, Error, Result, Trip};

use super::bucket_query::{BucketRequest, Page, ResolvedQuery};
use super::dto::{summary_stats, BucketPage, BucketRow, SummaryStats};
use super::enrichment::enrich;
use crate::config::Config;
use crate::repository::Repositories;

/// Stateless request orchestrator, cheap to clone into handlers
#[derive(Clone)]
pub struct FleetService {
    repos: Repositories,
    policy: Arc<DivisionPolicy>,
    classifier: Arc<BucketClassifier>,
    supervisor_divisions: BTreeSet<Division>,
    default_page_size: usize,
    max_page_size: usize,
}

impl FleetService {
    pub fn new(repos: Repositories, config: &Config) -> Self {
        Self {
            repos,
            policy: Arc::new(config.divisions.clone()),
            classifier: Arc::new(BucketClassifier::new(config.classification.clone())),
            supervisor_divisions: config.supervisor_divisions.clone(),
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }

    /// Classify the current trips of every vehicle `user_id` may see
    pub fn classify_for(&self, user_id: &str) -> Result<Classification> {
        let started = Instant::now();
        let resolver = OwnershipResolver::new(
            self.repos.users.as_ref(),
            self.repos.vehicles.as_ref(),
            self.repos.deactivated.as_ref(),
            &self.policy,
        );
        let vehicles = resolver.resolve_vehicles(user_id).map_err(input_error)?;
        let trips = self
            .repos
            .trips
            .find_by_vehicles(&vehicles)
            .map_err(input_error)?;
        let trip_count = trips.len();
        let current = select_current(trips);
        let classification = self.classifier.classify(current.into_values());

        debug!(
            user_id,
            vehicles = vehicles.len(),
            trips = trip_count,
            current = classification.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Classified current trips"
        );
        Ok(classification)
    }

    /// Per-category counts for `user_id`
    pub fn summary_for(&self, user_id: &str) -> Result<Vec<CategorySummary>> {
        let classification = self.classify_for(user_id)?;
        Ok(summarize(&classification))
    }

    /// Validate a drill-down request against the configured page limits
    pub fn resolve(&self, request: &BucketRequest) -> Result<ResolvedQuery> {
        request.resolve(self.default_page_size, self.max_page_size)
    }

    /// Searched and sorted members of one bucket, with the pre-search bucket size
    pub fn sorted_members(&self, user_id: &str, query: &ResolvedQuery) -> Result<(Vec<Trip>, usize)> {
        let classification = self.classify_for(user_id)?;
        let members = classification.members(query.key);
        let matched = members.len();
        Ok((query.filter_and_sort(members), matched))
    }

    /// Dashboard tiles for `user_id`
    pub async fn summary(&self, user_id: String) -> Result<SummaryStats> {
        let service = self.clone();
        let summaries = blocking(move || service.summary_for(&user_id)).await?;
        let total: usize = summaries.iter().map(|s| s.total_count).sum();
        info!(categories = summaries.len(), total, "Summary computed");
        Ok(summary_stats(&summaries))
    }

    /// One page of a bucket, enriched when `isAdmin` is set
    pub async fn bucket_data(&self, user_id: String, request: BucketRequest) -> Result<BucketPage> {
        let query = self.resolve(&request)?;
        let service = self.clone();
        let worker_query = query.clone();
        let (page, matched) = blocking(move || {
            let (sorted, matched) = service.sorted_members(&user_id, &worker_query)?;
            Ok((worker_query.paginate(sorted), matched))
        })
        .await?;

        let (trips, page): (Vec<Trip>, Page<BucketRow>) = page.with_data(Vec::new());
        let rows = self.rows(trips, query.is_admin).await;
        let (_, page) = page.with_data(rows);

        info!(
            bucket = %query.key,
            matched,
            total = page.total_count,
            page = page.page,
            admin = query.is_admin,
            "Bucket page served"
        );
        Ok(BucketPage::new(&query, matched, page))
    }

    /// Every row of a bucket after search and sort, for export
    pub async fn export_rows(&self, user_id: String, request: BucketRequest) -> Result<Vec<BucketRow>> {
        let query = self.resolve(&request)?;
        let service = self.clone();
        let worker_query = query.clone();
        let (sorted, _) =
            blocking(move || service.sorted_members(&user_id, &worker_query)).await?;
        Ok(self.rows(sorted, query.is_admin).await)
    }

    async fn rows(&self, trips: Vec<Trip>, is_admin: bool) -> Vec<BucketRow> {
        if is_admin {
            enrich(
                trips,
                self.repos.users.clone(),
                self.repos.vehicles.clone(),
                self.supervisor_divisions.clone(),
            )
            .await
        } else {
            trips.into_iter().map(BucketRow::from).collect()
        }
    }
}

/// Run a snapshot read off the async workers
async fn blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| Error::ClassificationInput(e.to_string()))?
}

/// Unknown users stay `NotFound`; any other read failure means no usable snapshot
fn input_error(err: Error) -> Error {
    match err {
        Error::NotFound(_) | Error::ClassificationInput(_) => err,
        other => Error::ClassificationInput(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_keeps_not_found() {
        let err = input_error(Error::NotFound("u9".to_string()));
        assert!(matches!(err, Error::NotFound(_)));

        let err = input_error(Error::Io(std::io::Error::other("disk gone")));
        assert!(matches!(err, Error::ClassificationInput(msg) if msg.contains("disk gone")));
    }
}
