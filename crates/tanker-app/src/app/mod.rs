//! Application Layer
//!
//! Orchestrates the classification core for the CLI and HTTP front ends:
//! - `fleet_service`: per-request pipeline (ownership, current trips, classification)
//! - `bucket_query`: search, sort and pagination of one bucket
//! - `enrichment`: admin supervisor/capacity lookup
//! - `dto`: response payloads

pub mod bucket_query;
pub mod dto;
pub mod enrichment;
pub mod fleet_service;

pub use bucket_query::{BucketRequest, Direction, Page, ResolvedQuery, SortField};
pub use dto::{BucketPage, BucketRow, Capacity, CategoryTiles, Pagination, SummaryStats, Tile};
pub use enrichment::enrich;
pub use fleet_service::FleetService;
