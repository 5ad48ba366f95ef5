//! Application service layer - config, bucket queries, enrichment, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
