//! Domain layer - bucket taxonomy, classification services, repository traits

pub mod model;
pub mod repository;
pub mod service;
