//! Infrastructure layer - file-backed repositories over a store directory

pub mod persistence;
pub mod vehicle_master_loader;

pub use persistence::FileFleetStore;
