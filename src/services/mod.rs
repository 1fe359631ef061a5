//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence and the recomputed monthly analysis.

pub mod tracker;

pub use tracker::{MonthExport, Snapshot, TrackerService};
