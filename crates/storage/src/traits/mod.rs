//! Storage backend trait abstraction
//!
//! Async domain traits consumed by the service layer.

pub mod report;

pub use report::ReportStore;
