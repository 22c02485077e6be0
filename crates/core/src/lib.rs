//! Core types and helpers for civic-report
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
pub mod env_config;
mod error;
mod report;

pub use error::*;
pub use report::*;
