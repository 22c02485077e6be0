//! Service layer for civic-report
//!
//! Sits between the HTTP handlers and the store/notifier: persist first,
//! then notify in the background.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod report_service;

pub use error::ServiceError;
pub use report_service::ReportService;
