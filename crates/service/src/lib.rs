//! Service layer for vantage-dash
//!
//! Owns the single dashboard state object and runs each dashboard action
//! (login, skills reload, transaction fetch, logout, export) against the
//! vendor client.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod dashboard_service;
mod error;
mod export;
mod state;
mod tracing_observer;

#[cfg(test)]
mod dashboard_service_tests;

pub use dashboard_service::{DashboardService, FetchRequest};
pub use error::ServiceError;
pub use export::{EXPORT_HEADER, export_records_csv};
pub use state::DashboardState;
pub use tracing_observer::TracingObserver;
