//! termaid-client - Backend service clients for termaid
//!
//! Wraps the three HTTP contracts the session controller depends on:
//! - [`ExecutionClient`] - `POST /execute`, total (faults become error results)
//! - [`AnalysisClient`] - `POST /analyze`, faults surface as `Err`
//! - [`HealthClient`] - `GET /health`, mapped to [`ConnectivityStatus`]
//!
//! [`HttpBackend`] bundles them behind the [`Backend`] trait.
//!
//! [`ConnectivityStatus`]: termaid_core::ConnectivityStatus

pub mod analysis;
pub mod backend;
pub mod execution;
pub mod health;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use analysis::AnalysisClient;
pub use backend::{parse_base_url, Backend, HttpBackend, LocalBackend};
pub use execution::ExecutionClient;
pub use health::HealthClient;
pub use protocol::{ExecutionResult, CLEAR_SCREEN_SENTINEL};
