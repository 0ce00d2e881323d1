//! Operations Insights requests.
//!
//! Each operation is a declarative [Request](crate::Request): method, path,
//! query or body, and the required parameters checked before sending.

mod host_insights;
pub mod models;

pub use host_insights::*;

/// Version prefix of every Operations Insights path.
pub const API_VERSION: &str = "20200630";
