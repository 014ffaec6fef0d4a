//! Error types for chart construction and body lookups.

use crate::graha::Body;

/// Errors from building charts out of resolved longitudes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A longitude was NaN or infinite.
    #[error("invalid longitude for {body}: {value}")]
    InvalidLongitude { body: Body, value: f64 },
    /// A body required by the chart was not resolved.
    #[error("missing body: {0}")]
    MissingBody(Body),
    /// Sign index outside 1..=12.
    #[error("invalid sign index: {0} (expected 1-12)")]
    InvalidSignIndex(u8),
    /// Body name outside the closed set of chart bodies.
    #[error("unknown body: {0:?}")]
    UnknownBody(String),
}
