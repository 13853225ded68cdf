//! Error types for chart calculation.

use thiserror::Error;
use ziwei_base::BaseError;

use crate::trace::PipelineStep;

/// Errors from [`calculate`](crate::calculate). Any error aborts the whole
/// call; no partial chart is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed or out-of-domain birth field.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// A valid-looking key has no table entry.
    #[error("no entry in {table} for {key}")]
    LookupMiss { table: &'static str, key: String },
    /// A step read state that an earlier step never produced.
    #[error("step {step} needs {missing}, which no earlier step produced")]
    StepOrder {
        step: PipelineStep,
        missing: &'static str,
    },
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl From<BaseError> for ChartError {
    fn from(e: BaseError) -> Self {
        match e {
            BaseError::InvalidInput { field, reason } => Self::InvalidInput { field, reason },
            BaseError::LookupMiss { table, key } => Self::LookupMiss { table, key },
            other => Self::LookupMiss {
                table: "base",
                key: other.to_string(),
            },
        }
    }
}
