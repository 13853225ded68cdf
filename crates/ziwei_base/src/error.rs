//! Error types for base table lookups and calendar conversions.

use thiserror::Error;

/// Errors from ZWDS base lookups.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// A caller-supplied value lies outside the domain of the conversion.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },
    /// A well-formed key has no entry in a lookup table.
    #[error("no entry in {table} for {key}")]
    LookupMiss {
        /// Table that was consulted.
        table: &'static str,
        /// Display form of the key.
        key: String,
    },
}

impl BaseError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn miss(table: &'static str, key: impl Into<String>) -> Self {
        Self::LookupMiss {
            table,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let e = BaseError::invalid("hour", "24 is outside 0..24");
        assert_eq!(e.to_string(), "invalid hour: 24 is outside 0..24");
    }

    #[test]
    fn display_lookup_miss() {
        let e = BaseError::miss("five elements", "甲丑");
        assert_eq!(e.to_string(), "no entry in five elements for 甲丑");
    }
}
