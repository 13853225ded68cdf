//! Calculation settings.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Settings for a chart calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Record a [`TraceEntry`](crate::TraceEntry) per pipeline step.
    pub trace: bool,
    /// Earliest accepted birth year.
    pub min_year: i32,
    /// Latest accepted birth year.
    pub max_year: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            trace: false,
            min_year: 1900,
            max_year: 2100,
        }
    }
}

impl ChartConfig {
    /// Same settings with tracing switched on.
    pub fn traced(self) -> Self {
        Self {
            trace: true,
            ..self
        }
    }

    /// Reject an inverted year range.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.min_year > self.max_year {
            return Err(ChartError::invalid(
                "config",
                format!("min_year {} > max_year {}", self.min_year, self.max_year),
            ));
        }
        Ok(())
    }

    /// Whether `year` lies in `min_year..=max_year`.
    pub fn accepts_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range() {
        let c = ChartConfig::default();
        assert!(!c.trace);
        assert!(c.accepts_year(1900));
        assert!(c.accepts_year(2100));
        assert!(!c.accepts_year(1899));
        assert!(!c.accepts_year(2101));
    }

    #[test]
    fn inverted_range_rejected() {
        let c = ChartConfig {
            min_year: 2000,
            max_year: 1999,
            ..ChartConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
