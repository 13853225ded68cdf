//! Structured pipeline trace, disabled by default.

use serde::{Deserialize, Serialize};

/// The 12 ordered pipeline steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    YearPillar,
    Polarity,
    PalaceStems,
    LifePalace,
    PalaceNames,
    FiveElements,
    ZiWei,
    MajorStars,
    MinorStars,
    Transformations,
    MajorLimits,
    AnnualFlow,
}

/// All steps in execution order.
pub const ALL_PIPELINE_STEPS: [PipelineStep; 12] = [
    PipelineStep::YearPillar,
    PipelineStep::Polarity,
    PipelineStep::PalaceStems,
    PipelineStep::LifePalace,
    PipelineStep::PalaceNames,
    PipelineStep::FiveElements,
    PipelineStep::ZiWei,
    PipelineStep::MajorStars,
    PipelineStep::MinorStars,
    PipelineStep::Transformations,
    PipelineStep::MajorLimits,
    PipelineStep::AnnualFlow,
];

impl PipelineStep {
    /// 1-based position in the pipeline.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::YearPillar => "year pillar",
            Self::Polarity => "polarity",
            Self::PalaceStems => "palace stems",
            Self::LifePalace => "life palace",
            Self::PalaceNames => "palace names",
            Self::FiveElements => "five elements",
            Self::ZiWei => "ziwei",
            Self::MajorStars => "major stars",
            Self::MinorStars => "minor stars",
            Self::Transformations => "transformations",
            Self::MajorLimits => "major limits",
            Self::AnnualFlow => "annual flow",
        }
    }
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

/// One trace line emitted by a pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub step: PipelineStep,
    pub message: String,
}

/// Per-call trace buffer. Messages are only formatted when enabled.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    enabled: bool,
    entries: Vec<TraceEntry>,
}

impl TraceLog {
    /// Empty log; a disabled log drops every record.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }

    /// Whether records are kept.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a message for `step`; `message` is not called when disabled.
    pub fn record(&mut self, step: PipelineStep, message: impl FnOnce() -> String) {
        if self.enabled {
            self.entries.push(TraceEntry {
                step,
                message: message(),
            });
        }
    }

    /// Recorded entries in pipeline order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Consume the log into its entries.
    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_sequential() {
        for (i, s) in ALL_PIPELINE_STEPS.iter().enumerate() {
            assert_eq!(s.number() as usize, i + 1);
        }
    }

    #[test]
    fn disabled_log_skips_formatting() {
        let mut log = TraceLog::new(false);
        log.record(PipelineStep::YearPillar, || panic!("formatted while disabled"));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn enabled_log_keeps_order() {
        let mut log = TraceLog::new(true);
        log.record(PipelineStep::YearPillar, || "a".into());
        log.record(PipelineStep::Polarity, || "b".into());
        let steps: Vec<_> = log.entries().iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![PipelineStep::YearPillar, PipelineStep::Polarity]);
    }

    #[test]
    fn display_includes_number() {
        assert_eq!(PipelineStep::AnnualFlow.to_string(), "12 (annual flow)");
    }
}
