//! Zi Wei Dou Shu natal chart calculation.
//!
//! [`calculate`] turns a [`ChartInput`] and an injected "today" into a
//! [`ChartData`]. The resolver functions then answer "which palace speaks
//! to this life area" under natal, decade, annual or monthly anchors.
//!
//! All computation is synchronous and pure. Nothing is logged; enable
//! [`ChartConfig::trace`] to get per-step [`TraceEntry`] records instead.

pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod resolver;
pub mod summary;
pub mod trace;

pub use chart::{
    AgeRange, AnnualFlow, ChartData, Palace, Star, StarBuckets, TransformationAssignment,
    find_star, find_star_by_name,
};
pub use config::ChartConfig;
pub use error::ChartError;
pub use input::{ChartInput, Gender};
pub use pipeline::{calculate, calculate_with};
pub use resolver::{
    ALL_ASPECTS, Aspect, Timeframe, age_on, anchor_for, annual_anchor, current_major_limit,
    decade_anchor, monthly_anchor, monthly_palaces, natal_anchor, resolve_aspect,
    resolve_palace_for_aspect,
};
pub use summary::{ChartSummary, MarkedStar};
pub use trace::{ALL_PIPELINE_STEPS, PipelineStep, TraceEntry, TraceLog};
