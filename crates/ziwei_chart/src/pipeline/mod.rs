//! Natal chart calculation.
//!
//! [`calculate`] validates the input, then runs the 12 steps in
//! [`STEPS`] order over a builder owned by the call. Any step error aborts
//! the calculation; no partial chart is ever returned.

mod builder;
mod steps;

use chrono::NaiveDate;
use ziwei_base::{ApproximateLunarCalendar, LunarCalendar};

use crate::chart::ChartData;
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::input::ChartInput;
use crate::trace::PipelineStep;

use builder::ChartBuilder;

type StepFn = for<'a> fn(ChartBuilder<'a>) -> Result<ChartBuilder<'a>, ChartError>;

/// Steps in execution order.
const STEPS: [(PipelineStep, StepFn); 12] = [
    (PipelineStep::YearPillar, steps::year_pillar),
    (PipelineStep::Polarity, steps::polarity),
    (PipelineStep::PalaceStems, steps::palace_stems),
    (PipelineStep::LifePalace, steps::life_palace),
    (PipelineStep::PalaceNames, steps::palace_names),
    (PipelineStep::FiveElements, steps::five_elements),
    (PipelineStep::ZiWei, steps::ziwei),
    (PipelineStep::MajorStars, steps::major_stars),
    (PipelineStep::MinorStars, steps::minor_stars),
    (PipelineStep::Transformations, steps::transformations),
    (PipelineStep::MajorLimits, steps::major_limits),
    (PipelineStep::AnnualFlow, steps::annual_flow),
];

/// Compute a natal chart with default settings and the approximate lunar
/// calendar. `today` places the Annual Flow window.
pub fn calculate(input: &ChartInput, today: NaiveDate) -> Result<ChartData, ChartError> {
    calculate_with(
        input,
        today,
        &ChartConfig::default(),
        &ApproximateLunarCalendar,
    )
}

/// Compute a natal chart with explicit settings and lunar calendar.
pub fn calculate_with(
    input: &ChartInput,
    today: NaiveDate,
    config: &ChartConfig,
    calendar: &dyn LunarCalendar,
) -> Result<ChartData, ChartError> {
    input.validate(config)?;
    let mut builder = ChartBuilder::new(input, today, config, calendar);
    for (_, step) in STEPS {
        builder = step(builder)?;
    }
    builder.finish()
}
