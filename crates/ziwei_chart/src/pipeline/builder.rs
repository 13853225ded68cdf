//! Per-call accumulator threaded through the pipeline steps.

use chrono::NaiveDate;
use ziwei_base::{
    EarthlyBranch, FiveElementCycle, HeavenlyStem, LunarCalendar, LunarDay, PalaceName, Polarity,
    StarKind, palace_branch,
};

use crate::chart::{
    AgeRange, AnnualFlow, ChartData, Palace, Star, StarBuckets, TransformationAssignment,
};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::input::ChartInput;
use crate::summary::ChartSummary;
use crate::trace::{PipelineStep, TraceLog};

/// A palace while steps are still filling it in.
#[derive(Debug, Clone)]
pub(crate) struct PalaceDraft {
    pub number: u8,
    pub branch: EarthlyBranch,
    pub stem: Option<HeavenlyStem>,
    pub name: Option<PalaceName>,
    pub stars: StarBuckets,
    pub major_limit: Option<AgeRange>,
    pub annual_flow: Option<AnnualFlow>,
}

impl PalaceDraft {
    fn new(number: u8) -> Self {
        Self {
            number,
            branch: palace_branch(number),
            stem: None,
            name: None,
            stars: StarBuckets::default(),
            major_limit: None,
            annual_flow: None,
        }
    }

    fn finish(self) -> Result<Palace, ChartError> {
        Ok(Palace {
            number: self.number,
            branch: self.branch,
            stem: self.stem.ok_or(ChartError::StepOrder {
                step: PipelineStep::PalaceStems,
                missing: "palace stem",
            })?,
            name: self.name.ok_or(ChartError::StepOrder {
                step: PipelineStep::PalaceNames,
                missing: "palace name",
            })?,
            stars: self.stars,
            major_limit: self.major_limit,
            annual_flow: self.annual_flow,
        })
    }
}

pub(crate) struct ChartBuilder<'a> {
    pub input: &'a ChartInput,
    pub today: NaiveDate,
    pub calendar: &'a dyn LunarCalendar,
    pub year_pillar: Option<(HeavenlyStem, EarthlyBranch)>,
    pub polarity: Option<Polarity>,
    pub hour_branch: Option<EarthlyBranch>,
    pub life_palace: Option<u8>,
    pub five_element: Option<FiveElementCycle>,
    pub lunar_day: Option<LunarDay>,
    pub ziwei_palace: Option<u8>,
    pub palaces: [PalaceDraft; 12],
    pub transformations: Vec<TransformationAssignment>,
    pub trace: TraceLog,
}

/// Unwrap a value an earlier step should have produced.
pub(crate) fn need<T>(
    value: Option<T>,
    step: PipelineStep,
    missing: &'static str,
) -> Result<T, ChartError> {
    value.ok_or(ChartError::StepOrder { step, missing })
}

impl<'a> ChartBuilder<'a> {
    pub fn new(
        input: &'a ChartInput,
        today: NaiveDate,
        config: &ChartConfig,
        calendar: &'a dyn LunarCalendar,
    ) -> Self {
        Self {
            input,
            today,
            calendar,
            year_pillar: None,
            polarity: None,
            hour_branch: None,
            life_palace: None,
            five_element: None,
            lunar_day: None,
            ziwei_palace: None,
            palaces: std::array::from_fn(|i| PalaceDraft::new(i as u8 + 1)),
            transformations: Vec::with_capacity(4),
            trace: TraceLog::new(config.trace),
        }
    }

    /// Draft for palace `number`, which must come from the palace ring helpers.
    pub fn draft(&self, number: u8) -> &PalaceDraft {
        &self.palaces[usize::from(number - 1)]
    }

    pub fn draft_mut(&mut self, number: u8) -> &mut PalaceDraft {
        &mut self.palaces[usize::from(number - 1)]
    }

    /// File a star into its category bucket in `palace`.
    pub fn place(&mut self, kind: StarKind, palace: u8) {
        let draft = self.draft_mut(palace);
        let star = Star {
            kind,
            brightness: kind.brightness_in(draft.branch),
            palace,
            transformations: Vec::new(),
        };
        draft.stars.bucket_mut(kind.category()).push(star);
    }

    pub fn finish(self) -> Result<ChartData, ChartError> {
        const DONE: PipelineStep = PipelineStep::AnnualFlow;
        let (year_stem, year_branch) = need(self.year_pillar, DONE, "year pillar")?;
        let polarity = need(self.polarity, DONE, "polarity")?;
        let hour_branch = need(self.hour_branch, DONE, "hour branch")?;
        let life_palace = need(self.life_palace, DONE, "life palace")?;
        let five_element = need(self.five_element, DONE, "five element cycle")?;
        let lunar_day = need(self.lunar_day, DONE, "lunar day")?;
        let ziwei_palace = need(self.ziwei_palace, DONE, "ziwei palace")?;
        let transformations: [TransformationAssignment; 4] = self
            .transformations
            .try_into()
            .map_err(|_| ChartError::StepOrder {
                step: PipelineStep::Transformations,
                missing: "four transformation assignments",
            })?;

        let mut palaces = Vec::with_capacity(12);
        for draft in self.palaces {
            palaces.push(draft.finish()?);
        }
        let palaces: [Palace; 12] = palaces.try_into().map_err(|_| ChartError::StepOrder {
            step: DONE,
            missing: "12 palaces",
        })?;
        let summary = ChartSummary::from_palaces(&palaces, life_palace);

        Ok(ChartData {
            input: self.input.clone(),
            reference_date: self.today,
            year_stem,
            year_branch,
            polarity,
            hour_branch,
            lunar_day,
            five_element,
            life_palace,
            ziwei_palace,
            palaces,
            transformations,
            summary,
            trace: self.trace.into_entries(),
        })
    }
}
