//! Chart output types.
//!
//! Everything here is plain serializable data produced by one
//! [`calculate`](crate::calculate) call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ziwei_base::{
    ALL_STAR_CATEGORIES, Brightness, EarthlyBranch, FiveElementCycle, HeavenlyStem, LunarDay,
    PALACE_COUNT, PalaceName, Polarity, StarCategory, StarKind, Transformation,
};

use crate::input::ChartInput;
use crate::summary::ChartSummary;
use crate::trace::TraceEntry;

/// A star placed in a palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub kind: StarKind,
    pub brightness: Brightness,
    pub palace: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transformations: Vec<Transformation>,
}

impl Star {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_bright(&self) -> bool {
        self.brightness == Brightness::Bright
    }
}

/// Stars of one palace, filed by [`StarCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBuckets {
    pub main: Vec<Star>,
    pub minor: Vec<Star>,
    pub auxiliary: Vec<Star>,
    pub year: Vec<Star>,
    pub month: Vec<Star>,
    pub day: Vec<Star>,
    pub hour: Vec<Star>,
}

impl StarBuckets {
    pub fn bucket(&self, category: StarCategory) -> &[Star] {
        match category {
            StarCategory::Main => &self.main,
            StarCategory::Minor => &self.minor,
            StarCategory::Auxiliary => &self.auxiliary,
            StarCategory::Year => &self.year,
            StarCategory::Month => &self.month,
            StarCategory::Day => &self.day,
            StarCategory::Hour => &self.hour,
        }
    }

    pub(crate) fn bucket_mut(&mut self, category: StarCategory) -> &mut Vec<Star> {
        match category {
            StarCategory::Main => &mut self.main,
            StarCategory::Minor => &mut self.minor,
            StarCategory::Auxiliary => &mut self.auxiliary,
            StarCategory::Year => &mut self.year,
            StarCategory::Month => &mut self.month,
            StarCategory::Day => &mut self.day,
            StarCategory::Hour => &mut self.hour,
        }
    }

    /// All stars, bucket by bucket in [`ALL_STAR_CATEGORIES`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        ALL_STAR_CATEGORIES
            .into_iter()
            .flat_map(move |c| self.bucket(c).iter())
    }

    pub fn find(&self, kind: StarKind) -> Option<&Star> {
        self.bucket(kind.category()).iter().find(|s| s.kind == kind)
    }

    pub(crate) fn find_mut(&mut self, kind: StarKind) -> Option<&mut Star> {
        self.bucket_mut(kind.category())
            .iter_mut()
            .find(|s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        ALL_STAR_CATEGORIES
            .into_iter()
            .map(|c| self.bucket(c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inclusive age band of a Major Limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub start: u16,
    pub end: u16,
}

impl AgeRange {
    pub fn contains(&self, age: i32) -> bool {
        (i32::from(self.start)..=i32::from(self.end)).contains(&age)
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Calendar year a palace represents in the Annual Flow cycle.
///
/// `branch` is the flow-cycle branch `(year - 1) mod 12`; `year_branch`
/// is the sexagenary branch of the calendar year itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualFlow {
    pub year: i32,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub year_branch: EarthlyBranch,
}

/// One of the 12 fixed palace slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palace {
    pub number: u8,
    pub branch: EarthlyBranch,
    pub stem: HeavenlyStem,
    pub name: PalaceName,
    pub stars: StarBuckets,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_limit: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_flow: Option<AnnualFlow>,
}

impl Palace {
    pub fn main_stars(&self) -> &[Star] {
        &self.stars.main
    }

    pub fn is_life(&self) -> bool {
        self.name == PalaceName::Life
    }
}

/// A year-stem transformation and where its star landed.
///
/// `palace` is `None` when the target star is not on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationAssignment {
    pub transformation: Transformation,
    pub star: StarKind,
    pub palace: Option<u8>,
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub input: ChartInput,
    /// The "today" the chart was computed against.
    pub reference_date: NaiveDate,
    pub year_stem: HeavenlyStem,
    pub year_branch: EarthlyBranch,
    pub polarity: Polarity,
    pub hour_branch: EarthlyBranch,
    pub lunar_day: LunarDay,
    pub five_element: FiveElementCycle,
    pub life_palace: u8,
    pub ziwei_palace: u8,
    pub palaces: [Palace; PALACE_COUNT as usize],
    pub transformations: [TransformationAssignment; 4],
    pub summary: ChartSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TraceEntry>,
}

impl ChartData {
    /// Palace by number 1-12.
    pub fn palace(&self, number: u8) -> Option<&Palace> {
        number
            .checked_sub(1)
            .and_then(|i| self.palaces.get(usize::from(i)))
    }

    pub fn life_palace(&self) -> Option<&Palace> {
        self.palace(self.life_palace)
    }

    pub fn palace_by_name(&self, name: PalaceName) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.name == name)
    }

    pub fn palace_by_branch(&self, branch: EarthlyBranch) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.branch == branch)
    }

    /// First star of `kind` and its palace number.
    pub fn find_star(&self, kind: StarKind) -> Option<(&Star, u8)> {
        find_star(&self.palaces, kind)
    }

    /// Transformations whose target star was not placed.
    pub fn unplaced_transformations(&self) -> impl Iterator<Item = &TransformationAssignment> {
        self.transformations.iter().filter(|t| t.palace.is_none())
    }
}

/// First match scanning palaces in order, every bucket of each.
pub fn find_star(palaces: &[Palace], kind: StarKind) -> Option<(&Star, u8)> {
    palaces
        .iter()
        .find_map(|p| p.stars.find(kind).map(|s| (s, p.number)))
}

/// [`find_star`] by Chinese name; unknown names are not found.
pub fn find_star_by_name<'a>(palaces: &'a [Palace], name: &str) -> Option<(&'a Star, u8)> {
    let kind = name.parse::<StarKind>().ok()?;
    find_star(palaces, kind)
}
