//! Palace rotation resolver.
//!
//! Every temporal lens picks an anchor palace, then the aspect is found by
//! rotating the canonical names so the anchor reads as 命宫. A lens whose
//! anchor cannot be located resolves to `None`.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ziwei_base::{PalaceName, is_valid_palace, palace_offset, palace_with_name};

use crate::chart::{ChartData, Palace};
use crate::error::ChartError;

/// A life area, one per canonical palace name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    #[serde(rename = "self")]
    Personality,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// Every aspect, in canonical palace-name order starting from Life.
pub const ALL_ASPECTS: [Aspect; 12] = [
    Aspect::Personality,
    Aspect::Siblings,
    Aspect::Spouse,
    Aspect::Children,
    Aspect::Wealth,
    Aspect::Health,
    Aspect::Travel,
    Aspect::Friends,
    Aspect::Career,
    Aspect::Property,
    Aspect::Fortune,
    Aspect::Parents,
];

impl Aspect {
    pub const fn palace_name(self) -> PalaceName {
        match self {
            Self::Personality => PalaceName::Life,
            Self::Siblings => PalaceName::Siblings,
            Self::Spouse => PalaceName::Spouse,
            Self::Children => PalaceName::Children,
            Self::Wealth => PalaceName::Wealth,
            Self::Health => PalaceName::Health,
            Self::Travel => PalaceName::Travel,
            Self::Friends => PalaceName::Friends,
            Self::Career => PalaceName::Career,
            Self::Property => PalaceName::Property,
            Self::Fortune => PalaceName::Fortune,
            Self::Parents => PalaceName::Parents,
        }
    }

    pub const fn from_palace_name(name: PalaceName) -> Self {
        ALL_ASPECTS[name.index() as usize]
    }

    /// Lowercase English key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Personality => "self",
            Self::Siblings => "siblings",
            Self::Spouse => "spouse",
            Self::Children => "children",
            Self::Wealth => "wealth",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Friends => "friends",
            Self::Career => "career",
            Self::Property => "property",
            Self::Fortune => "fortune",
            Self::Parents => "parents",
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Aspect {
    type Err = ChartError;

    /// English key (plus a few aliases) or Chinese palace name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let aspect = match key.as_str() {
            "self" | "life" | "personality" => Self::Personality,
            "siblings" => Self::Siblings,
            "spouse" | "marriage" => Self::Spouse,
            "children" => Self::Children,
            "wealth" | "money" => Self::Wealth,
            "health" => Self::Health,
            "travel" => Self::Travel,
            "friends" => Self::Friends,
            "career" => Self::Career,
            "property" | "home" => Self::Property,
            "fortune" => Self::Fortune,
            "parents" => Self::Parents,
            other => PalaceName::from_name(other)
                .map(Self::from_palace_name)
                .ok_or_else(|| ChartError::invalid("aspect", format!("unknown aspect '{s}'")))?,
        };
        Ok(aspect)
    }
}

/// Which anchor a question is read against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "lens", rename_all = "lowercase")]
pub enum Timeframe {
    Natal,
    Decade { today: NaiveDate },
    Annual { year: i32 },
    Monthly { year: i32, month: u8 },
}

/// Palace that reads as `aspect` when `anchor` is treated as 命宫.
pub fn resolve_aspect(anchor: u8, aspect: Aspect) -> Option<u8> {
    palace_with_name(anchor, aspect.palace_name())
}

/// The Life Palace, or `None` if the chart carries an out-of-range number.
pub fn natal_anchor(chart: &ChartData) -> Option<u8> {
    is_valid_palace(chart.life_palace).then_some(chart.life_palace)
}

/// Whole-year age; no nominal +1.
pub fn age_on(chart: &ChartData, today: NaiveDate) -> i32 {
    today.year() - chart.input.year
}

/// Palace whose Major Limit contains the age on `today`, else the nearest
/// range that starts later.
pub fn decade_anchor(chart: &ChartData, today: NaiveDate) -> Option<u8> {
    let age = age_on(chart, today);
    let mut nearest: Option<(u16, u8)> = None;
    for palace in &chart.palaces {
        let Some(range) = palace.major_limit else {
            continue;
        };
        if range.contains(age) {
            return Some(palace.number);
        }
        if i32::from(range.start) > age && nearest.is_none_or(|(start, _)| range.start < start) {
            nearest = Some((range.start, palace.number));
        }
    }
    nearest.map(|(_, number)| number)
}

/// Palace of the decade running on `today`; see [`decade_anchor`].
pub fn current_major_limit(chart: &ChartData, today: NaiveDate) -> Option<&Palace> {
    decade_anchor(chart, today).and_then(|n| chart.palace(n))
}

/// Palace whose Annual Flow year is exactly `year`.
pub fn annual_anchor(chart: &ChartData, year: i32) -> Option<u8> {
    chart
        .palaces
        .iter()
        .find(|p| p.annual_flow.is_some_and(|f| f.year == year))
        .map(|p| p.number)
}

/// Palace for each lunar month of `year`, January first.
///
/// January sits where the year palace's rotation puts palace 10's natal
/// name; later months follow clockwise.
pub fn monthly_palaces(chart: &ChartData, year: i32) -> Option<[u8; 12]> {
    let year_palace = annual_anchor(chart, year)?;
    let k = chart.palace(10)?.name.index();
    let january = palace_offset(year_palace, -i32::from(k));
    Some(std::array::from_fn(|i| palace_offset(january, i as i32)))
}

/// Palace for lunar `month` (1-12) of `year`. `None` for a bad month or a
/// year outside the chart's Annual Flow window.
pub fn monthly_anchor(chart: &ChartData, year: i32, month: u8) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    monthly_palaces(chart, year).map(|months| months[usize::from(month - 1)])
}

/// Anchor palace of `timeframe`: the palace whose rotation names every
/// other palace under that lens.
pub fn anchor_for(chart: &ChartData, timeframe: Timeframe) -> Option<u8> {
    match timeframe {
        Timeframe::Natal => natal_anchor(chart),
        Timeframe::Decade { today } => decade_anchor(chart, today),
        Timeframe::Annual { year } => annual_anchor(chart, year),
        Timeframe::Monthly { year, month } => monthly_anchor(chart, year, month),
    }
}

/// Palace answering `aspect` under `timeframe`.
pub fn resolve_palace_for_aspect(
    aspect: Aspect,
    chart: &ChartData,
    timeframe: Timeframe,
) -> Option<u8> {
    anchor_for(chart, timeframe).and_then(|anchor| resolve_aspect(anchor, aspect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::rotated_name;

    #[test]
    fn aspect_names_round_trip() {
        for a in ALL_ASPECTS {
            assert_eq!(Aspect::from_palace_name(a.palace_name()), a);
            assert_eq!(a.key().parse::<Aspect>().unwrap(), a);
            assert_eq!(a.palace_name().name().parse::<Aspect>().unwrap(), a);
        }
    }

    #[test]
    fn aspect_aliases() {
        assert_eq!("Marriage".parse::<Aspect>().unwrap(), Aspect::Spouse);
        assert_eq!(" money ".parse::<Aspect>().unwrap(), Aspect::Wealth);
        assert!("weather".parse::<Aspect>().is_err());
    }

    #[test]
    fn resolve_inverts_rotation() {
        for anchor in 1..=12u8 {
            for a in ALL_ASPECTS {
                let p = resolve_aspect(anchor, a).unwrap();
                assert_eq!(rotated_name(anchor, p), Some(a.palace_name()));
            }
            assert_eq!(resolve_aspect(anchor, Aspect::Personality), Some(anchor));
        }
    }

    #[test]
    fn invalid_anchor_is_none() {
        assert_eq!(resolve_aspect(0, Aspect::Career), None);
        assert_eq!(resolve_aspect(13, Aspect::Career), None);
    }
}
