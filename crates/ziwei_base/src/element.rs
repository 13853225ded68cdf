//! Five Elements cycles (五行局) and the sexagenary 纳音 table.
//!
//! The cycle is read from the Life Palace's stem/branch pair. Only pairs of
//! matching parity exist in the 60-pair cycle; the other 60 cells are empty
//! and a lookup there is a table miss.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::BaseError;
use crate::stem::HeavenlyStem;

/// The five element cycle types, named by element and pacing number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FiveElementCycle {
    #[serde(rename = "水二局")]
    Water2,
    #[serde(rename = "木三局")]
    Wood3,
    #[serde(rename = "金四局")]
    Metal4,
    #[serde(rename = "土五局")]
    Earth5,
    #[serde(rename = "火六局")]
    Fire6,
}

/// All 5 cycles in table column order.
pub const ALL_FIVE_ELEMENT_CYCLES: [FiveElementCycle; 5] = [
    FiveElementCycle::Water2,
    FiveElementCycle::Wood3,
    FiveElementCycle::Metal4,
    FiveElementCycle::Earth5,
    FiveElementCycle::Fire6,
];

/// Starting age of the first Major Limit, indexed by cycle.
pub const MAJOR_LIMIT_STARTING_AGE: [u16; 5] = [2, 3, 4, 5, 6];

impl FiveElementCycle {
    /// Chinese name (e.g. "火六局").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// 0-based column index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pacing number (2..=6), also the divisor in the 紫微 placement rule.
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Age at which the first Major Limit begins.
    pub const fn major_limit_starting_age(self) -> u16 {
        MAJOR_LIMIT_STARTING_AGE[self.index()]
    }
}

impl std::fmt::Display for FiveElementCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

use FiveElementCycle as E;

/// `FIVE_ELEMENTS_TABLE[stem][branch]`, `None` where the pair is not part
/// of the sexagenary cycle.
#[rustfmt::skip]
pub const FIVE_ELEMENTS_TABLE: [[Option<FiveElementCycle>; 12]; 10] = [
    // 甲
    [Some(E::Metal4), None, Some(E::Water2), None, Some(E::Fire6), None, Some(E::Metal4), None, Some(E::Water2), None, Some(E::Fire6), None],
    // 乙
    [None, Some(E::Metal4), None, Some(E::Water2), None, Some(E::Fire6), None, Some(E::Metal4), None, Some(E::Water2), None, Some(E::Fire6)],
    // 丙
    [Some(E::Water2), None, Some(E::Fire6), None, Some(E::Earth5), None, Some(E::Water2), None, Some(E::Fire6), None, Some(E::Earth5), None],
    // 丁
    [None, Some(E::Water2), None, Some(E::Fire6), None, Some(E::Earth5), None, Some(E::Water2), None, Some(E::Fire6), None, Some(E::Earth5)],
    // 戊
    [Some(E::Fire6), None, Some(E::Earth5), None, Some(E::Wood3), None, Some(E::Fire6), None, Some(E::Earth5), None, Some(E::Wood3), None],
    // 己
    [None, Some(E::Fire6), None, Some(E::Earth5), None, Some(E::Wood3), None, Some(E::Fire6), None, Some(E::Earth5), None, Some(E::Wood3)],
    // 庚
    [Some(E::Earth5), None, Some(E::Wood3), None, Some(E::Metal4), None, Some(E::Earth5), None, Some(E::Wood3), None, Some(E::Metal4), None],
    // 辛
    [None, Some(E::Earth5), None, Some(E::Wood3), None, Some(E::Metal4), None, Some(E::Earth5), None, Some(E::Wood3), None, Some(E::Metal4)],
    // 壬
    [Some(E::Wood3), None, Some(E::Metal4), None, Some(E::Water2), None, Some(E::Wood3), None, Some(E::Metal4), None, Some(E::Water2), None],
    // 癸
    [None, Some(E::Wood3), None, Some(E::Metal4), None, Some(E::Water2), None, Some(E::Wood3), None, Some(E::Metal4), None, Some(E::Water2)],
];

/// Five Elements cycle for a stem/branch pair.
pub fn five_element_cycle(
    stem: HeavenlyStem,
    branch: EarthlyBranch,
) -> Result<FiveElementCycle, BaseError> {
    FIVE_ELEMENTS_TABLE[stem.index() as usize][branch.index() as usize]
        .ok_or_else(|| BaseError::miss("five elements", format!("{stem}{branch}")))
}
