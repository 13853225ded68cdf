//! Palace ring geometry and the naming rotation.
//!
//! Palaces are numbered 1..=12 around a fixed ring. Each number carries a
//! fixed Earthly Branch: palace 1 is 巳, palace 10 is 寅, palace 8 is 子.
//! Increasing numbers run clockwise.
//!
//! Names rotate: the anchor palace is 命宫 and the remaining canonical names
//! follow counterclockwise (decreasing number, 1 wraps to 12). The same rule
//! names the natal chart and every temporal lens.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::util::modulo;

/// Number of palaces on the ring.
pub const PALACE_COUNT: u8 = 12;

/// Branch carried by palace 1.
const PALACE_ONE_BRANCH: EarthlyBranch = EarthlyBranch::Si;

/// The 12 canonical palace names in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PalaceName {
    #[serde(rename = "命宫")]
    Life,
    #[serde(rename = "兄弟宫")]
    Siblings,
    #[serde(rename = "夫妻宫")]
    Spouse,
    #[serde(rename = "子女宫")]
    Children,
    #[serde(rename = "财帛宫")]
    Wealth,
    #[serde(rename = "疾厄宫")]
    Health,
    #[serde(rename = "迁移宫")]
    Travel,
    #[serde(rename = "交友宫")]
    Friends,
    #[serde(rename = "官禄宫")]
    Career,
    #[serde(rename = "田宅宫")]
    Property,
    #[serde(rename = "福德宫")]
    Fortune,
    #[serde(rename = "父母宫")]
    Parents,
}

/// Canonical names in rotation order (index 0 = 命宫).
pub const CANONICAL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟宫",
            Self::Spouse => "夫妻宫",
            Self::Children => "子女宫",
            Self::Wealth => "财帛宫",
            Self::Health => "疾厄宫",
            Self::Travel => "迁移宫",
            Self::Friends => "交友宫",
            Self::Career => "官禄宫",
            Self::Property => "田宅宫",
            Self::Fortune => "福德宫",
            Self::Parents => "父母宫",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Fortune => "Fortune",
            Self::Parents => "Parents",
        }
    }

    /// 0-based rotation index (命宫=0 .. 父母宫=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parse a Chinese palace name.
    pub fn from_name(s: &str) -> Option<Self> {
        CANONICAL_PALACE_NAMES.iter().copied().find(|n| n.name() == s)
    }
}

impl std::fmt::Display for PalaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// True for palace numbers 1..=12.
pub const fn is_valid_palace(palace: u8) -> bool {
    palace >= 1 && palace <= PALACE_COUNT
}

/// Palace reached by moving `steps` positions from `palace`
/// (positive = clockwise / increasing number).
pub const fn palace_offset(palace: u8, steps: i32) -> u8 {
    (modulo(palace as i32 - 1 + steps, PALACE_COUNT as i32) + 1) as u8
}

/// Fixed branch of a palace number. Numbers wrap modulo 12.
pub const fn palace_branch(palace: u8) -> EarthlyBranch {
    PALACE_ONE_BRANCH.offset(palace as i32 - 1)
}

/// Palace number carrying `branch`.
pub const fn palace_of_branch(branch: EarthlyBranch) -> u8 {
    palace_offset(1, branch.index() as i32 - PALACE_ONE_BRANCH.index() as i32)
}

/// Name carried by `target` when `anchor` is the 命宫.
///
/// `None` if either palace number is outside 1..=12.
pub const fn rotated_name(anchor: u8, target: u8) -> Option<PalaceName> {
    if !is_valid_palace(anchor) || !is_valid_palace(target) {
        return None;
    }
    let idx = modulo(anchor as i32 - target as i32, PALACE_COUNT as i32);
    Some(CANONICAL_PALACE_NAMES[idx as usize])
}

/// Inverse of [`rotated_name`]: the palace carrying `name` when `anchor` is
/// the 命宫.
pub const fn palace_with_name(anchor: u8, name: PalaceName) -> Option<u8> {
    if !is_valid_palace(anchor) {
        return None;
    }
    Some(palace_offset(anchor, -(name.index() as i32)))
}
