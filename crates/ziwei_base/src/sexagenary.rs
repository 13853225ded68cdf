//! Year pillars in the 60-year stem/branch cycle.
//!
//! 1924 is 甲子. The Annual Flow cycle is anchored at 2013, which sits in
//! palace 1.

use crate::branch::EarthlyBranch;
use crate::stem::{HeavenlyStem, Polarity};
use crate::util::modulo;

/// Calendar year bound to palace 1 in the Annual Flow cycle.
pub const ANNUAL_FLOW_EPOCH_YEAR: i32 = 2013;

/// Stem and branch of a calendar year.
///
/// `offset = year - 1900 - 23` indexes 1-based stem/branch lists, so one is
/// subtracted before indexing.
pub const fn year_pillar(year: i32) -> (HeavenlyStem, EarthlyBranch) {
    let offset = year - 1900 - 23;
    let stem = modulo(offset - 1, 10) as u8;
    let branch = modulo(offset - 1, 12) as u8;
    (HeavenlyStem::from_index(stem), EarthlyBranch::from_index(branch))
}

/// Yin/yang polarity from the parity of `(year - 1900) mod 10`.
pub const fn year_polarity(year: i32) -> Polarity {
    if modulo(year - 1900, 10) % 2 == 0 {
        Polarity::Yang
    } else {
        Polarity::Yin
    }
}

/// Stem/branch shown on an Annual Flow palace: stem `(year - 4) mod 10`,
/// branch `(year - 1) mod 12`. The branch is the flow-cycle offset, not
/// the calendar year branch; [`year_pillar`] gives the latter.
pub const fn flow_year_pillar(year: i32) -> (HeavenlyStem, EarthlyBranch) {
    (
        HeavenlyStem::from_index(modulo(year - 4, 10) as u8),
        EarthlyBranch::from_index(modulo(year - 1, 12) as u8),
    )
}

/// First year of the 12-year Annual Flow window containing `year`.
pub const fn annual_flow_window_start(year: i32) -> i32 {
    ANNUAL_FLOW_EPOCH_YEAR + 12 * (year - ANNUAL_FLOW_EPOCH_YEAR).div_euclid(12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jiazi_years() {
        assert_eq!(year_pillar(1924), (HeavenlyStem::Jia, EarthlyBranch::Zi));
        assert_eq!(year_pillar(1984), (HeavenlyStem::Jia, EarthlyBranch::Zi));
    }

    #[test]
    fn year_before_epoch_wraps() {
        assert_eq!(year_pillar(1923), (HeavenlyStem::Gui, EarthlyBranch::Hai));
        assert_eq!(year_pillar(1900), (HeavenlyStem::Geng, EarthlyBranch::Zi));
    }

    #[test]
    fn known_years() {
        assert_eq!(year_pillar(1990), (HeavenlyStem::Geng, EarthlyBranch::Wu));
        assert_eq!(year_pillar(2013), (HeavenlyStem::Gui, EarthlyBranch::Si));
        assert_eq!(year_pillar(2024), (HeavenlyStem::Jia, EarthlyBranch::Chen));
    }

    #[test]
    fn polarity_matches_stem() {
        for year in 1900..=2100 {
            assert_eq!(year_polarity(year), year_pillar(year).0.polarity(), "{year}");
        }
    }

    #[test]
    fn flow_pillar_uses_calendar_stem_and_offset_branch() {
        for year in 1900..=2100 {
            let (stem, branch) = flow_year_pillar(year);
            assert_eq!(stem, year_pillar(year).0, "{year}");
            assert_eq!(branch.index() as i32, (year - 1).rem_euclid(12), "{year}");
        }
        assert_eq!(flow_year_pillar(2025).1, EarthlyBranch::Shen);
        assert_eq!(flow_year_pillar(2026), (HeavenlyStem::Bing, EarthlyBranch::You));
        assert_eq!(flow_year_pillar(2024).1, EarthlyBranch::Wei);
    }

    #[test]
    fn flow_window() {
        assert_eq!(annual_flow_window_start(2013), 2013);
        assert_eq!(annual_flow_window_start(2024), 2013);
        assert_eq!(annual_flow_window_start(2025), 2025);
        assert_eq!(annual_flow_window_start(2012), 2001);
    }
}
