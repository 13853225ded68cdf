//! Life Palace and palace-stem tables.

use crate::branch::EarthlyBranch;
use crate::error::BaseError;
use crate::stem::HeavenlyStem;

use EarthlyBranch as B;

/// `LIFE_PALACE_TABLE[month - 1][hour_branch]` → branch of the Life Palace.
///
/// Count from 寅 forward by month, then backward by hour.
#[rustfmt::skip]
pub const LIFE_PALACE_TABLE: [[EarthlyBranch; 12]; 12] = [
    // month 1
    [B::Yin, B::Chou, B::Zi, B::Hai, B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao],
    // month 2
    [B::Mao, B::Yin, B::Chou, B::Zi, B::Hai, B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen],
    // month 3
    [B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai, B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si],
    // month 4
    [B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai, B::Xu, B::You, B::Shen, B::Wei, B::Wu],
    // month 5
    [B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai, B::Xu, B::You, B::Shen, B::Wei],
    // month 6
    [B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai, B::Xu, B::You, B::Shen],
    // month 7
    [B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai, B::Xu, B::You],
    // month 8
    [B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai, B::Xu],
    // month 9
    [B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai],
    // month 10
    [B::Hai, B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi],
    // month 11
    [B::Zi, B::Hai, B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou],
    // month 12
    [B::Chou, B::Zi, B::Hai, B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin],
];

/// Stem of palace 10 (寅) keyed by `year_stem mod 5` (五虎遁).
///
/// 甲己 → 丙, 乙庚 → 戊, 丙辛 → 庚, 丁壬 → 壬, 戊癸 → 甲.
pub const PALACE_TEN_START_STEM: [HeavenlyStem; 5] = [
    HeavenlyStem::Bing,
    HeavenlyStem::Wu,
    HeavenlyStem::Geng,
    HeavenlyStem::Ren,
    HeavenlyStem::Jia,
];

/// Palace walk order for stem assignment, anchored at palace 10.
pub const PALACE_STEM_ORDER: [u8; 12] = [10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Branch of the Life Palace for a birth month (1..=12) and hour branch.
pub fn life_palace_branch(month: u8, hour: EarthlyBranch) -> Result<EarthlyBranch, BaseError> {
    let row = month
        .checked_sub(1)
        .and_then(|m| LIFE_PALACE_TABLE.get(m as usize))
        .ok_or_else(|| BaseError::miss("life palace", format!("month {month}")))?;
    Ok(row[hour.index() as usize])
}

/// Stem assigned to palace 10 for a year stem.
pub const fn palace_ten_stem(year_stem: HeavenlyStem) -> HeavenlyStem {
    PALACE_TEN_START_STEM[(year_stem.index() % 5) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_month_zi_hour_is_yin() {
        assert_eq!(life_palace_branch(1, B::Zi).unwrap(), B::Yin);
    }

    #[test]
    fn month_forward_hour_backward() {
        assert_eq!(life_palace_branch(6, B::Wei).unwrap(), B::Zi);
        assert_eq!(life_palace_branch(12, B::Hai).unwrap(), B::Yin);
        assert_eq!(life_palace_branch(2, B::Zi).unwrap(), B::Mao);
    }

    #[test]
    fn month_out_of_domain() {
        assert!(life_palace_branch(0, B::Zi).is_err());
        assert!(life_palace_branch(13, B::Zi).is_err());
    }

    #[test]
    fn five_tigers() {
        use HeavenlyStem as S;
        assert_eq!(palace_ten_stem(S::Jia), S::Bing);
        assert_eq!(palace_ten_stem(S::Ji), S::Bing);
        assert_eq!(palace_ten_stem(S::Geng), S::Wu);
        assert_eq!(palace_ten_stem(S::Gui), S::Jia);
    }

    #[test]
    fn stem_order_covers_every_palace() {
        let mut order = PALACE_STEM_ORDER.to_vec();
        order.sort();
        assert_eq!(order, (1..=12).collect::<Vec<u8>>());
    }
}
