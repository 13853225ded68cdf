//! Star placement tables.
//!
//! - [`ZIWEI_POSITION_TABLE`]: lunar day × element cycle → 紫微 branch.
//! - [`MAIN_STAR_TABLE`]: 紫微 branch × target branch → major stars there.
//! - Month/hour tables for 左辅 右弼 文昌 文曲.
//! - Year, month, day and hour tables for the supplementary buckets.

use crate::branch::EarthlyBranch;
use crate::element::FiveElementCycle;
use crate::error::BaseError;
use crate::lunar::LunarDay;
use crate::star::StarKind;
use crate::stem::HeavenlyStem;

use EarthlyBranch as B;
use StarKind as S;

/// `ZIWEI_POSITION_TABLE[lunar_day - 1][cycle]` → branch of 紫微.
///
/// Columns: 水二局 木三局 金四局 土五局 火六局.
#[rustfmt::skip]
pub const ZIWEI_POSITION_TABLE: [[EarthlyBranch; 5]; 30] = [
    [B::Chou, B::Chen, B::Hai, B::Wu, B::You], // 1
    [B::Yin, B::Chou, B::Chen, B::Hai, B::Wu], // 2
    [B::Yin, B::Yin, B::Chou, B::Chen, B::Hai], // 3
    [B::Mao, B::Si, B::Yin, B::Chou, B::Chen], // 4
    [B::Mao, B::Yin, B::Zi, B::Yin, B::Chou], // 5
    [B::Chen, B::Mao, B::Si, B::Wei, B::Yin], // 6
    [B::Chen, B::Wu, B::Yin, B::Zi, B::Xu], // 7
    [B::Si, B::Mao, B::Mao, B::Si, B::Wei], // 8
    [B::Si, B::Chen, B::Chou, B::Yin, B::Zi], // 9
    [B::Wu, B::Wei, B::Wu, B::Mao, B::Si], // 10
    [B::Wu, B::Chen, B::Mao, B::Shen, B::Yin], // 11
    [B::Wei, B::Si, B::Chen, B::Chou, B::Mao], // 12
    [B::Wei, B::Shen, B::Yin, B::Wu, B::Hai], // 13
    [B::Shen, B::Si, B::Wei, B::Mao, B::Shen], // 14
    [B::Shen, B::Wu, B::Chen, B::Chen, B::Chou], // 15
    [B::You, B::You, B::Si, B::You, B::Wu], // 16
    [B::You, B::Wu, B::Mao, B::Yin, B::Mao], // 17
    [B::Xu, B::Wei, B::Shen, B::Wei, B::Chen], // 18
    [B::Xu, B::Xu, B::Si, B::Chen, B::Zi], // 19
    [B::Hai, B::Wei, B::Wu, B::Si, B::You], // 20
    [B::Hai, B::Shen, B::Chen, B::Xu, B::Yin], // 21
    [B::Zi, B::Hai, B::You, B::Mao, B::Wei], // 22
    [B::Zi, B::Shen, B::Wu, B::Shen, B::Chen], // 23
    [B::Chou, B::You, B::Wei, B::Si, B::Si], // 24
    [B::Chou, B::Zi, B::Si, B::Wu, B::Chou], // 25
    [B::Yin, B::You, B::Xu, B::Hai, B::Xu], // 26
    [B::Yin, B::Xu, B::Wei, B::Chen, B::Mao], // 27
    [B::Mao, B::Chou, B::Shen, B::You, B::Shen], // 28
    [B::Mao, B::Xu, B::Wu, B::Wu, B::Si], // 29
    [B::Chen, B::Hai, B::Hai, B::Wei, B::Wu], // 30
];

/// `MAIN_STAR_TABLE[ziwei_branch][target_branch]` → major stars in the
/// target branch, 紫微 included where it sits.
#[rustfmt::skip]
pub const MAIN_STAR_TABLE: [[&[StarKind]; 12]; 12] = [
    // 紫微 in 子
    [
        &[S::ZiWei],
        &[],
        &[S::PoJun],
        &[],
        &[S::LianZhen, S::TianFu],
        &[S::TaiYin],
        &[S::TanLang],
        &[S::TianTong, S::JuMen],
        &[S::WuQu, S::TianXiang],
        &[S::TaiYang, S::TianLiang],
        &[S::QiSha],
        &[S::TianJi],
    ],
    // 紫微 in 丑
    [
        &[S::TianJi],
        &[S::ZiWei, S::PoJun],
        &[],
        &[S::TianFu],
        &[S::TaiYin],
        &[S::LianZhen, S::TanLang],
        &[S::JuMen],
        &[S::TianXiang],
        &[S::TianTong, S::TianLiang],
        &[S::WuQu, S::QiSha],
        &[S::TaiYang],
        &[],
    ],
    // 紫微 in 寅
    [
        &[S::PoJun],
        &[S::TianJi],
        &[S::ZiWei, S::TianFu],
        &[S::TaiYin],
        &[S::TanLang],
        &[S::JuMen],
        &[S::LianZhen, S::TianXiang],
        &[S::TianLiang],
        &[S::QiSha],
        &[S::TianTong],
        &[S::WuQu],
        &[S::TaiYang],
    ],
    // 紫微 in 卯
    [
        &[S::TaiYang],
        &[S::TianFu],
        &[S::TianJi, S::TaiYin],
        &[S::ZiWei, S::TanLang],
        &[S::JuMen],
        &[S::TianXiang],
        &[S::TianLiang],
        &[S::LianZhen, S::QiSha],
        &[],
        &[],
        &[S::TianTong],
        &[S::WuQu, S::PoJun],
    ],
    // 紫微 in 辰
    [
        &[S::WuQu, S::TianFu],
        &[S::TaiYang, S::TaiYin],
        &[S::TanLang],
        &[S::TianJi, S::JuMen],
        &[S::ZiWei, S::TianXiang],
        &[S::TianLiang],
        &[S::QiSha],
        &[],
        &[S::LianZhen],
        &[],
        &[S::PoJun],
        &[S::TianTong],
    ],
    // 紫微 in 巳
    [
        &[S::TianTong, S::TaiYin],
        &[S::WuQu, S::TanLang],
        &[S::TaiYang, S::JuMen],
        &[S::TianXiang],
        &[S::TianJi, S::TianLiang],
        &[S::ZiWei, S::QiSha],
        &[],
        &[],
        &[],
        &[S::LianZhen, S::PoJun],
        &[],
        &[S::TianFu],
    ],
    // 紫微 in 午
    [
        &[S::TanLang],
        &[S::TianTong, S::JuMen],
        &[S::WuQu, S::TianXiang],
        &[S::TaiYang, S::TianLiang],
        &[S::QiSha],
        &[S::TianJi],
        &[S::ZiWei],
        &[],
        &[S::PoJun],
        &[],
        &[S::LianZhen, S::TianFu],
        &[S::TaiYin],
    ],
    // 紫微 in 未
    [
        &[S::JuMen],
        &[S::TianXiang],
        &[S::TianTong, S::TianLiang],
        &[S::WuQu, S::QiSha],
        &[S::TaiYang],
        &[],
        &[S::TianJi],
        &[S::ZiWei, S::PoJun],
        &[],
        &[S::TianFu],
        &[S::TaiYin],
        &[S::LianZhen, S::TanLang],
    ],
    // 紫微 in 申
    [
        &[S::LianZhen, S::TianXiang],
        &[S::TianLiang],
        &[S::QiSha],
        &[S::TianTong],
        &[S::WuQu],
        &[S::TaiYang],
        &[S::PoJun],
        &[S::TianJi],
        &[S::ZiWei, S::TianFu],
        &[S::TaiYin],
        &[S::TanLang],
        &[S::JuMen],
    ],
    // 紫微 in 酉
    [
        &[S::TianLiang],
        &[S::LianZhen, S::QiSha],
        &[],
        &[],
        &[S::TianTong],
        &[S::WuQu, S::PoJun],
        &[S::TaiYang],
        &[S::TianFu],
        &[S::TianJi, S::TaiYin],
        &[S::ZiWei, S::TanLang],
        &[S::JuMen],
        &[S::TianXiang],
    ],
    // 紫微 in 戌
    [
        &[S::QiSha],
        &[],
        &[S::LianZhen],
        &[],
        &[S::PoJun],
        &[S::TianTong],
        &[S::WuQu, S::TianFu],
        &[S::TaiYang, S::TaiYin],
        &[S::TanLang],
        &[S::TianJi, S::JuMen],
        &[S::ZiWei, S::TianXiang],
        &[S::TianLiang],
    ],
    // 紫微 in 亥
    [
        &[],
        &[],
        &[],
        &[S::LianZhen, S::PoJun],
        &[],
        &[S::TianFu],
        &[S::TianTong, S::TaiYin],
        &[S::WuQu, S::TanLang],
        &[S::TaiYang, S::JuMen],
        &[S::TianXiang],
        &[S::TianJi, S::TianLiang],
        &[S::ZiWei, S::QiSha],
    ],
];

/// Branch of 紫微 for a lunar day and element cycle.
pub const fn ziwei_branch(day: LunarDay, cycle: FiveElementCycle) -> EarthlyBranch {
    ZIWEI_POSITION_TABLE[day.index()][cycle.index()]
}

/// Major stars in `target` given the 紫微 branch.
pub const fn main_stars_at(ziwei: EarthlyBranch, target: EarthlyBranch) -> &'static [StarKind] {
    MAIN_STAR_TABLE[ziwei.index() as usize][target.index() as usize]
}

/// 左辅 by month: starts at 辰 in month 1, forward.
#[rustfmt::skip]
pub const ZUOFU_BY_MONTH: [EarthlyBranch; 12] = [
    B::Chen, B::Si, B::Wu, B::Wei, B::Shen, B::You, B::Xu, B::Hai, B::Zi, B::Chou, B::Yin, B::Mao,
];

/// 右弼 by month: starts at 戌 in month 1, backward.
#[rustfmt::skip]
pub const YOUBI_BY_MONTH: [EarthlyBranch; 12] = [
    B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai,
];

/// 文昌 by hour branch: starts at 戌 for 子, backward.
#[rustfmt::skip]
pub const WENCHANG_BY_HOUR: [EarthlyBranch; 12] = [
    B::Xu, B::You, B::Shen, B::Wei, B::Wu, B::Si, B::Chen, B::Mao, B::Yin, B::Chou, B::Zi, B::Hai,
];

/// 文曲 by hour branch: starts at 辰 for 子, forward.
#[rustfmt::skip]
pub const WENQU_BY_HOUR: [EarthlyBranch; 12] = [
    B::Chen, B::Si, B::Wu, B::Wei, B::Shen, B::You, B::Xu, B::Hai, B::Zi, B::Chou, B::Yin, B::Mao,
];

fn month_index(month: u8) -> Result<usize, BaseError> {
    match month {
        1..=12 => Ok(month as usize - 1),
        _ => Err(BaseError::miss("month tables", format!("month {month}"))),
    }
}

/// Branch of one of the four minor stars.
///
/// 左辅/右弼 read the month table, 文昌/文曲 the hour table. Any other star
/// is a table miss.
pub fn minor_star_branch(
    star: StarKind,
    month: u8,
    hour: EarthlyBranch,
) -> Result<EarthlyBranch, BaseError> {
    let h = hour.index() as usize;
    match star {
        S::ZuoFu => Ok(ZUOFU_BY_MONTH[month_index(month)?]),
        S::YouBi => Ok(YOUBI_BY_MONTH[month_index(month)?]),
        S::WenChang => Ok(WENCHANG_BY_HOUR[h]),
        S::WenQu => Ok(WENQU_BY_HOUR[h]),
        other => Err(BaseError::miss("minor star tables", other.name())),
    }
}

/// 禄存 by year stem.
#[rustfmt::skip]
pub const LUCUN_BY_STEM: [EarthlyBranch; 10] = [
    B::Yin, B::Mao, B::Si, B::Wu, B::Si, B::Wu, B::Shen, B::You, B::Hai, B::Zi,
];

/// (天魁, 天钺) by year stem.
#[rustfmt::skip]
pub const KUI_YUE_BY_STEM: [(EarthlyBranch, EarthlyBranch); 10] = [
    (B::Chou, B::Wei), // 甲
    (B::Zi, B::Shen),  // 乙
    (B::Hai, B::You),  // 丙
    (B::Hai, B::You),  // 丁
    (B::Chou, B::Wei), // 戊
    (B::Zi, B::Shen),  // 己
    (B::Chou, B::Wei), // 庚
    (B::Wu, B::Yin),   // 辛
    (B::Mao, B::Si),   // 壬
    (B::Mao, B::Si),   // 癸
];

/// Year-stem stars and their branches: 禄存, 擎羊 (禄存 + 1), 陀罗 (禄存 - 1),
/// 天魁, 天钺.
pub fn year_star_branches(stem: HeavenlyStem) -> [(StarKind, EarthlyBranch); 5] {
    let s = stem.index() as usize;
    let lucun = LUCUN_BY_STEM[s];
    let (kui, yue) = KUI_YUE_BY_STEM[s];
    [
        (S::LuCun, lucun),
        (S::QingYang, lucun.offset(1)),
        (S::TuoLuo, lucun.offset(-1)),
        (S::TianKui, kui),
        (S::TianYue, yue),
    ]
}

/// Month stars: 天刑 from 酉 forward, 天姚 from 丑 forward.
pub fn month_star_branches(month: u8) -> Result<[(StarKind, EarthlyBranch); 2], BaseError> {
    let m = month_index(month)? as i32;
    Ok([
        (S::TianXing, B::You.offset(m)),
        (S::TianYao, B::Chou.offset(m)),
    ])
}

/// Day stars: 三台 counts forward from 左辅, 八座 backward from 右弼, by
/// lunar day.
pub fn day_star_branches(
    month: u8,
    day: LunarDay,
) -> Result<[(StarKind, EarthlyBranch); 2], BaseError> {
    let m = month_index(month)?;
    let d = day.day() as i32 - 1;
    Ok([
        (S::SanTai, ZUOFU_BY_MONTH[m].offset(d)),
        (S::BaZuo, YOUBI_BY_MONTH[m].offset(-d)),
    ])
}

/// Hour stars: 地劫 from 亥 forward, 地空 from 亥 backward.
pub fn hour_star_branches(hour: EarthlyBranch) -> [(StarKind, EarthlyBranch); 2] {
    let h = hour.index() as i32;
    [(S::DiKong, B::Hai.offset(-h)), (S::DiJie, B::Hai.offset(h))]
}

/// Starting branches of (火星, 铃星) for the year branch's triad.
const fn fire_bell_start(year: EarthlyBranch) -> (EarthlyBranch, EarthlyBranch) {
    match year {
        B::Yin | B::Wu | B::Xu => (B::Chou, B::Mao),
        B::Shen | B::Zi | B::Chen => (B::Yin, B::Xu),
        B::Si | B::You | B::Chou => (B::Mao, B::Xu),
        B::Hai | B::Mao | B::Wei => (B::You, B::Xu),
    }
}

/// 火星 and 铃星: triad start by year branch, forward by hour.
pub fn fire_bell_branches(
    year: EarthlyBranch,
    hour: EarthlyBranch,
) -> [(StarKind, EarthlyBranch); 2] {
    let (fire, bell) = fire_bell_start(year);
    let h = hour.index() as i32;
    [(S::HuoXing, fire.offset(h)), (S::LingXing, bell.offset(h))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_FIVE_ELEMENT_CYCLES;
    use crate::star::MAJOR_STARS;

    fn day(d: u8) -> LunarDay {
        LunarDay::new(d).unwrap()
    }

    #[test]
    fn ziwei_known_positions() {
        use FiveElementCycle as E;
        assert_eq!(ziwei_branch(day(1), E::Water2), B::Chou);
        assert_eq!(ziwei_branch(day(2), E::Water2), B::Yin);
        assert_eq!(ziwei_branch(day(1), E::Wood3), B::Chen);
        assert_eq!(ziwei_branch(day(1), E::Metal4), B::Hai);
        assert_eq!(ziwei_branch(day(1), E::Earth5), B::Wu);
        assert_eq!(ziwei_branch(day(1), E::Fire6), B::You);
        assert_eq!(ziwei_branch(day(15), E::Fire6), B::Chou);
    }

    #[test]
    fn ziwei_day_equal_to_cycle_number_is_yin() {
        for c in ALL_FIVE_ELEMENT_CYCLES {
            assert_eq!(ziwei_branch(day(c.number()), c), B::Yin);
        }
    }

    #[test]
    fn every_row_places_all_14_major_stars_once() {
        for z in EarthlyBranch::all() {
            let mut placed: Vec<StarKind> = EarthlyBranch::all()
                .iter()
                .flat_map(|t| main_stars_at(*z, *t).iter().copied())
                .collect();
            placed.sort();
            let mut expected = MAJOR_STARS.to_vec();
            expected.sort();
            assert_eq!(placed, expected, "紫微 in {z}");
            assert!(main_stars_at(*z, *z).contains(&S::ZiWei));
        }
    }

    #[test]
    fn tianfu_mirrors_ziwei() {
        // 紫微 in 子 puts 天府 in 辰; 紫微 in 寅 shares the palace with 天府.
        assert!(main_stars_at(B::Zi, B::Chen).contains(&S::TianFu));
        assert_eq!(main_stars_at(B::Yin, B::Yin), &[S::ZiWei, S::TianFu]);
    }

    #[test]
    fn minor_stars_resolve() {
        assert_eq!(minor_star_branch(S::ZuoFu, 1, B::Zi).unwrap(), B::Chen);
        assert_eq!(minor_star_branch(S::YouBi, 1, B::Zi).unwrap(), B::Xu);
        assert_eq!(minor_star_branch(S::WenChang, 6, B::Wei).unwrap(), B::Mao);
        assert_eq!(minor_star_branch(S::WenQu, 6, B::Wei).unwrap(), B::Hai);
    }

    #[test]
    fn minor_star_misses() {
        assert!(minor_star_branch(S::ZuoFu, 13, B::Zi).is_err());
        assert!(minor_star_branch(S::ZiWei, 1, B::Zi).is_err());
    }

    #[test]
    fn year_stars_for_jia() {
        let stars = year_star_branches(HeavenlyStem::Jia);
        assert_eq!(stars[0], (S::LuCun, B::Yin));
        assert_eq!(stars[1], (S::QingYang, B::Mao));
        assert_eq!(stars[2], (S::TuoLuo, B::Chou));
        assert_eq!(stars[3], (S::TianKui, B::Chou));
        assert_eq!(stars[4], (S::TianYue, B::Wei));
    }

    #[test]
    fn day_stars_follow_fu_bi() {
        let stars = day_star_branches(1, day(3)).unwrap();
        assert_eq!(stars[0], (S::SanTai, B::Wu));
        assert_eq!(stars[1], (S::BaZuo, B::Shen));
    }

    #[test]
    fn hour_stars_at_zi_share_hai() {
        let stars = hour_star_branches(B::Zi);
        assert_eq!(stars[0].1, B::Hai);
        assert_eq!(stars[1].1, B::Hai);
    }

    #[test]
    fn fire_bell_triads() {
        assert_eq!(fire_bell_branches(B::Wu, B::Zi), [(S::HuoXing, B::Chou), (S::LingXing, B::Mao)]);
        assert_eq!(fire_bell_branches(B::Zi, B::Chou), [(S::HuoXing, B::Mao), (S::LingXing, B::Hai)]);
    }
}
