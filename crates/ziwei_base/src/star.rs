//! Star identities, category buckets and brightness.
//!
//! The 14 major stars are placed from the 紫微 anchor. The four minor
//! stars (左辅 右弼 文昌 文曲) come from month/hour tables. The remaining
//! stars fill the year, month, day, hour and auxiliary buckets.
//!
//! Brightness is two-state (庙/旺 bright, otherwise dim) with one mask per
//! star. 左辅 右弼 禄存 天魁 天钺 天刑 天姚 三台 八座 have no 陷 position
//! in the placement tables and are bright in every branch.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::BaseError;

/// Every star the chart can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StarKind {
    // 紫微 series
    #[serde(rename = "紫微")]
    ZiWei,
    #[serde(rename = "天机")]
    TianJi,
    #[serde(rename = "太阳")]
    TaiYang,
    #[serde(rename = "武曲")]
    WuQu,
    #[serde(rename = "天同")]
    TianTong,
    #[serde(rename = "廉贞")]
    LianZhen,
    // 天府 series
    #[serde(rename = "天府")]
    TianFu,
    #[serde(rename = "太阴")]
    TaiYin,
    #[serde(rename = "贪狼")]
    TanLang,
    #[serde(rename = "巨门")]
    JuMen,
    #[serde(rename = "天相")]
    TianXiang,
    #[serde(rename = "天梁")]
    TianLiang,
    #[serde(rename = "七杀")]
    QiSha,
    #[serde(rename = "破军")]
    PoJun,
    // minor
    #[serde(rename = "左辅")]
    ZuoFu,
    #[serde(rename = "右弼")]
    YouBi,
    #[serde(rename = "文昌")]
    WenChang,
    #[serde(rename = "文曲")]
    WenQu,
    // year stem
    #[serde(rename = "禄存")]
    LuCun,
    #[serde(rename = "擎羊")]
    QingYang,
    #[serde(rename = "陀罗")]
    TuoLuo,
    #[serde(rename = "天魁")]
    TianKui,
    #[serde(rename = "天钺")]
    TianYue,
    // month
    #[serde(rename = "天刑")]
    TianXing,
    #[serde(rename = "天姚")]
    TianYao,
    // day
    #[serde(rename = "三台")]
    SanTai,
    #[serde(rename = "八座")]
    BaZuo,
    // hour
    #[serde(rename = "地空")]
    DiKong,
    #[serde(rename = "地劫")]
    DiJie,
    // year branch + hour
    #[serde(rename = "火星")]
    HuoXing,
    #[serde(rename = "铃星")]
    LingXing,
}

/// The 14 major stars, 紫微 series then 天府 series.
pub const MAJOR_STARS: [StarKind; 14] = [
    StarKind::ZiWei,
    StarKind::TianJi,
    StarKind::TaiYang,
    StarKind::WuQu,
    StarKind::TianTong,
    StarKind::LianZhen,
    StarKind::TianFu,
    StarKind::TaiYin,
    StarKind::TanLang,
    StarKind::JuMen,
    StarKind::TianXiang,
    StarKind::TianLiang,
    StarKind::QiSha,
    StarKind::PoJun,
];

/// The four minor stars placed by the month/hour tables.
pub const MINOR_STARS: [StarKind; 4] = [
    StarKind::ZuoFu,
    StarKind::YouBi,
    StarKind::WenChang,
    StarKind::WenQu,
];

/// Every star kind in declaration order.
pub const ALL_STARS: [StarKind; 31] = [
    StarKind::ZiWei,
    StarKind::TianJi,
    StarKind::TaiYang,
    StarKind::WuQu,
    StarKind::TianTong,
    StarKind::LianZhen,
    StarKind::TianFu,
    StarKind::TaiYin,
    StarKind::TanLang,
    StarKind::JuMen,
    StarKind::TianXiang,
    StarKind::TianLiang,
    StarKind::QiSha,
    StarKind::PoJun,
    StarKind::ZuoFu,
    StarKind::YouBi,
    StarKind::WenChang,
    StarKind::WenQu,
    StarKind::LuCun,
    StarKind::QingYang,
    StarKind::TuoLuo,
    StarKind::TianKui,
    StarKind::TianYue,
    StarKind::TianXing,
    StarKind::TianYao,
    StarKind::SanTai,
    StarKind::BaZuo,
    StarKind::DiKong,
    StarKind::DiJie,
    StarKind::HuoXing,
    StarKind::LingXing,
];

/// Bucket a star is filed under inside a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarCategory {
    Main,
    Minor,
    Auxiliary,
    Year,
    Month,
    Day,
    Hour,
}

/// Buckets in scan order.
pub const ALL_STAR_CATEGORIES: [StarCategory; 7] = [
    StarCategory::Main,
    StarCategory::Minor,
    StarCategory::Auxiliary,
    StarCategory::Year,
    StarCategory::Month,
    StarCategory::Day,
    StarCategory::Hour,
];

/// Two-state brightness: 庙/旺 are bright, everything else dim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Bright,
    Dim,
}

impl StarKind {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::LuCun => "禄存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::TianXing => "天刑",
            Self::TianYao => "天姚",
            Self::SanTai => "三台",
            Self::BaZuo => "八座",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
        }
    }

    /// Bucket the star belongs to.
    pub const fn category(self) -> StarCategory {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen
            | Self::TianFu
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarCategory::Main,
            Self::ZuoFu | Self::YouBi | Self::WenChang | Self::WenQu => StarCategory::Minor,
            Self::LuCun | Self::QingYang | Self::TuoLuo | Self::TianKui | Self::TianYue => {
                StarCategory::Year
            }
            Self::TianXing | Self::TianYao => StarCategory::Month,
            Self::SanTai | Self::BaZuo => StarCategory::Day,
            Self::DiKong | Self::DiJie => StarCategory::Hour,
            Self::HuoXing | Self::LingXing => StarCategory::Auxiliary,
        }
    }

    /// Brightness of this star when it sits in `branch`.
    pub const fn brightness_in(self, branch: EarthlyBranch) -> Brightness {
        let mask = match self {
            Self::ZiWei => ZIWEI_BRIGHT,
            Self::TianJi => TIANJI_BRIGHT,
            Self::TaiYang => TAIYANG_BRIGHT,
            Self::WuQu => WUQU_BRIGHT,
            Self::TianTong => TIANTONG_BRIGHT,
            Self::LianZhen => LIANZHEN_BRIGHT,
            Self::TianFu => TIANFU_BRIGHT,
            Self::TaiYin => TAIYIN_BRIGHT,
            Self::TanLang => TANLANG_BRIGHT,
            Self::JuMen => JUMEN_BRIGHT,
            Self::TianXiang => TIANXIANG_BRIGHT,
            Self::TianLiang => TIANLIANG_BRIGHT,
            Self::QiSha => QISHA_BRIGHT,
            Self::PoJun => POJUN_BRIGHT,
            Self::WenChang => WENCHANG_BRIGHT,
            Self::WenQu => WENQU_BRIGHT,
            Self::QingYang => QINGYANG_BRIGHT,
            Self::TuoLuo => TUOLUO_BRIGHT,
            Self::HuoXing => HUOXING_BRIGHT,
            Self::LingXing => LINGXING_BRIGHT,
            Self::DiKong => DIKONG_BRIGHT,
            Self::DiJie => DIJIE_BRIGHT,
            Self::ZuoFu
            | Self::YouBi
            | Self::LuCun
            | Self::TianKui
            | Self::TianYue
            | Self::TianXing
            | Self::TianYao
            | Self::SanTai
            | Self::BaZuo => ALWAYS_BRIGHT,
        };
        if mask[branch.index() as usize] {
            Brightness::Bright
        } else {
            Brightness::Dim
        }
    }
}

impl std::fmt::Display for StarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StarKind {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STARS
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| BaseError::miss("star names", s))
    }
}

// Bright (庙/旺) branches per star, columns 子 丑 寅 卯 辰 巳 午 未 申 酉 戌 亥.
const T: bool = true;
const F: bool = false;
#[rustfmt::skip]
const ZIWEI_BRIGHT: [bool; 12] =      [F, T, T, T, F, T, T, T, T, T, F, T];
#[rustfmt::skip]
const TIANJI_BRIGHT: [bool; 12] =     [T, F, F, T, F, F, T, F, F, T, F, F];
#[rustfmt::skip]
const TAIYANG_BRIGHT: [bool; 12] =    [F, F, T, T, T, T, T, F, F, F, F, F];
#[rustfmt::skip]
const WUQU_BRIGHT: [bool; 12] =       [T, T, F, F, T, F, T, T, F, F, T, F];
#[rustfmt::skip]
const TIANTONG_BRIGHT: [bool; 12] =   [T, F, F, F, F, T, F, F, T, F, F, T];
#[rustfmt::skip]
const LIANZHEN_BRIGHT: [bool; 12] =   [F, F, T, F, F, F, F, F, T, F, F, F];
#[rustfmt::skip]
const TIANFU_BRIGHT: [bool; 12] =     [T, T, T, F, T, F, T, T, F, T, T, F];
#[rustfmt::skip]
const TAIYIN_BRIGHT: [bool; 12] =     [T, T, T, F, F, F, F, F, F, F, T, T];
#[rustfmt::skip]
const TANLANG_BRIGHT: [bool; 12] =    [T, T, F, F, T, F, T, T, F, F, T, F];
#[rustfmt::skip]
const JUMEN_BRIGHT: [bool; 12] =      [T, F, T, T, F, T, T, F, T, T, F, T];
#[rustfmt::skip]
const TIANXIANG_BRIGHT: [bool; 12] =  [T, T, T, F, F, F, T, F, T, F, F, F];
#[rustfmt::skip]
const TIANLIANG_BRIGHT: [bool; 12] =  [T, T, T, T, T, F, T, T, F, F, T, F];
#[rustfmt::skip]
const QISHA_BRIGHT: [bool; 12] =      [T, T, T, T, T, F, T, T, T, T, T, F];
#[rustfmt::skip]
const POJUN_BRIGHT: [bool; 12] =      [T, T, F, F, T, F, T, T, F, F, T, F];
#[rustfmt::skip]
const WENCHANG_BRIGHT: [bool; 12] =   [T, T, F, F, F, T, F, F, F, T, F, F];
#[rustfmt::skip]
const WENQU_BRIGHT: [bool; 12] =      [T, T, F, T, F, T, F, T, F, T, F, T];
#[rustfmt::skip]
const QINGYANG_BRIGHT: [bool; 12] =   [F, T, F, F, T, F, F, T, F, F, T, F];
#[rustfmt::skip]
const TUOLUO_BRIGHT: [bool; 12] =     [F, T, F, F, T, F, F, T, F, F, T, F];
#[rustfmt::skip]
const HUOXING_BRIGHT: [bool; 12] =    [F, T, T, T, T, F, T, T, F, F, T, F];
#[rustfmt::skip]
const LINGXING_BRIGHT: [bool; 12] =   [F, T, T, T, T, F, T, T, F, F, T, F];
#[rustfmt::skip]
const DIKONG_BRIGHT: [bool; 12] =     [F, F, T, F, F, T, F, F, T, F, F, T];
#[rustfmt::skip]
const DIJIE_BRIGHT: [bool; 12] =      [F, F, T, F, F, T, F, F, T, F, F, T];
const ALWAYS_BRIGHT: [bool; 12] = [T; 12];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stars_complete() {
        let mut seen = std::collections::HashSet::new();
        for k in ALL_STARS {
            assert!(seen.insert(k), "{k} listed twice");
        }
        assert_eq!(seen.len(), 31);
    }

    #[test]
    fn major_stars_are_main() {
        for k in MAJOR_STARS {
            assert_eq!(k.category(), StarCategory::Main);
        }
        for k in MINOR_STARS {
            assert_eq!(k.category(), StarCategory::Minor);
        }
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("紫微".parse::<StarKind>().unwrap(), StarKind::ZiWei);
        assert_eq!("铃星".parse::<StarKind>().unwrap(), StarKind::LingXing);
        assert!("太白".parse::<StarKind>().is_err());
    }

    #[test]
    fn known_brightness() {
        assert_eq!(StarKind::TaiYang.brightness_in(EarthlyBranch::Wu), Brightness::Bright);
        assert_eq!(StarKind::TaiYang.brightness_in(EarthlyBranch::Zi), Brightness::Dim);
        assert_eq!(StarKind::TaiYin.brightness_in(EarthlyBranch::Hai), Brightness::Bright);
        assert_eq!(StarKind::TaiYin.brightness_in(EarthlyBranch::Mao), Brightness::Dim);
        assert_eq!(StarKind::ZuoFu.brightness_in(EarthlyBranch::Mao), Brightness::Bright);
        assert_eq!(StarKind::DiKong.brightness_in(EarthlyBranch::Hai), Brightness::Bright);
        assert_eq!(StarKind::DiKong.brightness_in(EarthlyBranch::Chen), Brightness::Dim);
        assert_eq!(StarKind::DiJie.brightness_in(EarthlyBranch::Si), Brightness::Bright);
        assert_eq!(StarKind::DiJie.brightness_in(EarthlyBranch::Wu), Brightness::Dim);
    }
}
