//! The four transformations (四化) keyed by the year's Heavenly Stem.

use serde::{Deserialize, Serialize};

use crate::star::StarKind;
use crate::stem::HeavenlyStem;

/// One of the four transformation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transformation {
    /// 化祿
    #[serde(rename = "祿")]
    Lu,
    /// 化權
    #[serde(rename = "權")]
    Quan,
    /// 化科
    #[serde(rename = "科")]
    Ke,
    /// 化忌
    #[serde(rename = "忌")]
    Ji,
}

/// The four marks in table column order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// Single-character name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "祿",
            Self::Quan => "權",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }
}

impl std::fmt::Display for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

use StarKind as S;

/// `FOUR_TRANSFORMATIONS[stem]` → target stars for 祿 權 科 忌.
#[rustfmt::skip]
pub const FOUR_TRANSFORMATIONS: [[StarKind; 4]; 10] = [
    [S::LianZhen, S::PoJun, S::WuQu, S::TaiYang],       // 甲
    [S::TianJi, S::TianLiang, S::ZiWei, S::TaiYin],     // 乙
    [S::TianTong, S::TianJi, S::WenChang, S::LianZhen], // 丙
    [S::TaiYin, S::TianTong, S::TianJi, S::JuMen],      // 丁
    [S::TanLang, S::TaiYin, S::YouBi, S::TianJi],       // 戊
    [S::WuQu, S::TanLang, S::TianLiang, S::WenQu],      // 己
    [S::TaiYang, S::WuQu, S::TaiYin, S::TianTong],      // 庚
    [S::JuMen, S::TaiYang, S::WenQu, S::WenChang],      // 辛
    [S::TianLiang, S::ZiWei, S::ZuoFu, S::WuQu],        // 壬
    [S::PoJun, S::JuMen, S::TaiYin, S::TanLang],        // 癸
];

/// The four (mark, target star) pairs for a year stem.
pub fn transformations_for_stem(stem: HeavenlyStem) -> [(Transformation, StarKind); 4] {
    let row = FOUR_TRANSFORMATIONS[stem.index() as usize];
    [
        (Transformation::Lu, row[0]),
        (Transformation::Quan, row[1]),
        (Transformation::Ke, row[2]),
        (Transformation::Ji, row[3]),
    ]
}
