//! Lunar day labels and the solar-to-lunar conversion seam.
//!
//! The chart only needs the lunar day of birth (初一 .. 三十). Conversion
//! goes through [`LunarCalendar`] so a real lunisolar table can replace
//! [`ApproximateLunarCalendar`] without touching the pipeline.
//!
//! [`ApproximateLunarCalendar`] knows the real mapping for February 2024
//! only; every other date falls back to `day mod 30`. This is not a correct
//! conversion.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// The 30 canonical lunar day labels, index 0 = 初一.
pub const LUNAR_DAY_LABELS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// A lunar day of month, 1..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LunarDay(u8);

impl LunarDay {
    /// Construct from a 1-based day; `None` outside 1..=30.
    pub const fn new(day: u8) -> Option<Self> {
        if day >= 1 && day <= 30 {
            Some(Self(day))
        } else {
            None
        }
    }

    /// 1-based day number.
    pub const fn day(self) -> u8 {
        self.0
    }

    /// 0-based index into [`LUNAR_DAY_LABELS`].
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Canonical Chinese label (e.g. "十五").
    pub const fn label(self) -> &'static str {
        LUNAR_DAY_LABELS[self.index()]
    }

    /// Parse a canonical label.
    pub fn from_label(label: &str) -> Option<Self> {
        LUNAR_DAY_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| Self(i as u8 + 1))
    }
}

impl TryFrom<u8> for LunarDay {
    type Error = BaseError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Self::new(day).ok_or_else(|| BaseError::invalid("lunar day", format!("{day} not in 1..=30")))
    }
}

impl From<LunarDay> for u8 {
    fn from(d: LunarDay) -> Self {
        d.0
    }
}

impl std::fmt::Display for LunarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Solar (Gregorian) date to lunar day conversion.
pub trait LunarCalendar {
    /// Lunar day of month for a Gregorian date. Implementations may assume
    /// the date has already been validated by the caller.
    fn lunar_day(&self, year: i32, month: u8, day: u8) -> Result<LunarDay, BaseError>;
}

/// Placeholder calendar: February 2024 exact, `day mod 30` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateLunarCalendar;

/// Lunar days for 2024-02-01 ..= 2024-02-29. 2024-02-10 is 正月初一.
const FEB_2024_LUNAR_DAYS: [u8; 29] = [
    22, 23, 24, 25, 26, 27, 28, 29, 30, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
    18, 19, 20,
];

impl LunarCalendar for ApproximateLunarCalendar {
    fn lunar_day(&self, year: i32, month: u8, day: u8) -> Result<LunarDay, BaseError> {
        if day == 0 || day > 31 {
            return Err(BaseError::invalid("day", format!("{day} not in 1..=31")));
        }
        let lunar = if year == 2024 && month == 2 {
            *FEB_2024_LUNAR_DAYS
                .get(day as usize - 1)
                .ok_or_else(|| BaseError::miss("lunar calendar", format!("2024-02-{day:02}")))?
        } else {
            match day % 30 {
                0 => 30,
                d => d,
            }
        };
        LunarDay::try_from(lunar)
    }
}

/// Label of the lunar day for a Gregorian date using the approximate calendar.
pub fn solar_day_to_lunar_label(year: i32, month: u8, day: u8) -> Result<&'static str, BaseError> {
    ApproximateLunarCalendar
        .lunar_day(year, month, day)
        .map(LunarDay::label)
}
