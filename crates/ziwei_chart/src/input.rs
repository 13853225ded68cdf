//! Birth data accepted by the pipeline.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::ChartError;

/// Birth gender; with year polarity it sets the Major Limit direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            other => Err(ChartError::invalid(
                "gender",
                format!("'{other}' is not male or female"),
            )),
        }
    }
}

/// Gregorian birth data. `hour` is the clock hour 0-23.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInput {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub gender: Gender,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ChartInput {
    /// Unnamed input with no email. Nothing is checked until [`validate`](Self::validate).
    pub fn new(year: i32, month: u8, day: u8, hour: u8, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            gender,
            name: String::new(),
            email: None,
        }
    }

    /// Display name carried into the chart; never affects placement.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Contact email, stored as given.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Birth date, if the fields form a real calendar day.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }

    /// Reject input outside the accepted domain before any computation runs.
    pub fn validate(&self, config: &ChartConfig) -> Result<(), ChartError> {
        config.validate()?;
        if !config.accepts_year(self.year) {
            return Err(ChartError::invalid(
                "year",
                format!(
                    "{} not in {}..={}",
                    self.year, config.min_year, config.max_year
                ),
            ));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::invalid(
                "month",
                format!("{} not in 1..=12", self.month),
            ));
        }
        if self.birth_date().is_none() {
            return Err(ChartError::invalid(
                "day",
                format!(
                    "{:04}-{:02}-{:02} is not a calendar date",
                    self.year, self.month, self.day
                ),
            ));
        }
        if self.hour > 23 {
            return Err(ChartError::invalid(
                "hour",
                format!("{} not in 0..=23", self.hour),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ChartInput {
        ChartInput::new(1990, 6, 15, 14, Gender::Female)
    }

    fn field(r: Result<(), ChartError>) -> &'static str {
        match r {
            Err(ChartError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate(&ChartConfig::default()).is_ok());
        assert!(
            input()
                .with_email("a@b.c")
                .validate(&ChartConfig::default())
                .is_ok()
        );
    }

    #[test]
    fn year_bounds() {
        let cfg = ChartConfig::default();
        for y in [1900, 2100] {
            assert!(ChartInput { year: y, ..input() }.validate(&cfg).is_ok());
        }
        for y in [1899, 2101] {
            assert_eq!(field(ChartInput { year: y, ..input() }.validate(&cfg)), "year");
        }
    }

    #[test]
    fn bad_fields() {
        let cfg = ChartConfig::default();
        assert_eq!(field(ChartInput { month: 13, ..input() }.validate(&cfg)), "month");
        assert_eq!(field(ChartInput { month: 0, ..input() }.validate(&cfg)), "month");
        assert_eq!(field(ChartInput { day: 31, ..input() }.validate(&cfg)), "day");
        assert_eq!(field(ChartInput { hour: 24, ..input() }.validate(&cfg)), "hour");
    }

    #[test]
    fn email_is_not_checked() {
        let cfg = ChartConfig::default();
        assert!(input().with_email("nobody").validate(&cfg).is_ok());
        assert!(input().with_email("").validate(&cfg).is_ok());
    }

    #[test]
    fn leap_day() {
        let cfg = ChartConfig::default();
        let leap = ChartInput { year: 2024, month: 2, day: 29, ..input() };
        assert!(leap.validate(&cfg).is_ok());
        let common = ChartInput { year: 2023, ..leap };
        assert_eq!(field(common.validate(&cfg)), "day");
    }

    #[test]
    fn gender_parse() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("男".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }
}
