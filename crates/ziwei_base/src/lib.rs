//! Fixed rules and lookup tables for Zi Wei Dou Shu charts.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches and the sexagenary year pillar
//! - Palace ring geometry and the naming rotation
//! - Star identities, brightness and every placement table
//! - The four transformations table
//! - Hour/lunar-day conversions behind a replaceable calendar seam
//!
//! Everything here is pure data or pure functions over it.

pub mod branch;
pub mod element;
pub mod error;
pub mod lunar;
pub mod palace;
pub mod palace_data;
pub mod sexagenary;
pub mod star;
pub mod star_data;
pub mod stem;
pub mod transformation;
pub mod util;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use element::{
    ALL_FIVE_ELEMENT_CYCLES, FIVE_ELEMENTS_TABLE, FiveElementCycle, MAJOR_LIMIT_STARTING_AGE,
    five_element_cycle,
};
pub use error::BaseError;
pub use lunar::{
    ApproximateLunarCalendar, LUNAR_DAY_LABELS, LunarCalendar, LunarDay, solar_day_to_lunar_label,
};
pub use palace::{
    CANONICAL_PALACE_NAMES, PALACE_COUNT, PalaceName, is_valid_palace, palace_branch,
    palace_of_branch, palace_offset, palace_with_name, rotated_name,
};
pub use palace_data::{
    LIFE_PALACE_TABLE, PALACE_STEM_ORDER, PALACE_TEN_START_STEM, life_palace_branch,
    palace_ten_stem,
};
pub use sexagenary::{
    ANNUAL_FLOW_EPOCH_YEAR, annual_flow_window_start, flow_year_pillar, year_pillar,
    year_polarity,
};
pub use star::{
    ALL_STAR_CATEGORIES, ALL_STARS, Brightness, MAJOR_STARS, MINOR_STARS, StarCategory, StarKind,
};
pub use star_data::{
    MAIN_STAR_TABLE, ZIWEI_POSITION_TABLE, day_star_branches, fire_bell_branches,
    hour_star_branches, main_stars_at, minor_star_branch, month_star_branches,
    year_star_branches, ziwei_branch,
};
pub use stem::{ALL_STEMS, HeavenlyStem, Polarity};
pub use transformation::{
    ALL_TRANSFORMATIONS, FOUR_TRANSFORMATIONS, Transformation, transformations_for_stem,
};
pub use util::{hour_to_branch, modulo};
