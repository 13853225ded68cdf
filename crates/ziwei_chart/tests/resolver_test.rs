//! Resolver behavior on the 1990-06-15 14:00 female chart (today = 2026).

use chrono::NaiveDate;
use ziwei_base::{PalaceName, rotated_name};
use ziwei_chart::{
    Aspect, ChartData, ChartInput, Gender, Timeframe, calculate, current_major_limit,
    decade_anchor, monthly_anchor, monthly_palaces, resolve_palace_for_aspect,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn chart() -> ChartData {
    let input = ChartInput::new(1990, 6, 15, 14, Gender::Female);
    calculate(&input, date(2026, 5, 1)).unwrap()
}

#[test]
fn natal_uses_life_palace() {
    let c = chart();
    let r = |a| resolve_palace_for_aspect(a, &c, Timeframe::Natal);
    assert_eq!(r(Aspect::Personality), Some(8));
    assert_eq!(r(Aspect::Career), Some(12));
    assert_eq!(r(Aspect::Spouse), Some(6));
    assert_eq!(r(Aspect::Parents), Some(9));
}

#[test]
fn natal_matches_palace_names() {
    let c = chart();
    for p in &c.palaces {
        let aspect = Aspect::from_palace_name(p.name);
        assert_eq!(
            resolve_palace_for_aspect(aspect, &c, Timeframe::Natal),
            Some(p.number)
        );
    }
}

#[test]
fn decade_flips_at_limit_boundary() {
    let c = chart();
    assert_eq!(decade_anchor(&c, date(2005, 12, 31)), Some(8));
    assert_eq!(decade_anchor(&c, date(2006, 1, 1)), Some(7));

    let tf = Timeframe::Decade {
        today: date(2006, 1, 1),
    };
    assert_eq!(resolve_palace_for_aspect(Aspect::Personality, &c, tf), Some(7));
    assert_eq!(resolve_palace_for_aspect(Aspect::Siblings, &c, tf), Some(6));
}

#[test]
fn decade_before_first_limit_uses_nearest_future() {
    let c = chart();
    assert_eq!(decade_anchor(&c, date(1993, 1, 1)), Some(8));
}

#[test]
fn decade_past_last_limit_is_none() {
    let c = chart();
    assert_eq!(decade_anchor(&c, date(2120, 1, 1)), None);
    let tf = Timeframe::Decade {
        today: date(2120, 1, 1),
    };
    assert_eq!(resolve_palace_for_aspect(Aspect::Wealth, &c, tf), None);
}

#[test]
fn current_major_limit_2026() {
    let c = chart();
    let p = current_major_limit(&c, date(2026, 5, 1)).unwrap();
    assert_eq!(p.number, 5);
    assert!(p.major_limit.unwrap().contains(36));
}

#[test]
fn annual_exact_year() {
    let c = chart();
    let tf = Timeframe::Annual { year: 2026 };
    assert_eq!(resolve_palace_for_aspect(Aspect::Personality, &c, tf), Some(2));
    assert_eq!(resolve_palace_for_aspect(Aspect::Wealth, &c, tf), Some(10));
    for year in [2024, 2037] {
        assert_eq!(
            resolve_palace_for_aspect(Aspect::Personality, &c, Timeframe::Annual { year }),
            None
        );
    }
}

#[test]
fn monthly_table() {
    let c = chart();
    assert_eq!(c.palace(10).unwrap().name, PalaceName::Fortune);
    let months = monthly_palaces(&c, 2026).unwrap();
    assert_eq!(months, [4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3]);
    // January reads as palace 10's natal name from the 2026 year palace.
    assert_eq!(rotated_name(2, months[0]), Some(PalaceName::Fortune));
    assert_eq!(monthly_anchor(&c, 2026, 12), Some(3));
}

#[test]
fn monthly_resolves_from_month_palace() {
    let c = chart();
    let tf = Timeframe::Monthly {
        year: 2026,
        month: 3,
    };
    assert_eq!(resolve_palace_for_aspect(Aspect::Personality, &c, tf), Some(6));
    assert_eq!(resolve_palace_for_aspect(Aspect::Children, &c, tf), Some(3));
}

#[test]
fn monthly_misses() {
    let c = chart();
    assert_eq!(monthly_anchor(&c, 2026, 0), None);
    assert_eq!(monthly_anchor(&c, 2026, 13), None);
    assert_eq!(monthly_palaces(&c, 2040), None);
}

#[test]
fn aspect_parsing() {
    assert_eq!("career".parse::<Aspect>().unwrap(), Aspect::Career);
    assert_eq!("夫妻宫".parse::<Aspect>().unwrap(), Aspect::Spouse);
    assert!("".parse::<Aspect>().is_err());
}
