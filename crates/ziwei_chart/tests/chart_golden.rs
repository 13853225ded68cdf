//! Golden chart: 1990-06-15, 14:00, female, computed against 2026.
//!
//! Reference values follow the standard placement tables (五虎遁, 纳音局,
//! 紫微/天府 series) with the approximate lunar calendar (day 15 -> 十五).

use chrono::NaiveDate;
use ziwei_base::{
    EarthlyBranch as B, FiveElementCycle, HeavenlyStem as S, PalaceName, Polarity, StarKind,
    Transformation, year_pillar,
};
use ziwei_chart::{AgeRange, ChartData, ChartInput, Gender, calculate, find_star_by_name};

fn golden() -> ChartData {
    let input = ChartInput::new(1990, 6, 15, 14, Gender::Female).with_name("golden");
    let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
    calculate(&input, today).unwrap()
}

fn palace_of(chart: &ChartData, star: StarKind) -> u8 {
    chart
        .find_star(star)
        .unwrap_or_else(|| panic!("{star} not placed"))
        .1
}

#[test]
fn year_pillar_and_polarity() {
    let c = golden();
    assert_eq!((c.year_stem, c.year_branch), (S::Geng, B::Wu));
    assert_eq!(c.polarity, Polarity::Yang);
    assert_eq!(c.hour_branch, B::Wei);
}

#[test]
fn life_palace_and_element() {
    let c = golden();
    assert_eq!(c.life_palace, 8);
    let life = c.life_palace().unwrap();
    assert_eq!(life.branch, B::Zi);
    assert_eq!(life.stem, S::Wu);
    assert_eq!(life.name, PalaceName::Life);
    assert_eq!(c.five_element, FiveElementCycle::Fire6);
    assert_eq!(c.lunar_day.day(), 15);
}

#[test]
fn palace_stems() {
    let c = golden();
    let expected = [
        S::Xin,
        S::Ren,
        S::Gui,
        S::Jia,
        S::Yi,
        S::Bing,
        S::Ding,
        S::Wu,
        S::Ji,
        S::Wu,
        S::Ji,
        S::Geng,
    ];
    for (p, stem) in c.palaces.iter().zip(expected) {
        assert_eq!(p.stem, stem, "palace {}", p.number);
    }
}

#[test]
fn palace_names() {
    let c = golden();
    let expected = [
        (8, PalaceName::Life),
        (7, PalaceName::Siblings),
        (6, PalaceName::Spouse),
        (5, PalaceName::Children),
        (4, PalaceName::Wealth),
        (3, PalaceName::Health),
        (2, PalaceName::Travel),
        (1, PalaceName::Friends),
        (12, PalaceName::Career),
        (11, PalaceName::Property),
        (10, PalaceName::Fortune),
        (9, PalaceName::Parents),
    ];
    for (number, name) in expected {
        assert_eq!(c.palace(number).unwrap().name, name, "palace {number}");
    }
}

#[test]
fn major_stars() {
    let c = golden();
    assert_eq!(c.ziwei_palace, 9);
    let expected = [
        (StarKind::ZiWei, 9),
        (StarKind::PoJun, 9),
        (StarKind::TianJi, 8),
        (StarKind::TaiYang, 6),
        (StarKind::WuQu, 5),
        (StarKind::QiSha, 5),
        (StarKind::TianTong, 4),
        (StarKind::TianLiang, 4),
        (StarKind::TianXiang, 3),
        (StarKind::JuMen, 2),
        (StarKind::LianZhen, 1),
        (StarKind::TanLang, 1),
        (StarKind::TaiYin, 12),
        (StarKind::TianFu, 11),
    ];
    for (star, palace) in expected {
        assert_eq!(palace_of(&c, star), palace, "{star}");
    }
    let total: usize = c.palaces.iter().map(|p| p.stars.main.len()).sum();
    assert_eq!(total, 14);
}

#[test]
fn minor_stars() {
    let c = golden();
    assert_eq!(palace_of(&c, StarKind::YouBi), 1);
    assert_eq!(palace_of(&c, StarKind::ZuoFu), 5);
    assert_eq!(palace_of(&c, StarKind::WenChang), 11);
    assert_eq!(palace_of(&c, StarKind::WenQu), 7);
}

#[test]
fn supplementary_stars() {
    let c = golden();
    let expected = [
        (StarKind::LuCun, 4),
        (StarKind::QingYang, 5),
        (StarKind::TuoLuo, 3),
        (StarKind::TianKui, 9),
        (StarKind::TianYue, 3),
        (StarKind::TianXing, 10),
        (StarKind::TianYao, 2),
        (StarKind::SanTai, 7),
        (StarKind::BaZuo, 11),
        (StarKind::DiKong, 12),
        (StarKind::DiJie, 2),
        (StarKind::HuoXing, 4),
        (StarKind::LingXing, 6),
    ];
    for (star, palace) in expected {
        assert_eq!(palace_of(&c, star), palace, "{star}");
    }
    assert_eq!(c.palaces.iter().map(|p| p.stars.len()).sum::<usize>(), 31);
}

#[test]
fn transformations() {
    let c = golden();
    let expected = [
        (Transformation::Lu, StarKind::TaiYang, 6),
        (Transformation::Quan, StarKind::WuQu, 5),
        (Transformation::Ke, StarKind::TaiYin, 12),
        (Transformation::Ji, StarKind::TianTong, 4),
    ];
    for (assignment, (t, star, palace)) in c.transformations.iter().zip(expected) {
        assert_eq!(assignment.transformation, t);
        assert_eq!(assignment.star, star);
        assert_eq!(assignment.palace, Some(palace));
        let (placed, _) = find_star_by_name(&c.palaces, star.name()).unwrap();
        assert_eq!(placed.transformations, vec![t]);
    }
    assert_eq!(c.unplaced_transformations().count(), 0);
}

#[test]
fn summary() {
    let c = golden();
    assert_eq!(c.summary.life_main_star, Some(StarKind::TianJi));
    let marks: Vec<_> = c
        .summary
        .transformations
        .iter()
        .map(|m| (m.palace, m.star, m.transformation))
        .collect();
    assert_eq!(
        marks,
        vec![
            (4, StarKind::TianTong, Transformation::Ji),
            (5, StarKind::WuQu, Transformation::Quan),
            (6, StarKind::TaiYang, Transformation::Lu),
            (12, StarKind::TaiYin, Transformation::Ke),
        ]
    );
}

#[test]
fn major_limits_counterclockwise() {
    let c = golden();
    let expected = [
        (8, 6),
        (7, 16),
        (6, 26),
        (5, 36),
        (4, 46),
        (3, 56),
        (2, 66),
        (1, 76),
        (12, 86),
        (11, 96),
        (10, 106),
        (9, 116),
    ];
    for (number, start) in expected {
        assert_eq!(
            c.palace(number).unwrap().major_limit,
            Some(AgeRange {
                start,
                end: start + 9
            }),
            "palace {number}"
        );
    }
}

#[test]
fn annual_flow_window() {
    let c = golden();
    for p in &c.palaces {
        let flow = p.annual_flow.unwrap();
        assert_eq!(flow.year, 2024 + i32::from(p.number));
        // Flow branch runs three ahead of the palace branch in this window.
        assert_eq!(flow.branch, p.branch.offset(3));
        assert_eq!(flow.year_branch, year_pillar(flow.year).1);
    }
    let p1 = c.palace(1).unwrap().annual_flow.unwrap();
    assert_eq!((p1.year, p1.branch, p1.year_branch), (2025, B::Shen, B::Si));
    let p2 = c.palace(2).unwrap().annual_flow.unwrap();
    assert_eq!((p2.year, p2.stem, p2.branch), (2026, S::Bing, B::You));
    assert_eq!(p2.year_branch, B::Wu);
}

#[test]
fn lookups() {
    let c = golden();
    assert_eq!(c.palace_by_name(PalaceName::Career).unwrap().number, 12);
    assert_eq!(c.palace_by_branch(B::Si).unwrap().number, 1);
    assert!(c.palace(0).is_none());
    assert!(c.palace(13).is_none());
}

#[test]
fn male_same_birth_runs_clockwise() {
    let input = ChartInput::new(1990, 6, 15, 14, Gender::Male);
    let c = calculate(&input, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()).unwrap();
    assert_eq!(
        c.palace(9).unwrap().major_limit,
        Some(AgeRange { start: 16, end: 25 })
    );
    assert_eq!(
        c.palace(7).unwrap().major_limit,
        Some(AgeRange {
            start: 116,
            end: 125
        })
    );
}
