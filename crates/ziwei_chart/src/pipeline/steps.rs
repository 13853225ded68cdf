//! The 12 pipeline steps, in execution order.
//!
//! Each step takes the builder by value and returns it with its own fields
//! filled in. A step reads only what earlier steps wrote.

use chrono::Datelike;
use ziwei_base::{
    MINOR_STARS, PALACE_STEM_ORDER, Polarity, StarKind, annual_flow_window_start,
    day_star_branches, fire_bell_branches, five_element_cycle, flow_year_pillar,
    hour_star_branches, hour_to_branch, life_palace_branch, main_stars_at, minor_star_branch,
    month_star_branches, palace_branch, palace_of_branch, palace_offset, palace_ten_stem,
    rotated_name, transformations_for_stem, year_pillar as pillar_of, year_polarity,
    year_star_branches, ziwei_branch,
};

use super::builder::{ChartBuilder, need};
use crate::chart::{AgeRange, AnnualFlow, TransformationAssignment};
use crate::error::ChartError;
use crate::input::Gender;
use crate::trace::PipelineStep as Step;

type StepResult<'a> = Result<ChartBuilder<'a>, ChartError>;

/// 1. Stem and branch of the birth year.
pub(crate) fn year_pillar(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let year = b.input.year;
    let (stem, branch) = pillar_of(year);
    b.year_pillar = Some((stem, branch));
    b.trace
        .record(Step::YearPillar, || format!("{year} -> {stem}{branch}"));
    Ok(b)
}

/// 2. Yin/yang of the birth year.
pub(crate) fn polarity(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let p = year_polarity(b.input.year);
    b.polarity = Some(p);
    b.trace.record(Step::Polarity, || p.name().to_string());
    Ok(b)
}

/// 3. Palace stems, ascending from palace 10.
pub(crate) fn palace_stems(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let (year_stem, _) = need(b.year_pillar, Step::PalaceStems, "year pillar")?;
    let start = palace_ten_stem(year_stem);
    for (i, &number) in PALACE_STEM_ORDER.iter().enumerate() {
        b.draft_mut(number).stem = Some(start.offset(i as i32));
    }
    b.trace
        .record(Step::PalaceStems, || format!("palace 10 starts at {start}"));
    Ok(b)
}

/// 4. Hour branch and the Life Palace.
pub(crate) fn life_palace(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let hour = hour_to_branch(f64::from(b.input.hour))?;
    let branch = life_palace_branch(b.input.month, hour)?;
    let palace = palace_of_branch(branch);
    let month = b.input.month;
    b.hour_branch = Some(hour);
    b.life_palace = Some(palace);
    b.trace.record(Step::LifePalace, || {
        format!("hour {hour}, month {month} -> palace {palace} ({branch})")
    });
    Ok(b)
}

/// 5. Names rotate counterclockwise from the Life Palace.
pub(crate) fn palace_names(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let life = need(b.life_palace, Step::PalaceNames, "life palace")?;
    for draft in &mut b.palaces {
        let name = rotated_name(life, draft.number).ok_or_else(|| ChartError::LookupMiss {
            table: "palace names",
            key: format!("anchor {life}, palace {}", draft.number),
        })?;
        draft.name = Some(name);
    }
    b.trace
        .record(Step::PalaceNames, || format!("命宫 at palace {life}"));
    Ok(b)
}

/// 6. Element cycle from the Life Palace's stem and branch.
pub(crate) fn five_elements(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let life = need(b.life_palace, Step::FiveElements, "life palace")?;
    let draft = b.draft(life);
    let stem = need(draft.stem, Step::FiveElements, "life palace stem")?;
    let cycle = five_element_cycle(stem, draft.branch)?;
    b.five_element = Some(cycle);
    b.trace.record(Step::FiveElements, || {
        format!("{stem}{} -> {cycle}", palace_branch(life))
    });
    Ok(b)
}

/// 7. 紫微 from the lunar day and element cycle.
pub(crate) fn ziwei(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let cycle = need(b.five_element, Step::ZiWei, "five element cycle")?;
    let input = b.input;
    let day = b.calendar.lunar_day(input.year, input.month, input.day)?;
    let palace = palace_of_branch(ziwei_branch(day, cycle));
    b.lunar_day = Some(day);
    b.ziwei_palace = Some(palace);
    b.place(StarKind::ZiWei, palace);
    b.trace.record(Step::ZiWei, || {
        format!("lunar day {day}, {cycle} -> palace {palace}")
    });
    Ok(b)
}

/// 8. The other 13 major stars from 紫微's branch.
pub(crate) fn major_stars(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let anchor = need(b.ziwei_palace, Step::MajorStars, "ziwei palace")?;
    let anchor_branch = palace_branch(anchor);
    for number in 1..=12u8 {
        for &star in main_stars_at(anchor_branch, palace_branch(number)) {
            if star != StarKind::ZiWei {
                b.place(star, number);
            }
        }
    }
    b.trace
        .record(Step::MajorStars, || format!("placed from {anchor_branch}"));
    Ok(b)
}

/// 9. The four minor stars, then the year, month, day, hour and fire/bell
/// groups.
pub(crate) fn minor_stars(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let hour = need(b.hour_branch, Step::MinorStars, "hour branch")?;
    let (year_stem, year_branch) = need(b.year_pillar, Step::MinorStars, "year pillar")?;
    let day = need(b.lunar_day, Step::MinorStars, "lunar day")?;
    let month = b.input.month;

    for star in MINOR_STARS {
        let branch = minor_star_branch(star, month, hour)?;
        b.place(star, palace_of_branch(branch));
    }

    let mut extra = Vec::with_capacity(13);
    extra.extend(year_star_branches(year_stem));
    extra.extend(month_star_branches(month)?);
    extra.extend(day_star_branches(month, day)?);
    extra.extend(hour_star_branches(hour));
    extra.extend(fire_bell_branches(year_branch, hour));
    for (star, branch) in extra {
        b.place(star, palace_of_branch(branch));
    }

    b.trace.record(Step::MinorStars, || {
        let placed: usize = b.palaces.iter().map(|p| p.stars.len()).sum();
        format!("{placed} stars on the chart")
    });
    Ok(b)
}

/// 10. Year-stem transformations; a missing target star drops its mark.
pub(crate) fn transformations(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let (year_stem, _) = need(b.year_pillar, Step::Transformations, "year pillar")?;
    for (transformation, star) in transformations_for_stem(year_stem) {
        let palace = b.palaces.iter_mut().find_map(|p| {
            let number = p.number;
            p.stars.find_mut(star).map(|s| {
                s.transformations.push(transformation);
                number
            })
        });
        match palace {
            Some(n) => b.trace.record(Step::Transformations, || {
                format!("{star}{transformation} in palace {n}")
            }),
            None => b.trace.record(Step::Transformations, || {
                format!("{star}{transformation} dropped: star not on chart")
            }),
        }
        b.transformations.push(TransformationAssignment {
            transformation,
            star,
            palace,
        });
    }
    Ok(b)
}

/// 11. Ten-year Major Limits from the Life Palace.
///
/// Clockwise for yang men and yin women, counterclockwise otherwise.
pub(crate) fn major_limits(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let cycle = need(b.five_element, Step::MajorLimits, "five element cycle")?;
    let polarity = need(b.polarity, Step::MajorLimits, "polarity")?;
    let life = need(b.life_palace, Step::MajorLimits, "life palace")?;
    let clockwise = matches!(
        (b.input.gender, polarity),
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin)
    );
    let direction = if clockwise { 1 } else { -1 };
    let start = cycle.major_limit_starting_age();
    for hop in 0..12u16 {
        let palace = palace_offset(life, direction * i32::from(hop));
        let from = start + 10 * hop;
        b.draft_mut(palace).major_limit = Some(AgeRange {
            start: from,
            end: from + 9,
        });
    }
    b.trace.record(Step::MajorLimits, || {
        let dir = if clockwise { "clockwise" } else { "counterclockwise" };
        format!("from age {start}, {dir}")
    });
    Ok(b)
}

/// 12. Annual Flow years for the 12-year window containing today.
pub(crate) fn annual_flow(mut b: ChartBuilder<'_>) -> StepResult<'_> {
    let first = annual_flow_window_start(b.today.year());
    for draft in &mut b.palaces {
        let year = first + i32::from(draft.number) - 1;
        let (stem, branch) = flow_year_pillar(year);
        draft.annual_flow = Some(AnnualFlow {
            year,
            stem,
            branch,
            year_branch: pillar_of(year).1,
        });
    }
    b.trace
        .record(Step::AnnualFlow, || format!("{first}..={}", first + 11));
    Ok(b)
}
