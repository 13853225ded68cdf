//! Plain-text chart rendering.

use std::fmt;

use ziwei_chart::{ChartData, Palace, Star};

fn star_label(star: &Star) -> String {
    let mut s = star.name().to_string();
    if star.is_bright() {
        s.push('*');
    }
    for t in &star.transformations {
        s.push_str(t.name());
    }
    s
}

fn palace_line(p: &Palace, life: u8) -> String {
    let stars: Vec<String> = p.stars.iter().map(star_label).collect();
    let limit = p
        .major_limit
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".into());
    let flow = p
        .annual_flow
        .map(|f| format!("{} {}{}", f.year, f.stem, f.branch))
        .unwrap_or_else(|| "-".into());
    let marker = if p.number == life { ">" } else { " " };
    format!(
        "{marker}{:>2} {}{} {:<4} {:>7}  {}  {}",
        p.number,
        p.stem,
        p.branch,
        p.name.name(),
        limit,
        flow,
        stars.join(" ")
    )
}

/// Header line, one line per palace, then the transformation marks.
pub struct ChartText<'a>(pub &'a ChartData);

impl fmt::Display for ChartText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chart = self.0;
        let input = &chart.input;
        if !input.name.is_empty() {
            writeln!(f, "{}", input.name)?;
        }
        writeln!(
            f,
            "{:04}-{:02}-{:02} {:02}h {} | {}{}年 {} | {}时 | 农历{} | {}",
            input.year,
            input.month,
            input.day,
            input.hour,
            input.gender,
            chart.year_stem,
            chart.year_branch,
            chart.polarity.name(),
            chart.hour_branch,
            chart.lunar_day.label(),
            chart.five_element,
        )?;
        for p in &chart.palaces {
            writeln!(f, "{}", palace_line(p, chart.life_palace))?;
        }
        let marks: Vec<String> = chart
            .transformations
            .iter()
            .map(|t| match t.palace {
                Some(n) => format!("{}{}@{n}", t.star, t.transformation),
                None => format!("{}{}@-", t.star, t.transformation),
            })
            .collect();
        writeln!(f, "四化: {}", marks.join(" "))?;
        if let Some(star) = chart.summary.life_main_star {
            writeln!(f, "命主星: {star}")?;
        }
        Ok(())
    }
}
