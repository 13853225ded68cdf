mod config;
mod logger;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use ziwei_base::{ApproximateLunarCalendar, LunarCalendar, hour_to_branch};
use ziwei_chart::{
    Aspect, ChartData, ChartInput, Gender, Timeframe, anchor_for, calculate_with,
    resolve_palace_for_aspect,
};

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging, including the per-step chart trace
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Gregorian birth date (YYYY-MM-DD)
    date: NaiveDate,
    /// Birth hour, 0-23
    hour: u8,
    #[arg(long, value_enum)]
    gender: GenderArg,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long)]
    email: Option<String>,
    /// Reference date for Annual Flow and age (default: local today)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

#[derive(Clone, Copy, ValueEnum)]
enum Lens {
    Natal,
    Decade,
    Annual,
    Monthly,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a natal chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Attach the per-step trace to the chart
        #[arg(long)]
        trace: bool,
    },
    /// Palace answering a life area under a temporal lens
    Resolve {
        #[command(flatten)]
        birth: BirthArgs,
        /// English key (career, wealth, ...) or Chinese palace name
        #[arg(long)]
        aspect: String,
        #[arg(long, value_enum, default_value = "natal")]
        lens: Lens,
        /// Target year for annual/monthly (default: reference year)
        #[arg(long)]
        year: Option<i32>,
        /// Target month for monthly, 1-12
        #[arg(long)]
        month: Option<u8>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Earthly Branch of a clock hour
    HourBranch {
        /// Hour in [0, 24)
        hour: f64,
    },
    /// Lunar day label of a Gregorian date (approximate calendar)
    LunarDay {
        /// Gregorian date (YYYY-MM-DD)
        date: NaiveDate,
    },
}

#[derive(Serialize)]
struct Resolution<'a> {
    aspect: Aspect,
    timeframe: Timeframe,
    anchor: Option<u8>,
    palace: Option<u8>,
    palace_name: Option<&'a str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "settings loaded");

    match cli.command {
        Commands::Chart {
            birth,
            format,
            trace,
        } => {
            let mut chart_config = config.chart;
            chart_config.trace |= trace || cli.verbose;
            let today = reference_date(birth.today);
            let chart = compute(&birth, today, &chart_config)?;
            match format.unwrap_or(config.output.format) {
                OutputFormat::Text => print!("{}", render::ChartText(&chart)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
            }
        }

        Commands::Resolve {
            birth,
            aspect,
            lens,
            year,
            month,
            format,
        } => {
            let aspect: Aspect = aspect.parse()?;
            let today = reference_date(birth.today);
            let chart = compute(&birth, today, &config.chart)?;
            let year = year.unwrap_or_else(|| today.year());
            let timeframe = match lens {
                Lens::Natal => Timeframe::Natal,
                Lens::Decade => Timeframe::Decade { today },
                Lens::Annual => Timeframe::Annual { year },
                Lens::Monthly => Timeframe::Monthly {
                    year,
                    month: month.context("--month is required for the monthly lens")?,
                },
            };
            let anchor = anchor_for(&chart, timeframe);
            let palace = resolve_palace_for_aspect(aspect, &chart, timeframe);
            if palace.is_none() {
                tracing::warn!(%aspect, ?timeframe, "anchor palace not found");
            }
            let resolution = Resolution {
                aspect,
                timeframe,
                anchor,
                palace,
                palace_name: palace
                    .and_then(|n| chart.palace(n))
                    .map(|p| p.name.name()),
            };
            match format.unwrap_or(config.output.format) {
                OutputFormat::Text => match (resolution.palace, resolution.anchor) {
                    (Some(p), Some(a)) => println!(
                        "{aspect}: palace {p} ({}), anchor palace {a}",
                        resolution.palace_name.unwrap_or("-")
                    ),
                    _ => println!("{aspect}: unresolved"),
                },
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&resolution)?)
                }
            }
        }

        Commands::HourBranch { hour } => {
            let branch = hour_to_branch(hour)?;
            println!("{} ({}) - index {}", branch.name(), branch.animal(), branch.index());
        }

        Commands::LunarDay { date } => {
            let month = u8::try_from(date.month()).context("month out of range")?;
            let day = u8::try_from(date.day()).context("day out of range")?;
            let lunar = ApproximateLunarCalendar.lunar_day(date.year(), month, day)?;
            println!("{} ({})", lunar.label(), lunar.day());
        }
    }

    Ok(())
}

fn reference_date(explicit: Option<NaiveDate>) -> NaiveDate {
    explicit.unwrap_or_else(|| chrono::Local::now().date_naive())
}

fn compute(
    birth: &BirthArgs,
    today: NaiveDate,
    chart_config: &ziwei_chart::ChartConfig,
) -> Result<ChartData> {
    let input = birth_input(birth)?;
    let chart = calculate_with(&input, today, chart_config, &ApproximateLunarCalendar)
        .with_context(|| format!("computing chart for {}", birth.date))?;
    tracing::info!(
        life_palace = chart.life_palace,
        element = %chart.five_element,
        "chart computed"
    );
    for entry in &chart.trace {
        tracing::debug!(step = %entry.step, "{}", entry.message);
    }
    for t in chart.unplaced_transformations() {
        tracing::warn!(star = %t.star, mark = %t.transformation, "transformation not placed");
    }
    Ok(chart)
}

fn birth_input(birth: &BirthArgs) -> Result<ChartInput> {
    let gender = match birth.gender {
        GenderArg::Male => Gender::Male,
        GenderArg::Female => Gender::Female,
    };
    let (Ok(month), Ok(day)) = (u8::try_from(birth.date.month()), u8::try_from(birth.date.day()))
    else {
        bail!("date {} out of range", birth.date);
    };
    let mut input =
        ChartInput::new(birth.date.year(), month, day, birth.hour, gender).with_name(&birth.name);
    if let Some(email) = &birth.email {
        input = input.with_email(checked_email(email)?);
    }
    Ok(input)
}

/// Minimal shape check for `--email`; the chart itself ignores the field.
fn checked_email(email: &str) -> Result<&str> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, host)) if !user.is_empty() && !host.is_empty() => Ok(email),
        _ => bail!("--email '{email}' is not an address"),
    }
}
