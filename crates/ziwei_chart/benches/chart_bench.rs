use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::ApproximateLunarCalendar;
use ziwei_chart::{
    Aspect, ChartConfig, ChartInput, Gender, Timeframe, calculate, calculate_with,
    monthly_palaces, resolve_palace_for_aspect,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 1).unwrap_or_default()
}

fn pipeline_bench(c: &mut Criterion) {
    let input = ChartInput::new(1990, 6, 15, 14, Gender::Female);
    let traced = ChartConfig::default().traced();

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box(&input), today()))
    });
    group.bench_function("calculate_traced", |b| {
        b.iter(|| calculate_with(black_box(&input), today(), &traced, &ApproximateLunarCalendar))
    });
    group.finish();
}

fn resolver_bench(c: &mut Criterion) {
    let input = ChartInput::new(1990, 6, 15, 14, Gender::Female);
    let Ok(chart) = calculate(&input, today()) else {
        return;
    };

    let mut group = c.benchmark_group("resolver");
    group.bench_function("natal", |b| {
        b.iter(|| resolve_palace_for_aspect(black_box(Aspect::Career), &chart, Timeframe::Natal))
    });
    group.bench_function("decade", |b| {
        b.iter(|| {
            resolve_palace_for_aspect(
                black_box(Aspect::Wealth),
                &chart,
                Timeframe::Decade { today: today() },
            )
        })
    });
    group.bench_function("monthly_palaces", |b| {
        b.iter(|| monthly_palaces(&chart, black_box(2026)))
    });
    group.finish();
}

criterion_group!(benches, pipeline_bench, resolver_bench);
criterion_main!(benches);
