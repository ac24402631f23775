use calendar_picker::{Bounds, HitRegion, Picker, PickerOptions};
use month_grid::{
    month_grid, CalendarDate, Chrono, Civil, DateEngine, MonthGrid, WeekStart, YearMonth,
};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let month = YearMonth::new(2024, 1).unwrap();

    group.bench_function("month_grid", |b| {
        b.iter(|| month_grid(black_box(2024), black_box(1), black_box(true)))
    });

    group.bench_function("chrono", |b| {
        b.iter(|| MonthGrid::with_engine(Chrono, black_box(month), WeekStart::Sunday))
    });

    group.bench_function("civil", |b| {
        b.iter(|| MonthGrid::with_engine(Civil, black_box(month), WeekStart::Sunday))
    });
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_days");
    let start = date("1970-01-01");

    group.bench_function("chrono", |b| {
        b.iter(|| Chrono.add_days(black_box(start), black_box(10_000)))
    });

    group.bench_function("civil", |b| {
        b.iter(|| Civil.add_days(black_box(start), black_box(10_000)))
    });
}

fn bench_picker(c: &mut Criterion) {
    let options = PickerOptions::default().with_bounds(Bounds::new(
        Some(date("2024-02-10")),
        Some(date("2024-03-20")),
    ));

    let mut picker = Picker::new(options)
        .with_today(date("2024-02-14"))
        .with_focus_month(YearMonth::new(2024, 1).unwrap());

    picker.focus_input();

    {
        let mut group = c.benchmark_group("picker");

        group.bench_function("render", |b| b.iter(|| black_box(&picker).render(|props| props)));

        group.bench_function("navigate", |b| {
            b.iter(|| {
                picker.next();
                picker.prev();
            })
        });

        group.bench_function("dismiss", |b| {
            b.iter(|| {
                picker.focus_input();
                picker.pointer_down(black_box(HitRegion::Outside))
            })
        });
    }
}

criterion_group!(benches, bench_grid, bench_engine, bench_picker);
criterion_main!(benches);
