use criterion::{black_box, criterion_group, criterion_main, Criterion};

use monetary_rs::context::Context;
use monetary_rs::money::FixedMoney;
use monetary_rs::rounding::RoundingMode;

fn bench_fixed_money_construction(c: &mut Criterion) {
    c.bench_function("FixedMoney::of decimal string", |b| {
        b.iter(|| FixedMoney::of(black_box("12345.6789"), black_box("USD")))
    });
}

fn bench_fixed_money_addition(c: &mut Criterion) {
    let a = FixedMoney::of("12345.67", "USD").unwrap();
    let b = FixedMoney::of("98765.43", "USD").unwrap();

    c.bench_function("FixedMoney plus", |bencher| {
        bencher.iter(|| black_box(&a).plus(black_box(&b), RoundingMode::Unnecessary))
    });
}

fn bench_fixed_money_allocate(c: &mut Criterion) {
    let m = FixedMoney::of_with(
        "99999.99",
        "USD",
        Context::Default,
        RoundingMode::Unnecessary,
    )
    .unwrap();
    let ratios = [30i64, 20, 40, 40];

    c.bench_function("FixedMoney allocate four ways", |bencher| {
        bencher.iter(|| black_box(&m).allocate(black_box(&ratios)))
    });
}

criterion_group!(
    benches,
    bench_fixed_money_construction,
    bench_fixed_money_addition,
    bench_fixed_money_allocate
);
criterion_main!(benches);
