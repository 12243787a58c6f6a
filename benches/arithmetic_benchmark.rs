// ============================================================================
// Sezimal Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Digit Engine - addition and multiplication across operand sizes
// 2. Division - reciprocal-table hits against long division
// 3. Parsing and Bridges - numeral text, decimal and dozenal conversion
// 4. Value Types - integer powers, factorial and rational products
// ============================================================================

use bigdecimal::BigDecimal;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sezimal::prelude::*;

/// A numeral with `digits` integer and `digits` fractional digits
fn numeral(digits: usize) -> String {
    let run: String = (0..digits).map(|i| char::from(b'1' + (i % 5) as u8)).collect();
    format!("{run}.{run}")
}

// ============================================================================
// Digit Engine Benchmarks
// ============================================================================

fn benchmark_add_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_engine");

    for digits in [4usize, 16, 64].iter() {
        let a: Sezimal = numeral(*digits).parse().unwrap();
        let b: Sezimal = numeral(*digits / 2 + 1).parse().unwrap();

        group.bench_with_input(BenchmarkId::new("add", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a + *b));
        });

        group.bench_with_input(BenchmarkId::new("multiply", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a * *b));
        });
    }

    group.finish();
}

// ============================================================================
// Division Benchmarks
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");
    let dividend: Sezimal = "1234.5".parse().unwrap();

    // 13 is in the reciprocal table; 2345 needs long division
    for divisor in ["13", "2345", "0.51"].iter() {
        let divisor: Sezimal = divisor.parse().unwrap();
        group.bench_with_input(
            BenchmarkId::new("checked_div", divisor.to_string()),
            &divisor,
            |bench, divisor| {
                bench.iter(|| black_box(dividend.checked_div(divisor)));
            },
        );
    }

    let a: Sezimal = "-543210".parse().unwrap();
    let b: Sezimal = "123".parse().unwrap();
    group.bench_function("checked_divmod", |bench| {
        bench.iter(|| black_box(a.checked_divmod(&b)));
    });

    group.finish();
}

// ============================================================================
// Parsing and Bridge Benchmarks
// ============================================================================

fn benchmark_parsing_and_bridges(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing_and_bridges");

    group.bench_function("parse_numeral", |bench| {
        bench.iter(|| black_box("-1_234_505.0312e-3".parse::<Sezimal>()));
    });

    group.bench_function("parse_ratio", |bench| {
        bench.iter(|| black_box("1024/2310".parse::<SezimalFraction>()));
    });

    let decimal: BigDecimal = "-3.14159265".parse().unwrap();
    group.bench_function("from_decimal", |bench| {
        bench.iter(|| black_box(Sezimal::from_decimal(decimal.clone())));
    });

    let wide: BigDecimal = "221073919720733357899775.99999998346"
        .parse()
        .unwrap();
    group.bench_function("from_decimal_wide", |bench| {
        bench.iter(|| black_box(Sezimal::from_decimal(wide.clone())));
    });

    let value: Sezimal = "4344.1325".parse().unwrap();
    group.bench_function("to_decimal", |bench| {
        // Fresh clone so the cached decimal is not reused
        bench.iter(|| black_box(Sezimal::new(value.to_string()).map(|v| v.decimal().clone())));
    });

    group.bench_function("to_dozenal", |bench| {
        bench.iter(|| black_box(value.to_dozenal()));
    });

    group.finish();
}

// ============================================================================
// Value Type Benchmarks
// ============================================================================

fn benchmark_value_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_types");

    let base: Sezimal = "1.1".parse().unwrap();
    for exponent in [4i64, 16, 64, 1024].iter() {
        group.bench_with_input(BenchmarkId::new("powi", exponent), exponent, |bench, exponent| {
            bench.iter(|| black_box(base.powi(*exponent)));
        });
    }

    let n = SezimalInteger::new("100").unwrap();
    group.bench_function("factorial", |bench| {
        bench.iter(|| black_box(n.factorial()));
    });

    let third: SezimalFraction = "1/3".parse().unwrap();
    let fifth: SezimalFraction = "2/5".parse().unwrap();
    group.bench_function("fraction_product", |bench| {
        bench.iter(|| black_box(&third * &fifth));
    });

    group.bench_function("ln", |bench| {
        bench.iter(|| black_box(base.ln()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add_multiply,
    benchmark_division,
    benchmark_parsing_and_bridges,
    benchmark_value_types,
);
criterion_main!(benches);
