// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::{NaiveDate, TimeDelta};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tempus_core::math::interval::{Interval, Period};

const PAIRS: usize = 4096;

fn random_integer_pairs(rng: &mut StdRng) -> Vec<(Interval<i64>, Interval<i64>)> {
    (0..PAIRS)
        .map(|_| {
            let a = rng.random_range(0..1_000);
            let b = rng.random_range(0..1_000);
            let la = rng.random_range(1..200);
            let lb = rng.random_range(1..200);
            (Interval::new(a, a + la), Interval::new(b, b + lb))
        })
        .collect()
}

fn random_period_pairs(rng: &mut StdRng) -> Vec<(Period, Period)> {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
        .and_utc();

    let period = |rng: &mut StdRng| {
        let start = epoch + TimeDelta::minutes(rng.random_range(0..1_000_000));
        let end = start + TimeDelta::minutes(rng.random_range(1..100_000));
        Period::new(start, end)
    };

    (0..PAIRS).map(|_| (period(rng), period(rng))).collect()
}

fn bench_relation_to(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let integers = random_integer_pairs(&mut rng);
    let periods = random_period_pairs(&mut rng);

    let mut group = c.benchmark_group("relation_to");
    group.throughput(Throughput::Elements(PAIRS as u64));

    group.bench_with_input(BenchmarkId::new("i64", PAIRS), &integers, |b, pairs| {
        b.iter(|| {
            for (x, y) in pairs {
                black_box(x.relation_to(*y));
            }
        })
    });

    group.bench_with_input(BenchmarkId::new("period", PAIRS), &periods, |b, pairs| {
        b.iter(|| {
            for (x, y) in pairs {
                black_box(x.relation_to(*y));
            }
        })
    });

    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let periods = random_period_pairs(&mut rng);

    let mut group = c.benchmark_group("predicates");
    group.throughput(Throughput::Elements(PAIRS as u64));

    group.bench_function("overlaps", |b| {
        b.iter(|| periods.iter().filter(|(x, y)| x.overlaps(*y)).count())
    });
    group.bench_function("is_connected", |b| {
        b.iter(|| periods.iter().filter(|(x, y)| x.is_connected(*y)).count())
    });
    group.bench_function("is_before", |b| {
        b.iter(|| periods.iter().filter(|(x, y)| x.is_before(*y)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_relation_to, bench_predicates);
criterion_main!(benches);
