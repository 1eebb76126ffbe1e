// Revalidation cost per write
// Run with: cargo bench -p validated

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use validated::prelude::*;

/// One write through a container with a typical login-field rule list
fn bench_set_string(c: &mut Criterion) {
    let mut mail = Validated::new(
        String::new(),
        [not_empty(), has_suffix(".com"), is_email()],
    );

    c.bench_function("set_string_three_rules", |b| {
        b.iter(|| mail.set(black_box("user@example.com".to_string())));
    });
}

/// Rule list length scaling on a cheap predicate
fn bench_rule_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_count");
    for count in [1_usize, 8, 64] {
        let mut number = Validated::new(0_i64, (0..count).map(|i| greater(-(i as i64))));
        group.bench_function(count.to_string(), |b| {
            b.iter(|| number.set(black_box(1)));
        });
    }
    group.finish();
}

/// Observer fan-out cost
fn bench_observers(c: &mut Criterion) {
    let mut number = Validated::new(0_i64, [greater(0)]);
    for _ in 0..8 {
        number.subscribe(|snapshot| {
            black_box(snapshot.is_valid);
        });
    }

    c.bench_function("set_with_eight_observers", |b| {
        b.iter(|| number.set(black_box(1)));
    });
}

/// Write through the locked shared handle
fn bench_shared_set(c: &mut Criterion) {
    let shared = SharedValidated::new(0_i64, [greater(0), less_or_equal(100)]);

    c.bench_function("shared_set", |b| {
        b.iter(|| shared.set(black_box(50)));
    });
}

criterion_group!(
    benches,
    bench_set_string,
    bench_rule_count,
    bench_observers,
    bench_shared_set
);
criterion_main!(benches);
