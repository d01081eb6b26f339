//! Benchmark – `serialsub::RuleSet::apply` against the rule-by-rule baseline
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serialsub::{ReplaceOptions, RuleSet, baseline::sequential_replace};

/// Deterministic text of exactly `target_len` bytes where roughly one word in
/// eight is a replacement candidate.
fn make_text(target_len: usize) -> String {
    const WORDS: [&str; 8] = ["lorem", "old1", "ipsum", "dolor", "sit", "amet", "old2", "elit"];
    let mut s = String::with_capacity(target_len + 8);
    let mut i = 0usize;
    while s.len() < target_len {
        s.push_str(WORDS[i % WORDS.len()]);
        s.push(' ');
        i = i.wrapping_mul(31).wrapping_add(7);
    }
    s.truncate(target_len);
    s
}

fn make_rules(count: usize, options: ReplaceOptions) -> RuleSet {
    let rules = (0..count).map(|i| (format!("old{i}"), format!("replacement{i}")));
    RuleSet::with_options(rules, options).expect("benchmark rules are valid")
}

fn bench_batch_replace(c: &mut Criterion) {
    let text = make_text(1 << 20);
    let mut group = c.benchmark_group("batch_replace");

    for &count in &[1usize, 3, 16, 64] {
        for (name, options) in [
            ("exact", ReplaceOptions::default()),
            (
                "fold",
                ReplaceOptions {
                    case_insensitive: true,
                },
            ),
        ] {
            let rules = make_rules(count, options);
            group.bench_with_input(BenchmarkId::new(name, count), &rules, |b, rules| {
                b.iter(|| black_box(rules.apply(black_box(&text))));
            });
        }

        let rules = make_rules(count, ReplaceOptions::default());
        group.bench_with_input(BenchmarkId::new("baseline", count), &rules, |b, rules| {
            b.iter(|| black_box(sequential_replace(black_box(&text), rules)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_batch_replace }
criterion_main!(benches);
