//! Matches and ranks a fixed set of generated path-like candidates,
//! on the whole pipeline and on the bare V1 matcher.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fzpick::fuzzy_matcher::{FuzzyMatcher, v1::FuzzyMatcherV1};
use fzpick::{Matcher, OrderBy};

const SEPARATORS: [char; 4] = ['/', '_', '-', ' '];

fn generate_lines(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let words = rng.random_range(2..6);
            let mut line = String::new();
            for w in 0..words {
                if w > 0 {
                    line.push(SEPARATORS[rng.random_range(0..SEPARATORS.len())]);
                }
                let len = rng.random_range(3..10);
                line.extend((&mut rng).sample_iter(Alphanumeric).take(len).map(char::from));
            }
            line
        })
        .collect()
}

fn bench_match_all(c: &mut Criterion) {
    let lines = generate_lines(100_000);
    let matcher = Matcher::default();
    let candidates = matcher.candidates(lines.iter().map(String::as_str));

    let mut group = c.benchmark_group("match_all");
    for query in ["a", "ab", "test", "aBc/x"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| matcher.match_all(&candidates, query))
        });
    }
    group.finish();

    c.bench_function("run_by_length", |b| {
        let matcher = Matcher::builder().order_by(OrderBy::Length).build();
        b.iter(|| matcher.run(&candidates, "ab"))
    });

    c.bench_function("micro_v1", |b| {
        let m = FuzzyMatcherV1;
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_match(line, "test").is_some() {
                    count += 1;
                }
            }
            count
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_match_all
);
criterion_main!(benches);
