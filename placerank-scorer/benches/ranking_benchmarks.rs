//! Criterion benchmarks for the ranking engine.
//!
//! Measures ranking time across candidate set sizes (50, 200, 1000 places)
//! with parallel and sequential scoring, using the heuristic collaborators so
//! the numbers reflect engine overhead rather than model inference.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package placerank-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use placerank_core::{BudgetLevel, GeoPoint, Place, Review, UserProfile};
use placerank_scorer::{
    KeywordAttributeScorer, LexiconSentimentScorer, RankRequest, RankingConfig, RankingEngine,
};

/// Candidate set sizes to benchmark.
const PLACE_COUNTS: &[usize] = &[50, 200, 1000];

/// Review texts cycled through the generated places.
const REVIEWS: &[&str] = &[
    "Cozy corner with excellent coffee and free wi-fi available",
    "Lively and trendy, great for groups but noisy",
    "Romantic scenic view, perfect for a date",
    "الأكل لذيذ والمكان هادئ",
    "Terrible service, dirty tables",
];

/// Build `count` places spread over a small grid around central Cairo.
#[expect(
    clippy::float_arithmetic,
    reason = "place coordinates are offset from a fixed centre"
)]
fn generate_places(count: usize) -> Vec<Place> {
    let tiers = [0_i64, 1, 2, 3];
    let offsets = [0.0_f64, 0.01, 0.02, 0.05, 0.1, 0.2];
    (0..count)
        .zip(REVIEWS.iter().cycle())
        .zip(tiers.iter().cycle())
        .zip(offsets.iter().cycle())
        .map(|(((idx, text), tier), offset)| {
            let budget = BudgetLevel::try_from(*tier).unwrap_or_default();
            let mut place = Place::new(format!("Place {idx}"))
                .with_review(Review::new(*text))
                .with_review(Review::new("Good food"))
                .with_budget(budget);
            if let Ok(point) = GeoPoint::new(30.0444 + offset, 31.2357 - offset) {
                place = place.with_location(point);
            }
            place
        })
        .collect()
}

fn build_user() -> UserProfile {
    let user = UserProfile::new()
        .with_preference("Cozy", 0.8)
        .with_preference("Coffee", 0.5)
        .with_preference("Quiet", 0.3)
        .with_budget(BudgetLevel::default());
    match GeoPoint::new(30.0444, 31.2357) {
        Ok(point) => user.with_location(point),
        Err(_) => user,
    }
}

/// Benchmark ranking time for parallel and sequential scoring.
fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for &count in PLACE_COUNTS {
        let request = RankRequest::new(build_user(), generate_places(count));

        let throughput_size = u64::try_from(count).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));

        for (label, config) in [
            ("parallel", RankingConfig::default()),
            ("sequential", RankingConfig::default().sequential()),
        ] {
            let Ok(engine) = RankingEngine::new(
                config,
                KeywordAttributeScorer::default(),
                LexiconSentimentScorer::default(),
            ) else {
                continue;
            };
            group.bench_with_input(BenchmarkId::new(label, count), &request, |b, input| {
                b.iter(|| {
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking ranking performance, result is intentionally discarded"
                    )]
                    let _ = engine.rank(input);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
