// Criterion benchmarks for Intern Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use intern_match::core::{fallback::fallback_reply, scoring::score_listing, Ranker};
use intern_match::models::{Listing, UserProfile, ScoringWeights};

const SKILLS: &[&str] = &[
    "Python", "SQL", "Excel", "Communication", "HTML", "CSS", "JavaScript", "GIS",
    "Accounting", "Research", "Data Analysis", "Teaching", "AutoCAD", "Surveying",
];
const SECTORS: &[&str] = &[
    "Technology", "Healthcare", "Finance", "Environment", "Education", "Manufacturing",
];
const LOCATIONS: &[&str] = &["Remote", "Urban", "Rural", "Multiple Locations"];

fn create_listing(id: usize) -> Listing {
    Listing {
        id: Some(id.to_string()),
        title: format!("Internship {}", id),
        company: None,
        required_skills: (0..3).map(|k| SKILLS[(id + k * 5) % SKILLS.len()].to_string()).collect(),
        sector: SECTORS[id % SECTORS.len()].to_string(),
        location: LOCATIONS[id % LOCATIONS.len()].to_string(),
        description: None,
        duration: None,
        stipend: None,
    }
}

fn create_profile() -> UserProfile {
    UserProfile::new(["Python", "Data Analysis", "Excel"], "Technology", "Remote")
}

fn bench_score_listing(c: &mut Criterion) {
    let profile = create_profile();
    let listing = create_listing(0);
    let weights = ScoringWeights::default();

    c.bench_function("score_listing", |b| {
        b.iter(|| score_listing(black_box(&profile), black_box(&listing), black_box(&weights)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let profile = create_profile();

    let mut group = c.benchmark_group("ranking");

    for listing_count in [10, 50, 100, 500, 1000].iter() {
        let listings: Vec<Listing> = (0..*listing_count).map(create_listing).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", listing_count),
            listing_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(&profile), black_box(&listings)));
            },
        );
    }

    group.finish();
}

fn bench_fallback(c: &mut Criterion) {
    c.bench_function("fallback_reply", |b| {
        b.iter(|| fallback_reply(black_box("Hello, which sectors can I choose from?")));
    });
}

criterion_group!(benches, bench_score_listing, bench_ranking, bench_fallback);

criterion_main!(benches);
