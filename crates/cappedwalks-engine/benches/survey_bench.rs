use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cappedwalks_engine::builder::build_case_model;
use cappedwalks_engine::cases::Case;
use cappedwalks_engine::pipeline::run_survey_default;

fn bench_build_all_case_models(c: &mut Criterion) {
    c.bench_function("engine_build_all_case_models", |b| {
        b.iter(|| {
            for case in Case::enumerate() {
                black_box(build_case_model(black_box(case)));
            }
        })
    });
}

fn bench_full_survey(c: &mut Criterion) {
    c.bench_function("engine_full_survey", |b| {
        b.iter(|| run_survey_default().expect("survey should certify"))
    });
}

criterion_group!(benches, bench_build_all_case_models, bench_full_survey);
criterion_main!(benches);
