use criterion::{black_box, criterion_group, criterion_main, Criterion};
use note_proxy::ProcessingRequest;

// $ cargo bench -p note_proxy
//
// Validation runs on every request before the provider is called,
// so it should stay far below the cost of the round trip.

fn bench_from_body(c: &mut Criterion) {
    let valid = br#"{"content":"Buy milk, eggs and call the plumber tomorrow","prompt":"Turn this into a checklist"}"#;
    let missing = br#"{"content":"Buy milk"}"#;
    let malformed = b"not-json";

    c.bench_function("from_body valid", |b| {
        b.iter(|| ProcessingRequest::from_body(black_box(valid)))
    });

    c.bench_function("from_body missing field", |b| {
        b.iter(|| ProcessingRequest::from_body(black_box(missing)))
    });

    c.bench_function("from_body malformed", |b| {
        b.iter(|| ProcessingRequest::from_body(black_box(malformed)))
    });
}

criterion_group!(benches, bench_from_body);
criterion_main!(benches);
