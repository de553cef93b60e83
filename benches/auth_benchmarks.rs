use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daybook::auth::{issue_token, validate_token};

const SECRET: &[u8] = b"bench-secret";

fn bench_token_issue(c: &mut Criterion) {
    c.bench_function("issue_token", |b| {
        b.iter(|| issue_token(black_box(42), SECRET, 10))
    });
}

fn bench_token_validate(c: &mut Criterion) {
    let token = issue_token(42, SECRET, 10).unwrap();

    c.bench_function("validate_token", |b| {
        b.iter(|| validate_token(black_box(&token), SECRET))
    });
}

fn bench_password_hashing(c: &mut Criterion) {
    // Minimum cost; DEFAULT_COST takes hundreds of milliseconds per iteration
    c.bench_function("bcrypt_hash_min_cost", |b| {
        b.iter(|| bcrypt::hash(black_box("pw123"), 4))
    });

    let hash = bcrypt::hash("pw123", 4).unwrap();
    c.bench_function("bcrypt_verify_min_cost", |b| {
        b.iter(|| bcrypt::verify(black_box("pw123"), &hash))
    });
}

criterion_group!(
    benches,
    bench_token_issue,
    bench_token_validate,
    bench_password_hashing
);
criterion_main!(benches);
