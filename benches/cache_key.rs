use criterion::{black_box, criterion_group, criterion_main, Criterion};

use astrocast::CacheKey;

fn bench_key_derivation(c: &mut Criterion) {
    c.bench_function("compose_horoscope_key", |b| {
        b.iter(|| {
            CacheKey::compose("horoscope_daily")
                .field("sign", black_box("aries"))
                .field("language", black_box("English"))
                .field("date", black_box("2026-08-06"))
                .finish()
        })
    });

    c.bench_function("compose_matchmaking_key", |b| {
        b.iter(|| {
            CacheKey::compose("matchmaking")
                .field("subject_a", black_box("asha rao|1990-06-15||pune"))
                .field("subject_b", black_box("ravi iyer|1988-02-02|06:30:00|chennai"))
                .field("language", black_box("English"))
                .finish()
        })
    });
}

criterion_group!(benches, bench_key_derivation);
criterion_main!(benches);
