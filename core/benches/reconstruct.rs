use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::{BigInt, Sign};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use shamir_core::{Dealer, SecretReconstructor};

const THRESHOLDS: &[usize] = &[3, 5, 10, 20];
const EXTRA_SHARES: usize = 2;

fn random_secret(rng: &mut ChaCha20Rng) -> BigInt {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    BigInt::from_bytes_be(Sign::Plus, &bytes)
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct_secret");
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);

    for &k in THRESHOLDS {
        let secret = random_secret(&mut rng);
        let dealer = Dealer::new(k, k + EXTRA_SHARES)
            .expect("valid threshold configuration");
        let points = dealer
            .split(&secret, &mut rng)
            .expect("splitting succeeds");

        let mut engine =
            SecretReconstructor::new(k).expect("non-zero threshold");
        engine.add_points(points).expect("distinct x-coordinates");

        group.bench_function(format!("{k}-of-{}", k + EXTRA_SHARES), |b| {
            b.iter(|| {
                let recovered = black_box(&engine)
                    .reconstruct_secret()
                    .expect("reconstruction succeeds");
                assert_eq!(recovered, secret);
            });
        });
    }

    group.finish();
}

fn bench_decode_record(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let dealer = Dealer::new(10, 50).expect("valid threshold configuration");
    let points = dealer
        .split(&random_secret(&mut rng), &mut rng)
        .expect("splitting succeeds");
    let radices = [2, 7, 16, 36].map(|base| {
        math::Radix::new(base).expect("radix in range")
    });
    let json = dealer
        .encode_record(&points, &radices)
        .and_then(|record| Ok(record.to_json_pretty()?))
        .expect("record encodes");

    c.bench_function("decode_record/10-of-50", |b| {
        b.iter(|| {
            let record = shamir_core::ShareRecord::from_json(black_box(&json))
                .expect("record parses");
            SecretReconstructor::from_record(&record)
                .expect("shares decode")
                .reconstruct_secret()
                .expect("reconstruction succeeds")
        });
    });
}

criterion_group!(benches, bench_reconstruct, bench_decode_record);
criterion_main!(benches);
