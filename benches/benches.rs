use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use crypto_bigint::{NonZero, RandomMod, U4096};
use paillier_cipher::arithmetic::pow_mod;
use paillier_cipher::{EncryptionInputs, EncryptionKey, LargeBiPrimeSizedNumber};
use rand_core::OsRng;

const N: &str = "97431848911c007fa3a15b718ae97da192e68a4928c0259f2d19ab58ed01f1aa930e6aeb81f0d4429ac2f037def9508b91b45875c11668cea5dc3d4941abd8fbb2d6c8750e88a69727f982e633051f60252ad96ba2e9c9204f4c766c1c97bc096bb526e4b7621ec18766738010375829657c77a23faf50e3a31cb471f72c7abecdec61bdf45b2c73c666aa3729add2d01d7d96172353380c10011e1db3c47199b72da6ae769690c883e9799563d6605e0670a911a57ab5efc69a8c5611f158f1ae6e0b1b6434bafc21238921dc0b98a294195e4e88c173c8dab6334b207636774daad6f35138b9802c1784f334a82cbff480bb78976b22bb0fb41e78fdcb8095";

pub fn encryption_benches(c: &mut Criterion) {
    let mut g = c.benchmark_group("encryption benches");
    g.sample_size(10);

    let n = LargeBiPrimeSizedNumber::from_be_hex(N);
    let encryption_key = EncryptionKey::new(n).unwrap();
    let random_plaintext =
        || LargeBiPrimeSizedNumber::random_mod(&mut OsRng, &NonZero::new(n).unwrap());

    g.bench_function("encrypt() with sampled randomness", |bench| {
        bench.iter_batched(
            random_plaintext,
            |plaintext| encryption_key.encrypt(&plaintext, None, &mut OsRng),
            BatchSize::SmallInput,
        );
    });

    g.bench_function("encrypt_with_randomness()", |bench| {
        bench.iter_batched(
            || {
                (
                    random_plaintext(),
                    encryption_key.sample_randomness(&mut OsRng).unwrap(),
                )
            },
            |(plaintext, randomness)| {
                encryption_key.encrypt_with_randomness(&plaintext, &randomness)
            },
            BatchSize::SmallInput,
        );
    });

    g.bench_function("encrypt() of the demo encryption inputs", |bench| {
        bench.iter_batched(
            || {
                EncryptionInputs::new(
                    &encryption_key,
                    &random_plaintext(),
                    &encryption_key.sample_randomness(&mut OsRng).unwrap(),
                )
            },
            |encryption_inputs| encryption_inputs.encrypt(),
            BatchSize::SmallInput,
        );
    });

    for batch_size in [1, 10, 100] {
        g.bench_function(format!("encrypt_batch() of {batch_size}"), |bench| {
            bench.iter_batched(
                || {
                    (0..batch_size)
                        .map(|_| {
                            (
                                random_plaintext(),
                                encryption_key.sample_randomness(&mut OsRng).unwrap(),
                            )
                        })
                        .collect::<Vec<_>>()
                },
                |plaintexts_and_randomness| {
                    encryption_key.encrypt_batch(&plaintexts_and_randomness)
                },
                BatchSize::SmallInput,
            );
        });
    }

    g.finish();
}

pub fn arithmetic_benches(c: &mut Criterion) {
    let mut g = c.benchmark_group("arithmetic benches");
    g.sample_size(10);

    let n = LargeBiPrimeSizedNumber::from_be_hex(N);
    let encryption_key = EncryptionKey::new(n).unwrap();
    let n2 = *encryption_key.n2();
    let even_modulus = n2.wrapping_add(&U4096::ONE);

    for (name, modulus) in [("odd", n2), ("even", even_modulus)] {
        g.bench_function(format!("pow_mod() with a 2048-bit exponent, {name} modulus"), |bench| {
            bench.iter_batched(
                || {
                    (
                        U4096::random_mod(
                            &mut OsRng,
                            &NonZero::new(modulus).unwrap(),
                        ),
                        LargeBiPrimeSizedNumber::random_mod(&mut OsRng, &NonZero::new(n).unwrap()),
                    )
                },
                |(base, exponent)| pow_mod(&base, &exponent, &modulus),
                BatchSize::SmallInput,
            );
        });
    }

    g.bench_function("sample_randomness()", |bench| {
        bench.iter(|| encryption_key.sample_randomness(&mut OsRng));
    });

    g.finish();
}

criterion_group!(benches, encryption_benches, arithmetic_benches);
criterion_main!(benches);
