use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::des::DES;

fn des_context(mode: CipherMode, parallel: bool) -> CipherContext {
    CipherContext::new(
        Box::new(DES::new().unwrap()),
        b"benchkey",
        mode,
        PaddingMode::PKCS7,
        &[0x24u8; 8],
        8,
        parallel,
    )
    .unwrap()
}

fn bench_des_modes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBE9C);
    let mut data = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut data);

    let mut group = c.benchmark_group("DES 64KiB");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for mode in [CipherMode::ECB, CipherMode::CBC, CipherMode::CTR] {
        let ctx = des_context(mode, false);
        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{mode:?}")),
            &data,
            |b, data| b.iter(|| ctx.encrypt(data).unwrap()),
        );
    }

    for mode in [CipherMode::ECB, CipherMode::CTR] {
        let ctx = des_context(mode, true);
        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{mode:?}")),
            &data,
            |b, data| b.iter(|| ctx.encrypt(data).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_des_modes);
criterion_main!(benches);
