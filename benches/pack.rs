use std::time::Duration;

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    measurement::WallTime,
    BenchmarkId,
    Criterion,
    Throughput,
};
use jintegers::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[inline(always)]
fn bench_pack(c: &mut Criterion<WallTime>) {
    let mut rng = SmallRng::seed_from_u64(42);

    macro_rules! bench_width {
        ($codec:ident, $native:ty) => {{
            let mut group = c.benchmark_group(stringify!($codec));
            group.throughput(Throughput::Bytes(<$codec>::SIZE as u64));

            let value = rng.gen_range(<$codec>::MIN..=<$codec>::MAX);
            let mut buf = ByteBuffer::new([0u8; 64]);
            let offset = rng.gen_range(0..64 - <$codec>::SIZE);

            group.bench_function(BenchmarkId::new("pack_big_endian", "native"), |b| {
                b.iter(|| (black_box(value) as $native).to_be_bytes());
            });

            group.bench_function(BenchmarkId::new("pack_big_endian", "codec"), |b| {
                b.iter(|| $codec::pack_big_endian(black_box(value)));
            });

            group.bench_function(BenchmarkId::new("pack_little_endian", "codec"), |b| {
                b.iter(|| $codec::pack_little_endian(black_box(value)));
            });

            group.bench_function(BenchmarkId::new("pack_to_buffer", "codec"), |b| {
                b.iter(|| {
                    $codec::pack_to_buffer(black_box(value), &mut buf, black_box(offset)).is_ok()
                });
            });

            group.finish();
        }};
    }

    bench_width!(Integer16, u16);
    bench_width!(Integer24, u32);
    bench_width!(Integer32, u32);
    bench_width!(Integer48, u64);
    bench_width!(Integer64, u64);
    bench_width!(Signed16, i16);
    bench_width!(Signed24, i32);
    bench_width!(Signed64, i64);
}

criterion_group!(
    name = bench;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(1))
        .sample_size(1000)
        .significance_level(0.01)
        .warm_up_time(Duration::from_secs(1));
    targets = bench_pack
);

criterion_main!(bench);
