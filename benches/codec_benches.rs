//! Frame codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multigauge::{Channel, Command, Frame, QUERY};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("frame_encode_query", |b| {
        b.iter(|| {
            Frame::request(
                black_box(Channel::HighVoltage2),
                black_box(Command::HighVoltage),
                QUERY,
            )
            .to_bytes()
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("frame_decode_reply", |b| {
        b.iter(|| Frame::from_bytes(black_box(b">2021.5E-7\r")).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
