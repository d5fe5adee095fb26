// benches/split_benchmark.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sms_split::*;

fn benchmark_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in [160, 1000, 10000].iter() {
        let message = "lorem ipsum dolor sit amet, ".repeat(*size / 28 + 1);
        let message = &message[..*size];

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("gsm", size), message, |b, message| {
            let splitter = Splitter::new();
            b.iter(|| splitter.split("sender", &["recipient"], message).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("utf16", size), message, |b, message| {
            let mut splitter = Splitter::new();
            splitter.set_encoder(Utf16);
            splitter.set_message_bytes(DEFAULT_SMS_BYTES * 2);
            b.iter(|| splitter.split("sender", &["recipient"], message).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_split);
criterion_main!(benches);
