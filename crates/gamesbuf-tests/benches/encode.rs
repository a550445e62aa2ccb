use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gamesbuf_encoder::encode_catalog;
use gamesbuf_types::{Entry, Md5};
use gamesbuf_wire::layout::ENTRY_MAX_SIZE;

fn sample_entries(count: u32) -> Vec<Entry> {
    (0..count)
        .map(|i| Entry {
            name: format!("Game {i:05}"),
            hash: Md5::new([(i % 251) as u8; 16]),
            art: (i % 4 == 0).then(|| format!("art/{i:05}.png")),
            region: (i % 3) as u8,
            system: (i % 8) as u8,
        })
        .collect()
}

fn bench_encode_small(c: &mut Criterion) {
    let entries = sample_entries(1);

    c.bench_function("encode_single_entry", |b| {
        b.iter(|| encode_catalog(&entries));
    });
}

fn bench_encode_into_scratch(c: &mut Criterion) {
    let entry = Entry {
        name: "Super Metroid".to_string(),
        hash: Md5::new([0x21; 16]),
        art: Some("super-metroid.png".to_string()),
        region: 0,
        system: 3,
    };
    let mut scratch = [0u8; ENTRY_MAX_SIZE];

    c.bench_function("encode_into_scratch", |b| {
        b.iter(|| entry.encode_into(&mut scratch));
    });
}

fn bench_encode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_throughput");

    for count in [100, 1_000, 10_000] {
        let entries = sample_entries(count);
        let encoded_len = encode_catalog(&entries).len();

        #[allow(clippy::cast_possible_truncation)]
        group.throughput(Throughput::Bytes(encoded_len as u64));
        group.bench_with_input(
            BenchmarkId::new("encode", format!("{count}_entries")),
            &entries,
            |b, entries| {
                b.iter(|| encode_catalog(entries));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_into_scratch,
    bench_encode_throughput
);
criterion_main!(benches);
