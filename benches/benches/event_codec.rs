use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use libscrawl::codec::{encode_line, LineDecoder};
use scrawl_benchmarks::random_events;

fn wire_bytes(count: usize) -> Vec<u8> {
    let mut wire = Vec::new();
    for event in random_events(count) {
        wire.extend_from_slice(&encode_line(&event).unwrap());
    }
    wire
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_encode");

    for count in [100, 1_000, 10_000] {
        let events = random_events(count);
        group.bench_with_input(
            BenchmarkId::new("encode_line", count),
            &events,
            |b, events| {
                b.iter(|| {
                    let mut bytes = 0usize;
                    for event in events {
                        bytes += encode_line(black_box(event)).unwrap().len();
                    }
                    black_box(bytes)
                })
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_decode");

    for count in [100, 1_000, 10_000] {
        let wire = wire_bytes(count);
        group.bench_with_input(
            BenchmarkId::new("decode_stream", count),
            &wire,
            |b, wire| {
                b.iter(|| {
                    let mut decoder = LineDecoder::new();
                    decoder.push_bytes(black_box(wire));
                    let mut decoded = 0usize;
                    while let Some(event) = decoder.next_event() {
                        black_box(event);
                        decoded += 1;
                    }
                    black_box(decoded)
                })
            },
        );
    }

    group.finish();
}

fn bench_decode_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_decode_chunked");

    // Socket reads arrive in arbitrary chunks; feed the decoder 4 KiB at a time.
    let wire = wire_bytes(10_000);
    group.bench_function("decode_chunked_4k", |b| {
        b.iter(|| {
            let mut decoder = LineDecoder::new();
            let mut decoded = 0usize;
            for chunk in wire.chunks(4096) {
                decoder.push_bytes(black_box(chunk));
                while let Some(event) = decoder.next_event() {
                    black_box(event);
                    decoded += 1;
                }
            }
            black_box(decoded)
        })
    });

    group.finish();
}

criterion_group!(codec_benches, bench_encode, bench_decode, bench_decode_chunked);
criterion_main!(codec_benches);
