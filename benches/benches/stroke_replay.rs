use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use libscrawl::event::Rgba;
use libscrawl::render::Renderer;
use scrawl_benchmarks::{random_events, NullSurface};

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_replay");

    for count in [1_000, 10_000, 100_000] {
        let events = random_events(count);
        group.bench_with_input(BenchmarkId::new("replay", count), &events, |b, events| {
            b.iter(|| {
                let mut renderer = Renderer::new(1280, 720, Rgba::BLACK);
                let mut surface = NullSurface::default();
                for event in events {
                    renderer.apply(&mut surface, black_box(event));
                }
                black_box(surface.calls)
            })
        });
    }

    group.finish();
}

criterion_group!(replay_benches, bench_replay);
criterion_main!(replay_benches);
