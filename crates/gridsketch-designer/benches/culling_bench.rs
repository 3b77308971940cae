use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridsketch_designer::{
    render_plan, ObjectStore, Point, SelectionResolver, ShapeType, Style, StyleDefaults,
    ViewportSampler,
};

fn populated_store(count: usize) -> ObjectStore {
    let mut store = ObjectStore::new();
    let kinds = [
        ShapeType::Line,
        ShapeType::Circle,
        ShapeType::Rectangle,
        ShapeType::Diamond,
    ];
    for i in 0..count {
        let x = (i % 200) as f64 * 7.0;
        let y = (i / 200) as f64 * 7.0;
        let kind = kinds[i % kinds.len()];
        let g = kind.compute(Point::new(x, y), Point::new(x + 5.0, y + 3.0));
        store.create(kind, &g.vertices, Style::default());
    }
    store
}

fn bench_visible_objects(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/visible_objects");

    for count in [1_000usize, 10_000, 50_000] {
        let store = populated_store(count);
        let mut sampler = ViewportSampler::default();
        sampler
            .update_window(Point::new(100.0, 100.0), 40.0, 30.0)
            .unwrap();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| black_box(sampler.visible_objects(store).len()));
        });
    }

    group.finish();
}

fn bench_pick_and_plan(c: &mut Criterion) {
    let store = populated_store(10_000);
    let mut sampler = ViewportSampler::default();
    sampler
        .update_window(Point::new(0.0, 0.0), 200.0, 150.0)
        .unwrap();
    let visible = sampler.visible_objects(&store);
    let defaults = StyleDefaults::default();

    c.bench_function("selection/pick_10k", |b| {
        b.iter(|| SelectionResolver::pick(black_box(Point::new(72.0, 71.0)), &visible, 0.3));
    });

    c.bench_function("render_plan/10k", |b| {
        b.iter(|| black_box(render_plan(&visible, None, &store, &defaults).len()));
    });
}

criterion_group!(benches, bench_visible_objects, bench_pick_and_plan);
criterion_main!(benches);
