use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faultkd::{FaultCollector, Point};

fn benchmark_classify(c: &mut Criterion) {
    // A fault surface x = sin(y / 10) over a 200 x 200 grid.
    let mut collector = FaultCollector::new(0).unwrap();
    for y in 0..200 {
        for z in 0..200 {
            let (y, z) = (y as f64 * 0.5, z as f64 * 0.5);
            collector.add_point(Point::new((y / 10.0).sin(), y, z));
        }
    }
    let fault = collector.finish(4).unwrap();

    let mut elements = Vec::with_capacity(100_000);
    for i in 0..100_000 {
        let cx = ((i % 97) as f64 / 48.0) - 1.0;
        let cy = (i % 193) as f64 * 0.5;
        let cz = (i % 199) as f64 * 0.5;
        let h = 0.3;
        elements.push([
            [cx - h, cy - h, cz - h],
            [cx + h, cy - h, cz - h],
            [cx, cy + h, cz - h],
            [cx, cy, cz + h],
        ]);
    }

    c.bench_function("classify_all_100000", |b| {
        b.iter(|| black_box(fault.classify_all(black_box(&elements))))
    });
}

criterion_group!(benches, benchmark_classify);
criterion_main!(benches);
