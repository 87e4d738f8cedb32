use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixelplot_core::{
    Canvas, CanvasOptions, Cartesian, CartesianConfig, IndexedDisplay, TickParams,
};

fn build_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001))
        .collect();
    (x, y)
}

fn bench_cartesian(c: &mut Criterion) {
    let mut group = c.benchmark_group("cartesian_render");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let (x, y) = build_data(n);
            b.iter(|| {
                let surface = IndexedDisplay::new(480, 320);
                let opts = CanvasOptions {
                    width: 480,
                    height: 320,
                    ..CanvasOptions::default()
                };
                let mut canvas = Canvas::new(surface, opts).unwrap();
                canvas.tick_params(TickParams::default()).unwrap();
                let chart =
                    Cartesian::new(&mut canvas, &x, &y, CartesianConfig::default()).unwrap();
                black_box(chart.color());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cartesian);
criterion_main!(benches);
