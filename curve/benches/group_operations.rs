use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use realcurve::{add, double, scalar_multiply, Curve, Point, RandomPoint};

fn curve() -> Curve {
    Curve::new(-1.0, 1.0)
}

fn random_point(rng: &mut StdRng) -> Point {
    curve()
        .random_point_in(rng, -1.0..3.0)
        .expect("curve has points over [-1, 3)")
}

fn bench_double(c: &mut Criterion) {
    let e = curve();
    let p = Point::new(0.0, 1.0);
    c.bench_function("double", |bencher| {
        bencher.iter(|| black_box(double(black_box(&p), &e)))
    });
}

fn bench_add(c: &mut Criterion) {
    let e = curve();
    let mut rng = StdRng::seed_from_u64(42);
    let p = random_point(&mut rng);
    let q = random_point(&mut rng);
    c.bench_function("add", |bencher| {
        bencher.iter(|| black_box(add(black_box(&p), black_box(&q), &e)))
    });
}

fn bench_snap(c: &mut Criterion) {
    let e = curve();
    c.bench_function("snap", |bencher| {
        bencher.iter(|| black_box(e.snap(black_box(0.75), black_box(-0.3))))
    });
}

fn bench_scalar_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_multiply");
    let e = curve();
    let p = Point::new(0.0, 1.0);

    for k in [3i64, 17, 255, 4096, -4096].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |bencher, &k| {
            bencher.iter(|| black_box(scalar_multiply(black_box(k), &p, &e)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_double,
    bench_add,
    bench_snap,
    bench_scalar_multiply
);
criterion_main!(benches);
