use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use spatio_geohash::{Coordinate, bounding_box_bits, encode_geohash, geohash_queries, geohash_query};

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let coord = Coordinate::new(37.7853074, -122.4054274);
    for precision in [5, 10, 22] {
        group.bench_with_input(
            BenchmarkId::new("encode_geohash", precision),
            &precision,
            |b, &precision| b.iter(|| encode_geohash(black_box(coord), black_box(precision))),
        );
    }

    group.finish();
}

fn benchmark_query_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_planning");

    let tokyo = Coordinate::new(35.68944, 139.69167);

    group.bench_function("bounding_box_bits", |b| {
        b.iter(|| bounding_box_bits(black_box(tokyo), black_box(10_000.0)))
    });

    group.bench_function("geohash_query", |b| {
        b.iter(|| geohash_query(black_box("64m9yn96mx"), black_box(27)))
    });

    for radius_km in [0.1, 10.0, 1_000.0] {
        group.bench_with_input(
            BenchmarkId::new("geohash_queries", radius_km),
            &radius_km,
            |b, &radius_km| b.iter(|| geohash_queries(black_box(tokyo), black_box(radius_km))),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_encoding, benchmark_query_planning);
criterion_main!(benches);
