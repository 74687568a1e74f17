use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_pieces::core::{PieceSet, PieceShape};
use tetris_pieces::types::PieceKind;

fn bench_build_standard_set(c: &mut Criterion) {
    c.bench_function("build_standard_set", |b| {
        b.iter(|| black_box(PieceSet::standard()))
    });
}

fn bench_shape_from_literal(c: &mut Criterion) {
    c.bench_function("shape_from_literal_t", |b| {
        b.iter(|| PieceShape::from_literal(black_box(PieceKind::T.literal())))
    });
}

fn bench_next_rotation(c: &mut Criterion) {
    let set = PieceSet::standard();
    let mut piece = set.get(PieceKind::L).unwrap();

    c.bench_function("next_rotation", |b| {
        b.iter(|| {
            piece = black_box(piece.next_rotation());
        })
    });
}

fn bench_same_shape(c: &mut Criterion) {
    let a = PieceShape::from_literal("0 0 1 0 1 1 2 0").unwrap();
    let b2 = PieceShape::from_literal("2 0 1 1 0 0 1 0").unwrap();

    c.bench_function("same_shape", |b| {
        b.iter(|| black_box(&a).same_shape(black_box(&b2)))
    });
}

criterion_group!(
    benches,
    bench_build_standard_set,
    bench_shape_from_literal,
    bench_next_rotation,
    bench_same_shape
);
criterion_main!(benches);
