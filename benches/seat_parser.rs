use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seat_parser::{fold_homoglyphs, parse_seat};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_seat sector only", |b| {
        b.iter(|| parse_seat(black_box(Some("A1 Ряд 5 Место 12")), 1))
    });

    c.bench_function("parse_seat with sector name", |b| {
        b.iter(|| parse_seat(black_box(Some("Сектор ВОСТОК Ряд 15 Место 23")), 1))
    });

    c.bench_function("parse_seat rejected", |b| {
        b.iter(|| parse_seat(black_box(Some("Входной билет без места")), 1))
    });
}

fn bench_fold(c: &mut Criterion) {
    let long = "ВОСТОЧНАЯ ТРИБУНА СЕКТОР А ".repeat(64);

    c.bench_function("fold_homoglyphs long", |b| {
        b.iter(|| fold_homoglyphs(black_box(&long)))
    });

    c.bench_function("fold_homoglyphs untouched", |b| {
        b.iter(|| fold_homoglyphs(black_box("партер 12")))
    });
}

criterion_group!(benches, bench_parse, bench_fold);
criterion_main!(benches);
