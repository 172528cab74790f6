use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqllexrs::{is_reserved_word, requires_quoting};

fn bench_requires_quoting(c: &mut Criterion) {
    let identifiers = [
        "customers",
        "order",
        "select",
        "my-table",
        "1abc",
        "a_perfectly_ordinary_column_name",
    ];

    c.bench_function("requires_quoting", |b| {
        b.iter(|| {
            for id in &identifiers {
                black_box(requires_quoting(black_box(id)));
            }
        })
    });
}

fn bench_is_reserved_word(c: &mut Criterion) {
    let words = ["select", "SELECT", "customers", "into", "x"];

    c.bench_function("is_reserved_word", |b| {
        b.iter(|| {
            for word in &words {
                black_box(is_reserved_word(black_box(word)));
            }
        })
    });
}

criterion_group!(benches, bench_requires_quoting, bench_is_reserved_word);
criterion_main!(benches);
