use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqllexrs::{tokenize, Lexer};
use sqllexrs_benches::{statement_of_size, PROCEDURE_SCRIPT, SAMPLE_STATEMENTS};

fn bench_tokenize_samples(c: &mut Criterion) {
    c.bench_function("tokenize_samples", |b| {
        b.iter(|| {
            for sql in SAMPLE_STATEMENTS {
                let _ = black_box(tokenize(black_box(sql)));
            }
        })
    });
}

fn bench_tokenize_individual(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_individual");

    let cases = [
        ("simple_select", SAMPLE_STATEMENTS[0]),
        ("aggregate_select", SAMPLE_STATEMENTS[1]),
        ("insert_with_string", SAMPLE_STATEMENTS[2]),
        ("create_table", SAMPLE_STATEMENTS[3]),
        ("commented_update", SAMPLE_STATEMENTS[4]),
    ];

    for (name, sql) in cases {
        group.bench_function(name, |b| b.iter(|| black_box(tokenize(black_box(sql)))));
    }

    group.finish();
}

fn bench_tokenize_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_input_sizes");

    for size in [50, 500, 5_000, 50_000] {
        let sql = statement_of_size(size);
        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| black_box(tokenize(black_box(&sql))))
        });
    }

    group.finish();
}

fn bench_tokenize_preserving_whitespace(c: &mut Criterion) {
    let lexer = Lexer::new().preserve_whitespace(true);
    c.bench_function("tokenize_procedure_script_whitespace", |b| {
        b.iter(|| black_box(lexer.tokenize(black_box(PROCEDURE_SCRIPT))))
    });
}

criterion_group!(
    benches,
    bench_tokenize_samples,
    bench_tokenize_individual,
    bench_tokenize_sizes,
    bench_tokenize_preserving_whitespace
);
criterion_main!(benches);
