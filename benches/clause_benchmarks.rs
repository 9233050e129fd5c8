use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cupi_rs::{add_clauses_to_uri, Clauses, QueryOp, SortOrder};

const BASE: &str = "https://cuc.example.com:8443/vmrest/partitions";

pub fn clause_building_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clause_building");

    group.bench_function("query_sort_page", |b| {
        b.iter(|| {
            let clauses = Clauses::new()
                .query("name", QueryOp::StartsWith, "Sales")
                .and_then(|c| c.sort("name", SortOrder::Ascending))
                .and_then(|c| c.page(3, 100));
            if let Ok(clauses) = clauses {
                let _ = clauses.apply(BASE);
            }
        });
    });

    for count in [1, 5, 20] {
        let clauses: Vec<String> = (0..count).map(|i| format!("filter{}=value {}", i, i)).collect();
        group.bench_with_input(BenchmarkId::new("add_clauses_to_uri", count), &clauses, |b, clauses| {
            b.iter(|| {
                let _ = add_clauses_to_uri(BASE, clauses.as_slice());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, clause_building_benchmark);
criterion_main!(benches);
