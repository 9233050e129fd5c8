use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cupi_rs::resources::Partition;
use cupi_rs::utils::payload::{collection_from_body, deserialize_record};

fn partitions_xml(count: usize) -> String {
    let mut body = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Partitions total="{}">"#,
        count
    );
    for i in 0..count {
        body.push_str(&format!(
            "<Partition><URI>/vmrest/partitions/p{i}</URI><ObjectId>p{i}</ObjectId><Name>Partition {i}</Name><Description>Generated &amp; benchmarked</Description><LocationObjectId>loc1</LocationObjectId></Partition>",
            i = i
        ));
    }
    body.push_str("</Partitions>");
    body
}

fn partitions_json(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"URI":"/vmrest/partitions/p{i}","ObjectId":"p{i}","Name":"Partition {i}","Description":"Generated & benchmarked","LocationObjectId":"loc1"}}"#,
                i = i
            )
        })
        .collect();
    format!(r#"{{"@total":"{}","Partition":[{}]}}"#, count, items.join(","))
}

pub fn collection_parsing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_parsing");

    for size in [10, 100, 1000] {
        let xml = partitions_xml(size);
        let json = partitions_json(size);

        group.bench_with_input(BenchmarkId::new("xml", size), &xml, |b, body| {
            b.iter(|| {
                let _ = collection_from_body(body, "Partition");
            });
        });

        group.bench_with_input(BenchmarkId::new("json", size), &json, |b, body| {
            b.iter(|| {
                let _ = collection_from_body(body, "Partition");
            });
        });
    }

    group.finish();
}

pub fn record_mapping_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_mapping");

    for size in [10, 100, 1000] {
        let xml = partitions_xml(size);
        group.bench_with_input(BenchmarkId::new("xml_to_partitions", size), &xml, |b, body| {
            b.iter(|| {
                if let Ok(page) = collection_from_body(body, "Partition") {
                    let mapped: Vec<Partition> = page
                        .into_items()
                        .into_iter()
                        .filter_map(|value| deserialize_record(value, "Partition").ok())
                        .collect();
                    assert_eq!(mapped.len(), size);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, collection_parsing_benchmark, record_mapping_benchmark);
criterion_main!(benches);
