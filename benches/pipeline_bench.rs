//! Pipeline benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqpeek::model::{ClusterRecord, DomainRecord, ProteinAnnotation};
use seqpeek::provider::GeneFixture;
use seqpeek::{FixtureProvider, MutationRecord, SeqpeekPipeline, ViewConfig, ViewRequest};

const TUMORS: [&str; 6] = ["BRCA", "BLCA", "LUAD", "LUSC", "OV", "UCEC"];

fn synthetic_provider(num_mutations: u32) -> FixtureProvider {
    let mutations = (0..num_mutations)
        .map(|i| {
            let tumor = TUMORS[(i as usize) % TUMORS.len()];
            MutationRecord::new(tumor, (i * 7919) % 1210, format!("TCGA-{:04}", i % 500))
                .with_protein_id("P00533")
        })
        .collect();
    let clusters = TUMORS
        .iter()
        .flat_map(|tumor| (0..4).map(move |k| ClusterRecord::new(*tumor, k * 300, k * 300 + 50)))
        .collect();
    let domains = (0..20)
        .map(|k| DomainRecord {
            database: format!("{}{:05}", if k % 2 == 0 { "PF" } else { "SM" }, k),
            name: format!("Domain_{}", k),
            start: k * 50,
            end: k * 50 + 40,
            interpro_id: Some(format!("IPR{:06}", k)),
        })
        .collect();

    FixtureProvider::new()
        .with_gene(
            "EGFR",
            GeneFixture {
                mutations,
                summary: None,
                clusters,
            },
        )
        .with_protein(ProteinAnnotation::new("P00533", 1210), domains)
}

fn benchmark_pipeline(c: &mut Criterion) {
    let provider = synthetic_provider(10_000);
    let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
    let per_tumor = ViewRequest::new("EGFR", TUMORS);
    let summary = ViewRequest::summary("EGFR");

    c.bench_function("per_tumor_n=10000", |b| {
        b.iter(|| {
            let context = pipeline.run(&provider, black_box(&per_tumor)).unwrap();
            black_box(context.data_bundle_json().unwrap());
        });
    });

    c.bench_function("gene_summary_n=10000", |b| {
        b.iter(|| {
            let context = pipeline.run(&provider, black_box(&summary)).unwrap();
            black_box(context.data_bundle_json().unwrap());
        });
    });
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
