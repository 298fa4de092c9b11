#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use seqpeek::model::{ClusterRecord, DomainRecord, MutationRecord, ProteinAnnotation};
use seqpeek::{DataProvider, FixtureProvider, ProviderError};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn egfr_fixture() -> FixtureProvider {
    FixtureProvider::from_path(fixture_path("egfr.json")).expect("fixture document parses")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("SEQPEEK_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set SEQPEEK_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n").trim_end().to_string()
}

/// Provider wrapper that records which contracts were called.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    inner: FixtureProvider,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingProvider {
    pub fn new(inner: FixtureProvider) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        let mut calls = self.calls.lock().expect("call log lock").clone();
        calls.sort_unstable();
        calls
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("call log lock").push(call);
    }
}

impl DataProvider for RecordingProvider {
    fn fetch_mutations(
        &self,
        tumor_types: &[String],
        gene: &str,
    ) -> Result<Vec<MutationRecord>, ProviderError> {
        self.record("mutations");
        self.inner.fetch_mutations(tumor_types, gene)
    }

    fn fetch_mutation_summary(&self, gene: &str) -> Result<Vec<MutationRecord>, ProviderError> {
        self.record("summary");
        self.inner.fetch_mutation_summary(gene)
    }

    fn fetch_clusters(
        &self,
        tumor_types: &[String],
        gene: &str,
    ) -> Result<Vec<ClusterRecord>, ProviderError> {
        self.record("clusters");
        self.inner.fetch_clusters(tumor_types, gene)
    }

    fn fetch_protein_annotation(
        &self,
        protein_id: &str,
    ) -> Result<ProteinAnnotation, ProviderError> {
        self.record("protein");
        self.inner.fetch_protein_annotation(protein_id)
    }

    fn fetch_domain_matches(&self, protein_id: &str) -> Result<Vec<DomainRecord>, ProviderError> {
        self.record("domains");
        self.inner.fetch_domain_matches(protein_id)
    }
}

/// Provider whose cluster service is down.
#[derive(Debug, Default)]
pub struct FailingClusterProvider {
    pub inner: FixtureProvider,
}

impl DataProvider for FailingClusterProvider {
    fn fetch_mutations(
        &self,
        tumor_types: &[String],
        gene: &str,
    ) -> Result<Vec<MutationRecord>, ProviderError> {
        self.inner.fetch_mutations(tumor_types, gene)
    }

    fn fetch_mutation_summary(&self, gene: &str) -> Result<Vec<MutationRecord>, ProviderError> {
        self.inner.fetch_mutation_summary(gene)
    }

    fn fetch_clusters(
        &self,
        _tumor_types: &[String],
        _gene: &str,
    ) -> Result<Vec<ClusterRecord>, ProviderError> {
        Err(ProviderError::remote("cluster service unavailable"))
    }

    fn fetch_protein_annotation(
        &self,
        protein_id: &str,
    ) -> Result<ProteinAnnotation, ProviderError> {
        self.inner.fetch_protein_annotation(protein_id)
    }

    fn fetch_domain_matches(&self, protein_id: &str) -> Result<Vec<DomainRecord>, ProviderError> {
        self.inner.fetch_domain_matches(protein_id)
    }
}
