use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DataProvider, ProviderError};
use crate::model::{ClusterRecord, DomainRecord, MutationRecord, ProteinAnnotation};

/// Records served for one gene symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneFixture {
    /// Per-tumor mutation records.
    pub mutations: Vec<MutationRecord>,
    /// Aggregate records for gene-summary mode; `None` serves `mutations`.
    pub summary: Option<Vec<MutationRecord>>,
    /// Cluster records.
    pub clusters: Vec<ClusterRecord>,
}

/// Annotation and domain hits served for one protein accession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinFixture {
    /// Protein entry.
    pub annotation: ProteinAnnotation,
    /// Raw domain hits.
    #[serde(default)]
    pub domains: Vec<DomainRecord>,
}

/// Provider backed by an in-memory document of the shape
/// `{"genes": {GENE: GeneFixture}, "proteins": {ID: ProteinFixture}}`.
///
/// Unknown genes have no mutations or clusters; unknown proteins are an
/// error, as they would be for the remote annotation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureProvider {
    genes: BTreeMap<String, GeneFixture>,
    proteins: BTreeMap<String, ProteinFixture>,
}

impl FixtureProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fixture document.
    pub fn from_json_str(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let provider = Self::from_json_str(&contents)?;
        debug!(
            path = %path.as_ref().display(),
            genes = provider.genes.len(),
            proteins = provider.proteins.len(),
            "loaded fixture provider"
        );
        Ok(provider)
    }

    /// Register the records served for `gene`.
    pub fn with_gene(mut self, gene: impl Into<String>, fixture: GeneFixture) -> Self {
        self.genes.insert(gene.into(), fixture);
        self
    }

    /// Register a protein entry, keyed by its accession.
    pub fn with_protein(mut self, annotation: ProteinAnnotation, domains: Vec<DomainRecord>) -> Self {
        self.proteins.insert(
            annotation.id.clone(),
            ProteinFixture {
                annotation,
                domains,
            },
        );
        self
    }

    fn protein(&self, protein_id: &str) -> Result<&ProteinFixture, ProviderError> {
        self.proteins
            .get(protein_id)
            .ok_or_else(|| ProviderError::NotFound {
                kind: "protein",
                id: protein_id.to_string(),
            })
    }
}

impl DataProvider for FixtureProvider {
    fn fetch_mutations(
        &self,
        tumor_types: &[String],
        gene: &str,
    ) -> Result<Vec<MutationRecord>, ProviderError> {
        Ok(self
            .genes
            .get(gene)
            .map(|fixture| {
                fixture
                    .mutations
                    .iter()
                    .filter(|m| tumor_types.contains(&m.tumor_type))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn fetch_mutation_summary(&self, gene: &str) -> Result<Vec<MutationRecord>, ProviderError> {
        Ok(self
            .genes
            .get(gene)
            .map(|fixture| {
                fixture
                    .summary
                    .clone()
                    .unwrap_or_else(|| fixture.mutations.clone())
            })
            .unwrap_or_default())
    }

    fn fetch_clusters(
        &self,
        tumor_types: &[String],
        gene: &str,
    ) -> Result<Vec<ClusterRecord>, ProviderError> {
        Ok(self
            .genes
            .get(gene)
            .map(|fixture| {
                fixture
                    .clusters
                    .iter()
                    .filter(|c| tumor_types.contains(&c.tumor_type))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn fetch_protein_annotation(
        &self,
        protein_id: &str,
    ) -> Result<ProteinAnnotation, ProviderError> {
        Ok(self.protein(protein_id)?.annotation.clone())
    }

    fn fetch_domain_matches(&self, protein_id: &str) -> Result<Vec<DomainRecord>, ProviderError> {
        Ok(self.protein(protein_id)?.domains.clone())
    }
}
