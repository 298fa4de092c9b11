use thiserror::Error;

use crate::model::{ClusterRecord, DomainRecord, MutationRecord, ProteinAnnotation};

/// Errors surfaced by data providers. None of them are recovered by the
/// pipeline.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Underlying I/O failure.
    #[error("provider I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be decoded into the expected records.
    #[error("malformed provider payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The requested entity does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Kind of entity requested (e.g. `protein`).
        kind: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// Remote service reported a failure.
    #[error("remote service error: {0}")]
    Remote(String),
}

impl ProviderError {
    /// Helper for constructing remote-service errors.
    pub fn remote(msg: impl Into<String>) -> Self {
        ProviderError::Remote(msg.into())
    }
}

/// Source of the records the pipeline joins.
///
/// Implementations must be `Sync`: the mutation and cluster fetches of one
/// request may be issued from two threads at once.
pub trait DataProvider: Sync {
    /// Mutations of `gene` in the given tumor types.
    fn fetch_mutations(
        &self,
        tumor_types: &[String],
        gene: &str,
    ) -> Result<Vec<MutationRecord>, ProviderError>;

    /// Mutations of `gene` aggregated over all tumor types.
    fn fetch_mutation_summary(&self, gene: &str) -> Result<Vec<MutationRecord>, ProviderError>;

    /// Mutation clusters of `gene` in the given tumor types.
    fn fetch_clusters(
        &self,
        tumor_types: &[String],
        gene: &str,
    ) -> Result<Vec<ClusterRecord>, ProviderError>;

    /// Protein entry (at least id and length) for an accession.
    fn fetch_protein_annotation(&self, protein_id: &str)
        -> Result<ProteinAnnotation, ProviderError>;

    /// Raw domain hits for an accession.
    fn fetch_domain_matches(&self, protein_id: &str) -> Result<Vec<DomainRecord>, ProviderError>;
}
