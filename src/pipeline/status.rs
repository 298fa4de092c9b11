use serde::{Deserialize, Serialize};

/// Terminal state reached by a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// No gene, or no valid tumor type outside gene-summary mode.
    InsufficientParameters,
    /// The provider returned no mutations.
    NoMutationsFound,
    /// No mutation carried a protein accession.
    ProteinIdNotFound,
    /// A bundle was assembled.
    DataFound,
}

impl QueryOutcome {
    /// Whether the gene field should be pre-filled in the page.
    pub fn fill_in_gene(self) -> bool {
        self == QueryOutcome::DataFound
    }
}

/// Flag structure read by the page template. Exactly one of the four
/// state flags is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStatus {
    /// The provider returned no mutations.
    pub no_mutations_found: bool,
    /// No protein accession could be resolved.
    pub uniprot_id_not_found: bool,
    /// A bundle was assembled.
    pub data_found: bool,
    /// Echo of the gene-summary mode switch.
    pub summary_only: bool,
    /// Required parameters were missing.
    pub insufficient_parameters: bool,
    /// Gene parameter as received, before sanitization.
    pub request_gene: Option<String>,
}

impl QueryStatus {
    /// Build the flags for `outcome`.
    pub fn new(outcome: QueryOutcome, summary_only: bool, request_gene: Option<String>) -> Self {
        Self {
            no_mutations_found: outcome == QueryOutcome::NoMutationsFound,
            uniprot_id_not_found: outcome == QueryOutcome::ProteinIdNotFound,
            data_found: outcome == QueryOutcome::DataFound,
            summary_only,
            insufficient_parameters: outcome == QueryOutcome::InsufficientParameters,
            request_gene,
        }
    }

    /// Recover the outcome from the flags.
    pub fn outcome(&self) -> Option<QueryOutcome> {
        match (
            self.insufficient_parameters,
            self.no_mutations_found,
            self.uniprot_id_not_found,
            self.data_found,
        ) {
            (true, false, false, false) => Some(QueryOutcome::InsufficientParameters),
            (false, true, false, false) => Some(QueryOutcome::NoMutationsFound),
            (false, false, true, false) => Some(QueryOutcome::ProteinIdNotFound),
            (false, false, false, true) => Some(QueryOutcome::DataFound),
            _ => None,
        }
    }
}
