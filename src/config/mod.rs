//! View configuration
//!
//! Process-wide static data (the tumor-type whitelist, the autocomplete gene
//! list, the domain database) lives in an explicit [`ViewConfig`] that is
//! handed to the pipeline, so a run depends only on its arguments.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::annotation::accession_prefix;
use crate::SeqpeekError;

/// TCGA study abbreviations accepted as tumor-type parameters.
pub const DEFAULT_TUMOR_TYPES: &[&str] = &[
    "ACC", "BLCA", "BRCA", "CESC", "CHOL", "COAD", "COADREAD", "DLBC", "ESCA", "GBM", "GBMLGG",
    "HNSC", "KICH", "KIPAN", "KIRC", "KIRP", "LAML", "LGG", "LIHC", "LUAD", "LUSC", "MESO", "OV",
    "PAAD", "PCPG", "PRAD", "READ", "SARC", "SKCM", "STAD", "STES", "TGCT", "THCA", "THYM",
    "UCEC", "UCS", "UVM",
];

/// Gene symbols offered for autocomplete when no gene list can be loaded.
pub const FALLBACK_GENE_LIST: &[&str] = &["EGFR", "TP53", "PTEN"];

/// Protein domain database whose matches are drawn.
pub const DEFAULT_DOMAIN_DB: &str = "PFAM";

/// Form action echoed into the gene selection widget.
pub const DEFAULT_FORM_ACTION: &str = "/seqpeek";

/// Configuration injected into [`crate::SeqpeekPipeline`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Permitted tumor-type identifiers, in display order.
    pub tumor_types: Vec<String>,
    /// Gene symbols for the autocomplete widget.
    pub gene_list: Vec<String>,
    /// Domain database kept in the protein panel (e.g. `PFAM`).
    pub domain_db: String,
    /// Target of the gene selection form.
    pub form_action: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tumor_types: DEFAULT_TUMOR_TYPES.iter().map(|s| s.to_string()).collect(),
            gene_list: FALLBACK_GENE_LIST.iter().map(|s| s.to_string()).collect(),
            domain_db: DEFAULT_DOMAIN_DB.to_string(),
            form_action: DEFAULT_FORM_ACTION.to_string(),
        }
    }
}

impl ViewConfig {
    /// Read a configuration document; missing keys take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SeqpeekError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            SeqpeekError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|err| {
            SeqpeekError::Config(format!("cannot parse {}: {}", path.display(), err))
        })?;
        config.validate()?;
        debug!(
            path = %path.display(),
            tumor_types = config.tumor_types.len(),
            "loaded view configuration"
        );
        Ok(config)
    }

    /// Replace the tumor-type whitelist.
    pub fn with_tumor_types<I, S>(mut self, tumor_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tumor_types = tumor_types.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the autocomplete gene list.
    pub fn with_gene_list<I, S>(mut self, genes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gene_list = genes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the gene list with the contents of a JSON array file,
    /// falling back to [`FALLBACK_GENE_LIST`].
    pub fn with_gene_list_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.gene_list = load_gene_list(path);
        self
    }

    /// Select a different domain database.
    pub fn with_domain_db(mut self, db: impl Into<String>) -> Self {
        self.domain_db = db.into();
        self
    }

    /// Two-character accession prefix of the domain database
    /// (`PFAM` accessions look like `PF00069`).
    pub fn domain_prefix(&self) -> &str {
        accession_prefix(&self.domain_db)
    }

    /// Check that the configuration can drive a pipeline run.
    pub fn validate(&self) -> Result<(), SeqpeekError> {
        if self.domain_db.chars().count() < 2 {
            return Err(SeqpeekError::Config(format!(
                "domain database name '{}' is shorter than its accession prefix",
                self.domain_db
            )));
        }
        if self.tumor_types.iter().any(|t| t.is_empty()) {
            return Err(SeqpeekError::Config(
                "tumor type whitelist contains an empty identifier".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load gene symbols from a JSON array.
///
/// An unreadable or malformed file is not an error: the autocomplete list
/// degrades to [`FALLBACK_GENE_LIST`].
pub fn load_gene_list<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    let parsed = fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|contents| {
            serde_json::from_str::<Vec<String>>(&contents).map_err(|err| err.to_string())
        });

    match parsed {
        Ok(genes) => genes,
        Err(reason) => {
            error!(
                path = %path.display(),
                %reason,
                "Loading gene list failed, using static list."
            );
            FALLBACK_GENE_LIST.iter().map(|s| s.to_string()).collect()
        }
    }
}
