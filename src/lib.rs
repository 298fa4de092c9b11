//! # SeqPeek track bundles
//!
//! This library assembles the data bundle drawn by a protein-mutation
//! ("lollipop") viewer: one row per tumor type plus a combined row, each
//! carrying coordinate-sorted mutations and mutation clusters, over a
//! protein panel annotated with PFAM domains.
//!
//! ## Pipeline
//!
//! 1. **Sanitize**: strip the gene symbol to alphanumerics, project tumor
//!    types onto the configured whitelist
//! 2. **Fetch**: mutations and clusters (or the aggregate gene summary)
//!    from a [`DataProvider`]
//! 3. **Resolve**: first protein accession found on the mutations
//! 4. **Annotate**: PFAM domain matches, per-tumor tracks, summary track,
//!    distinct-sample statistics and row ids
//! 5. **Finalize**: drop rows without mutations, emit a [`PlotBundle`]
//!
//! Missing parameters, empty results and unresolved accessions are
//! reported through [`QueryStatus`] flags rather than errors.
//!
//! ## Usage Example
//!
//! ```
//! use seqpeek::{FixtureProvider, QueryOutcome, SeqpeekPipeline, ViewConfig, ViewRequest};
//!
//! let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
//! let context = pipeline
//!     .run(&FixtureProvider::new(), &ViewRequest::new("EGFR", ["BRCA"]))
//!     .unwrap();
//! assert_eq!(context.outcome, QueryOutcome::NoMutationsFound);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod annotation; // Domain matches and cluster regions
pub mod config;     // Injected view configuration
pub mod model;      // Provider records and bundle shapes
pub mod pipeline;   // Request orchestration
pub mod provider;   // Data provider contracts
pub mod sanitize;   // Query-parameter cleaning
pub mod tracks;     // Track building and annotation
pub mod util;       // Filter/clip helpers

// Re-exports for convenience
pub use config::ViewConfig;
pub use model::{MutationRecord, PlotBundle, Track, TrackType};
pub use pipeline::{QueryOutcome, QueryStatus, SeqpeekPipeline, ViewContext, ViewRequest};
pub use provider::{DataProvider, FixtureProvider, ProviderError};
pub use util::Filtered;

use thiserror::Error;

/// Errors that abort a pipeline run
#[derive(Error, Debug)]
pub enum SeqpeekError {
    /// A data provider failed
    #[error("provider failure: {0}")]
    Provider(#[from] ProviderError),

    /// Bundle or context could not be serialized
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is unusable
    #[error("invalid configuration: {0}")]
    Config(String),
}
