//! Protein-panel and cluster annotations
//!
//! Both domain hits and mutation clusters are reshaped into records carrying
//! a `locations` array so the renderer can draw them the same way.

mod clusters;
mod domains;

pub use clusters::partition_clusters;
pub use domains::{accession_prefix, filter_matches_by_db, normalize_domains};
