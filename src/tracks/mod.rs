//! Track construction and annotation
//!
//! Tracks are built per requested tumor type, sorted and annotated, merged
//! into a combined summary row and finally filtered down to the rows that
//! actually have mutations to draw.

mod annotate;
mod builder;

pub use annotate::{
    annotate_track, build_regions, count_distinct_samples, finalize, row_id, sort_mutations,
};
pub use builder::{
    build_summary_track, build_tracks, find_protein_id, SUMMARY_LABEL, SUMMARY_TUMOR_TYPE,
};
