use std::collections::HashSet;

use tracing::debug;

use crate::model::{MutationRecord, ProteinAnnotation, Region, Track, TrackType};
use crate::util::Filtered;

const ROW_ID_PREFIX: &str = "seqpeek_row_";
const EXON_REGION: &str = "exon";

/// Stable ascending sort by residue coordinate.
pub fn sort_mutations(mut mutations: Vec<MutationRecord>) -> Vec<MutationRecord> {
    mutations.sort_by_key(|m| m.amino_acid_position);
    mutations
}

/// Number of distinct sample ids among `mutations`.
pub fn count_distinct_samples(mutations: &[MutationRecord]) -> usize {
    mutations
        .iter()
        .map(|m| m.sample_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// DOM row id for a track.
pub fn row_id(tumor_type: &str) -> String {
    format!("{}{}", ROW_ID_PREFIX, tumor_type)
}

/// Attach label, statistics and row id.
///
/// Tumor tracks are labelled with their tumor type; the summary row keeps
/// its own label.
pub fn annotate_track(mut track: Track) -> Track {
    if track.track_type == TrackType::Tumor {
        track.label = track.tumor_type.clone();
    }
    track.statistics.samples.number_of = count_distinct_samples(&track.mutations);
    track.render_info.row_id = row_id(&track.tumor_type);
    track
}

/// Drop tracks without mutations and stamp the gene on the rest.
pub fn finalize(tracks: Vec<Track>, gene: &str) -> Filtered<Track> {
    Filtered::partition(tracks, |track| {
        if track.is_empty() {
            debug!("{}: 0 mutations, not rendering in SeqPeek.", track.label);
        }
        !track.is_empty()
    })
    .map(|mut track| {
        track.gene = Some(gene.to_string());
        track
    })
}

/// Single exon region spanning the whole protein.
pub fn build_regions(protein: &ProteinAnnotation) -> Vec<Region> {
    vec![Region {
        kind: EXON_REGION.to_string(),
        start: 0,
        end: protein.length,
    }]
}
