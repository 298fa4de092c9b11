use crate::annotation::partition_clusters;
use crate::model::{ClusterRecord, MutationRecord, Track, TrackType};

/// Tumor-type slot of the combined row.
pub const SUMMARY_TUMOR_TYPE: &str = "none-combined";

/// Label of the combined row.
pub const SUMMARY_LABEL: &str = "COMBINED";

/// Build one track per requested tumor type, in request order.
///
/// Tracks are produced even when a tumor type has no mutations; dropping
/// them is left to [`crate::tracks::finalize`].
pub fn build_tracks(
    tumor_types: &[String],
    mutations: &[MutationRecord],
    clusters: &[ClusterRecord],
) -> Vec<Track> {
    tumor_types
        .iter()
        .map(|tumor_type| {
            let selected = mutations
                .iter()
                .filter(|m| &m.tumor_type == tumor_type)
                .cloned()
                .collect();
            Track::new(
                tumor_type.as_str(),
                selected,
                partition_clusters(clusters, tumor_type),
            )
        })
        .collect()
}

/// Concatenate every track's mutations, in track order, into the combined
/// row. The result is not re-sorted.
pub fn build_summary_track(tracks: &[Track], summary_only: bool) -> Track {
    let mutations: Vec<MutationRecord> = tracks
        .iter()
        .flat_map(|track| track.mutations.iter().cloned())
        .collect();

    let mut summary = Track::new(SUMMARY_TUMOR_TYPE, mutations, Vec::new());
    summary.label = SUMMARY_LABEL.to_string();
    summary.track_type = TrackType::Summary;
    summary.do_variant_layout = summary_only;
    summary
}

/// First protein accession found scanning `mutations` in order.
///
/// Records disagreeing on the accession are not detected; the first one
/// wins.
pub fn find_protein_id(mutations: &[MutationRecord]) -> Option<&str> {
    mutations.iter().find_map(|m| m.protein_id.as_deref())
}
