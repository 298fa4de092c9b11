use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MutationRecord, ProteinAnnotation};

/// Inclusive residue span shared by domain matches and cluster regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// First residue.
    pub start: u32,
    /// Last residue.
    pub end: u32,
}

/// InterPro entry reference displayed next to a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterproRef {
    /// Entry type (always `Domain` for member-database hits).
    #[serde(rename = "type")]
    pub kind: String,
    /// InterPro accession, e.g. `IPR000719`.
    pub id: Option<String>,
    /// Two-character display label.
    pub name: String,
}

/// Normalized protein-domain match drawn on the protein panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Clipped display name.
    pub name: String,
    /// Unclipped domain name.
    pub full_name: String,
    /// Residue spans covered by the match.
    pub locations: Vec<Location>,
    /// Source database (e.g. `PFAM`).
    pub dbname: String,
    /// Associated InterPro entry.
    pub ipr: InterproRef,
    /// Member-database accession.
    pub id: String,
}

/// Mutation cluster drawn underneath a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRegion {
    /// Display name (unused by the renderer, always empty).
    pub name: String,
    /// Always `cluster`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `cluster_{n}`, numbered per tumor type.
    pub id: String,
    /// Residue span of the cluster.
    pub locations: Vec<Location>,
    /// Pass-through mutation statistics.
    pub mutation_stats: Value,
    /// Pass-through significance statistics.
    pub stats: Value,
}

/// Whether a track comes from a tumor-type query or is the combined row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    /// One requested tumor type.
    Tumor,
    /// All tracks merged.
    Summary,
}

/// Distinct-sample count for a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleStatistics {
    /// Number of distinct sample ids among the track's mutations.
    #[serde(rename = "numberOf")]
    pub number_of: usize,
}

/// Per-track statistics block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackStatistics {
    /// Sample statistics.
    pub samples: SampleStatistics,
}

/// Rendering metadata for a track row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderInfo {
    /// DOM id of the table row holding the track.
    pub row_id: String,
}

/// One visual row of the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Tumor type, or `none-combined` for the summary row.
    #[serde(rename = "tumor")]
    pub tumor_type: String,
    /// Row label.
    pub label: String,
    /// Track kind.
    #[serde(rename = "type")]
    pub track_type: TrackType,
    /// Mutations drawn on the row.
    pub mutations: Vec<MutationRecord>,
    /// Cluster regions drawn under the row.
    pub clusters: Vec<ClusterRegion>,
    /// Summary statistics.
    pub statistics: TrackStatistics,
    /// Rendering metadata.
    pub render_info: RenderInfo,
    /// True when the track had at least one mutation when built.
    pub render_in_seqpeek: bool,
    /// Whether the renderer should run its variant layout on this row.
    pub do_variant_layout: bool,
    /// Gene symbol, set on tracks that are emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
}

impl Track {
    /// Fresh tumor track; annotation fills in label, statistics and row id.
    pub fn new(
        tumor_type: impl Into<String>,
        mutations: Vec<MutationRecord>,
        clusters: Vec<ClusterRegion>,
    ) -> Self {
        let render_in_seqpeek = !mutations.is_empty();
        Self {
            tumor_type: tumor_type.into(),
            label: String::new(),
            track_type: TrackType::Tumor,
            mutations,
            clusters,
            statistics: TrackStatistics::default(),
            render_info: RenderInfo::default(),
            render_in_seqpeek,
            do_variant_layout: true,
            gene: None,
        }
    }

    /// Number of mutations on the track.
    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    /// True when the track has no mutations.
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }
}

/// Linear region drawn behind the protein (a single exon spanning it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Always `exon`.
    #[serde(rename = "type")]
    pub kind: String,
    /// First residue (0).
    pub start: u32,
    /// Protein length.
    pub end: u32,
}

/// Protein entry with its normalized domain matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinPanel {
    /// Accession, length and descriptive fields.
    #[serde(flatten)]
    pub annotation: ProteinAnnotation,
    /// Domain matches drawn on the protein.
    pub matches: Vec<Match>,
}

/// Everything the front-end renderer needs for one gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotBundle {
    /// Sanitized, upper-cased gene symbol.
    pub gene_label: String,
    /// Protein panel.
    pub protein: ProteinPanel,
    /// Regions drawn behind the protein.
    pub regions: Vec<Region>,
    /// Tracks with at least one mutation, tumor tracks first.
    pub tracks: Vec<Track>,
}

impl PlotBundle {
    /// Compact JSON document handed to the renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON, for inspection.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// BLAKE3 digest of the compact JSON, hex encoded.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let json = self.to_json()?;
        Ok(blake3::hash(json.as_bytes()).to_hex().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn track_serializes_renderer_field_names() {
        let track = Track::new("BRCA", vec![MutationRecord::new("BRCA", 3, "S1")], Vec::new());
        let value = serde_json::to_value(&track).unwrap();

        assert_eq!(value["tumor"], json!("BRCA"));
        assert_eq!(value["type"], json!("tumor"));
        assert_eq!(value["statistics"], json!({"samples": {"numberOf": 0}}));
        assert_eq!(value["render_in_seqpeek"], json!(true));
        assert!(value.get("gene").is_none());
    }

    #[test]
    fn protein_panel_flattens_annotation() {
        let mut annotation = ProteinAnnotation::new("P00533", 1210);
        annotation.extra.insert("name".to_string(), json!("EGFR_HUMAN"));
        let panel = ProteinPanel {
            annotation,
            matches: Vec::new(),
        };

        assert_eq!(
            serde_json::to_value(&panel).unwrap(),
            json!({"id": "P00533", "length": 1210, "name": "EGFR_HUMAN", "matches": []})
        );
    }

    #[test]
    fn empty_track_is_not_rendered() {
        let track = Track::new("BLCA", Vec::new(), Vec::new());
        assert!(track.is_empty());
        assert!(!track.render_in_seqpeek);
    }
}
