use std::panic;
use std::thread;

use tracing::{debug, info, warn};

use super::context::base_context;
use super::{QueryOutcome, ViewContext, ViewRequest};
use crate::annotation::{filter_matches_by_db, normalize_domains};
use crate::config::ViewConfig;
use crate::model::{
    ClusterRecord, DomainRecord, MutationRecord, PlotBundle, ProteinAnnotation, ProteinPanel,
    Track,
};
use crate::provider::{DataProvider, ProviderError};
use crate::sanitize::{normalize_tumor_types, sanitize_gene, tumor_type_selection};
use crate::tracks::{
    annotate_track, build_regions, build_summary_track, build_tracks, finalize, find_protein_id,
    sort_mutations, SUMMARY_TUMOR_TYPE,
};
use crate::util::Filtered;
use crate::SeqpeekError;

/// Assembles the view for one request.
///
/// Holds only the injected configuration; every run is a function of the
/// request and what the provider returns.
#[derive(Debug, Clone)]
pub struct SeqpeekPipeline {
    config: ViewConfig,
}

impl SeqpeekPipeline {
    /// Create a pipeline over `config`, rejecting configurations that
    /// [`ViewConfig::validate`] refuses.
    pub fn new(config: ViewConfig) -> Result<Self, SeqpeekError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Run one request.
    ///
    /// Missing parameters, empty results and unresolved protein ids end the
    /// run early with the matching [`QueryOutcome`]. Only provider failures
    /// are returned as errors.
    pub fn run<P: DataProvider>(
        &self,
        provider: &P,
        request: &ViewRequest,
    ) -> Result<ViewContext, SeqpeekError> {
        let gene = request
            .gene
            .as_deref()
            .map(|raw| sanitize_gene(raw).to_uppercase());

        let tumor_types = normalize_tumor_types(&request.tumor_types, &self.config.tumor_types);
        if tumor_types.dropped > 0 {
            warn!(
                dropped = tumor_types.dropped,
                "ignoring tumor types outside the whitelist"
            );
        }
        debug!("Valid tumors from request: {:?}", tumor_types.kept);

        let context = base_context(
            request,
            gene.clone(),
            tumor_type_selection(&self.config.tumor_types, &tumor_types.kept),
            self.config.gene_list.clone(),
            &self.config.form_action,
            tumor_types.dropped,
        );

        let gene = match gene {
            Some(gene)
                if !gene.is_empty() && (request.summary_only || !tumor_types.kept.is_empty()) =>
            {
                gene
            }
            _ => return Ok(context.with_outcome(QueryOutcome::InsufficientParameters)),
        };

        let (mutations, clusters) = if request.summary_only {
            (provider.fetch_mutation_summary(&gene)?, Vec::new())
        } else {
            fetch_per_tumor(provider, &tumor_types.kept, &gene)?
        };

        if mutations.is_empty() {
            info!(gene = %gene, "no mutations found");
            return Ok(context.with_outcome(QueryOutcome::NoMutationsFound));
        }

        let protein_id = match find_protein_id(&mutations) {
            Some(id) => id.to_string(),
            None => {
                info!(gene = %gene, "no protein id on any mutation record");
                return Ok(context.with_outcome(QueryOutcome::ProteinIdNotFound));
            }
        };
        debug!("Found UniProt ID: {:?}", protein_id);

        let annotation = provider.fetch_protein_annotation(&protein_id)?;
        let raw_domains = provider.fetch_domain_matches(&protein_id)?;

        let tracks = if request.summary_only {
            summary_tracks(mutations)
        } else {
            tumor_tracks(&tumor_types.kept, &mutations, &clusters)
        };
        let plot_data = self.assemble(&gene, annotation, &raw_domains, tracks);
        let Filtered { kept, dropped } = finalize(plot_data.tracks.clone(), &gene);
        let bundle = PlotBundle {
            gene_label: plot_data.gene_label.clone(),
            protein: plot_data.protein.clone(),
            regions: plot_data.regions.clone(),
            tracks: kept,
        };
        info!(
            gene = %gene,
            protein = %protein_id,
            tracks = bundle.tracks.len(),
            "assembled plot bundle"
        );

        let mut context = context.with_outcome(QueryOutcome::DataFound);
        context.tumor_list = Some(tumor_types.kept.join(","));
        context.gene = Some(gene);
        context.plot_data = Some(plot_data);
        context.data_bundle = Some(bundle);
        context.dropped_tracks = dropped;
        Ok(context)
    }

    /// Unfiltered plot data: every track, empty rows included.
    fn assemble(
        &self,
        gene: &str,
        mut annotation: ProteinAnnotation,
        raw_domains: &[DomainRecord],
        tracks: Vec<Track>,
    ) -> PlotBundle {
        let db = self.config.domain_db.as_str();
        let matches = filter_matches_by_db(normalize_domains(raw_domains, db).into_kept(), db);
        let regions = build_regions(&annotation);

        // The panel's own `matches` replaces whatever the annotation carried.
        if annotation.extra.remove("matches").is_some() {
            debug!(protein = %annotation.id, "replacing provider-supplied matches");
        }

        PlotBundle {
            gene_label: gene.to_string(),
            protein: ProteinPanel {
                annotation,
                matches,
            },
            regions,
            tracks,
        }
    }
}

/// Mutations and clusters are independent reads, so they are fetched side
/// by side.
fn fetch_per_tumor<P: DataProvider>(
    provider: &P,
    tumor_types: &[String],
    gene: &str,
) -> Result<(Vec<MutationRecord>, Vec<ClusterRecord>), ProviderError> {
    thread::scope(|scope| {
        let clusters = scope.spawn(|| provider.fetch_clusters(tumor_types, gene));
        let mutations = provider.fetch_mutations(tumor_types, gene);
        let clusters = clusters
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload));
        Ok((mutations?, clusters?))
    })
}

/// Sorted, annotated tumor tracks followed by the combined row.
fn tumor_tracks(
    tumor_types: &[String],
    mutations: &[MutationRecord],
    clusters: &[ClusterRecord],
) -> Vec<Track> {
    let mut tracks: Vec<Track> = build_tracks(tumor_types, mutations, clusters)
        .into_iter()
        .map(|mut track| {
            track.mutations = sort_mutations(track.mutations);
            annotate_track(track)
        })
        .collect();

    let summary = build_summary_track(&tracks, false);
    tracks.push(annotate_track(summary));
    tracks
}

/// Gene-summary mode: the aggregate set wrapped as a single summary row.
fn summary_tracks(mutations: Vec<MutationRecord>) -> Vec<Track> {
    let combined = Track::new(SUMMARY_TUMOR_TYPE, sort_mutations(mutations), Vec::new());
    vec![annotate_track(build_summary_track(&[combined], true))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackType;
    use crate::provider::{FixtureProvider, GeneFixture};

    fn provider() -> FixtureProvider {
        let mutations = vec![
            MutationRecord::new("BRCA", 50, "S1").with_protein_id("P00533"),
            MutationRecord::new("BRCA", 10, "S2").with_protein_id("P00533"),
            MutationRecord::new("LUAD", 30, "S3").with_protein_id("P00533"),
        ];
        FixtureProvider::new()
            .with_gene(
                "EGFR",
                GeneFixture {
                    mutations,
                    summary: None,
                    clusters: vec![ClusterRecord::new("BRCA", 5, 55)],
                },
            )
            .with_protein(ProteinAnnotation::new("P00533", 1210), Vec::new())
    }

    #[test]
    fn test_gene_is_sanitized_and_upper_cased() {
        let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
        let context = pipeline
            .run(&provider(), &ViewRequest::new("e-g_f r", ["BRCA"]))
            .unwrap();

        assert_eq!(context.outcome, QueryOutcome::DataFound);
        assert_eq!(context.gene_label.as_deref(), Some("EGFR"));
        assert_eq!(context.query_status.request_gene.as_deref(), Some("e-g_f r"));
        assert!(context.static_data.fill_in_gene);
    }

    #[test]
    fn test_empty_tumor_tracks_are_dropped() {
        let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
        let context = pipeline
            .run(&provider(), &ViewRequest::new("EGFR", ["BRCA", "BLCA", "NOPE"]))
            .unwrap();
        let bundle = context.data_bundle.unwrap();

        let rows: Vec<_> = bundle.tracks.iter().map(|t| t.tumor_type.as_str()).collect();
        assert_eq!(rows, vec!["BRCA", "none-combined"]);
        assert_eq!(context.dropped_tracks, 1);
        assert_eq!(context.dropped_tumor_types, 1);
        assert_eq!(context.tumor_list.as_deref(), Some("BRCA,BLCA"));
        assert_eq!(bundle.tracks[0].clusters.len(), 1);
        assert_eq!(bundle.tracks[1].track_type, TrackType::Summary);
    }

    #[test]
    fn test_empty_gene_is_insufficient() {
        let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
        let context = pipeline
            .run(&provider(), &ViewRequest::new("--", ["BRCA"]))
            .unwrap();

        assert_eq!(context.outcome, QueryOutcome::InsufficientParameters);
        assert!(!context.static_data.fill_in_gene);
        assert!(context.data_bundle.is_none());
    }

    #[test]
    fn test_missing_protein_is_a_provider_error() {
        let provider = FixtureProvider::new().with_gene(
            "EGFR",
            GeneFixture {
                mutations: vec![MutationRecord::new("BRCA", 1, "S1").with_protein_id("P00533")],
                ..GeneFixture::default()
            },
        );
        let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
        let result = pipeline.run(&provider, &ViewRequest::new("EGFR", ["BRCA"]));

        assert!(matches!(
            result,
            Err(SeqpeekError::Provider(ProviderError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_annotation_matches_are_replaced() {
        let mut annotation = ProteinAnnotation::new("P00533", 1210);
        annotation
            .extra
            .insert("matches".to_string(), serde_json::json!([{"stale": true}]));
        let domains = vec![DomainRecord {
            database: "PF00069".to_string(),
            name: "Pkinase_Tyr".to_string(),
            start: 712,
            end: 968,
            interpro_id: None,
        }];
        let provider = FixtureProvider::new()
            .with_gene(
                "EGFR",
                GeneFixture {
                    mutations: vec![
                        MutationRecord::new("BRCA", 858, "S1").with_protein_id("P00533")
                    ],
                    ..GeneFixture::default()
                },
            )
            .with_protein(annotation, domains);

        let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
        let context = pipeline
            .run(&provider, &ViewRequest::new("EGFR", ["BRCA"]))
            .unwrap();
        let json = context.data_bundle_json().unwrap().unwrap();

        assert_eq!(json.matches("\"matches\"").count(), 1);
        let decoded: PlotBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.protein.matches.len(), 1);
        assert_eq!(decoded.protein.matches[0].id, "PF00069");
        assert!(!decoded.protein.annotation.extra.contains_key("matches"));
    }

    #[test]
    fn test_plot_data_keeps_empty_rows() {
        let pipeline = SeqpeekPipeline::new(ViewConfig::default()).unwrap();
        let context = pipeline
            .run(&provider(), &ViewRequest::new("EGFR", ["BRCA", "BLCA"]))
            .unwrap();

        let plot_data = context.plot_data.unwrap();
        let rows: Vec<_> = plot_data.tracks.iter().map(|t| t.tumor_type.as_str()).collect();
        assert_eq!(rows, vec!["BRCA", "BLCA", "none-combined"]);
        assert!(plot_data.tracks[1].is_empty());
        assert_eq!(context.data_bundle.unwrap().tracks.len(), 2);
    }

    #[test]
    fn test_invalid_domain_db_is_rejected() {
        for db in ["", "P"] {
            let result = SeqpeekPipeline::new(ViewConfig::default().with_domain_db(db));
            assert!(matches!(result, Err(SeqpeekError::Config(_))));
        }
    }
}
