use serde::{Deserialize, Serialize};

use super::{QueryOutcome, QueryStatus};
use crate::model::PlotBundle;
use crate::sanitize::TumorTypeOption;
use crate::SeqpeekError;

const BUTTON_LABEL: &str = "Redraw";

/// The two query parameters plus the mode switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    /// Raw gene parameter, if any was sent.
    pub gene: Option<String>,
    /// Raw tumor-type parameters.
    pub tumor_types: Vec<String>,
    /// Aggregate all tumor types into a single summary track.
    pub summary_only: bool,
}

impl ViewRequest {
    /// Per-tumor request.
    pub fn new<I, S>(gene: impl Into<String>, tumor_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            gene: Some(gene.into()),
            tumor_types: tumor_types.into_iter().map(Into::into).collect(),
            summary_only: false,
        }
    }

    /// Gene-summary request.
    pub fn summary(gene: impl Into<String>) -> Self {
        Self {
            gene: Some(gene.into()),
            tumor_types: Vec::new(),
            summary_only: true,
        }
    }
}

/// Settings of the gene/tumor selection form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneSelectWidget {
    /// Form target.
    pub action: String,
    /// Whether the tumor multi-select is shown.
    pub tumor_type_select: bool,
    /// Tumor-type options.
    pub all_tumor_types: Vec<TumorTypeOption>,
    /// Submit button label.
    pub button_label: String,
}

/// Data embedded in the page for client-side scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticData {
    /// Autocomplete gene list.
    pub gene_list: Vec<String>,
    /// Sanitized gene symbol.
    pub gene_label: Option<String>,
    /// Pre-fill the gene field with `gene_label`.
    pub fill_in_gene: bool,
}

/// Everything handed to the page template for one request.
///
/// `outcome` is not serialized; decoding recovers it from `query_status`
/// and rejects documents whose flags do not name exactly one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ContextDocument")]
pub struct ViewContext {
    /// Terminal state of the run.
    #[serde(skip)]
    pub outcome: QueryOutcome,
    /// Selection form.
    pub gene_select_widget: GeneSelectWidget,
    /// State flags.
    pub query_status: QueryStatus,
    /// Sanitized, upper-cased gene symbol.
    pub gene_label: Option<String>,
    /// Echo of the gene-summary mode switch.
    pub is_gene_summary: bool,
    /// Client-side static data.
    pub static_data: StaticData,
    /// Tumor-type options (same list as the widget's).
    pub all_tumor_types: Vec<TumorTypeOption>,
    /// Gene symbol the bundle was built for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
    /// Validated tumor types, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tumor_list: Option<String>,
    /// Plot data before empty rows are filtered out, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_data: Option<PlotBundle>,
    /// Assembled bundle, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_bundle: Option<PlotBundle>,
    /// Tumor-type parameters removed by the whitelist.
    pub dropped_tumor_types: usize,
    /// Tracks left out of the bundle for having no mutations.
    pub dropped_tracks: usize,
}

/// Serialized shape of [`ViewContext`].
#[derive(Debug, Deserialize)]
struct ContextDocument {
    gene_select_widget: GeneSelectWidget,
    query_status: QueryStatus,
    gene_label: Option<String>,
    is_gene_summary: bool,
    static_data: StaticData,
    all_tumor_types: Vec<TumorTypeOption>,
    #[serde(default)]
    gene: Option<String>,
    #[serde(default)]
    tumor_list: Option<String>,
    #[serde(default)]
    plot_data: Option<PlotBundle>,
    #[serde(default)]
    data_bundle: Option<PlotBundle>,
    dropped_tumor_types: usize,
    dropped_tracks: usize,
}

impl TryFrom<ContextDocument> for ViewContext {
    type Error = String;

    fn try_from(doc: ContextDocument) -> Result<Self, Self::Error> {
        let outcome = doc
            .query_status
            .outcome()
            .ok_or_else(|| "query_status must set exactly one state flag".to_string())?;
        Ok(Self {
            outcome,
            gene_select_widget: doc.gene_select_widget,
            query_status: doc.query_status,
            gene_label: doc.gene_label,
            is_gene_summary: doc.is_gene_summary,
            static_data: doc.static_data,
            all_tumor_types: doc.all_tumor_types,
            gene: doc.gene,
            tumor_list: doc.tumor_list,
            plot_data: doc.plot_data,
            data_bundle: doc.data_bundle,
            dropped_tumor_types: doc.dropped_tumor_types,
            dropped_tracks: doc.dropped_tracks,
        })
    }
}

impl ViewContext {
    /// Renderer document, present only when data was found.
    pub fn data_bundle_json(&self) -> Result<Option<String>, SeqpeekError> {
        self.data_bundle
            .as_ref()
            .map(|bundle| bundle.to_json().map_err(SeqpeekError::from))
            .transpose()
    }

    /// Static data as embedded in the page.
    pub fn static_data_json(&self) -> Result<String, SeqpeekError> {
        Ok(serde_json::to_string(&self.static_data)?)
    }

    pub(crate) fn with_outcome(mut self, outcome: QueryOutcome) -> Self {
        self.outcome = outcome;
        self.query_status = QueryStatus::new(
            outcome,
            self.query_status.summary_only,
            self.query_status.request_gene.take(),
        );
        self.static_data.fill_in_gene = outcome.fill_in_gene();
        self
    }
}

pub(crate) fn base_context(
    request: &ViewRequest,
    gene_label: Option<String>,
    options: Vec<TumorTypeOption>,
    gene_list: Vec<String>,
    action: &str,
    dropped_tumor_types: usize,
) -> ViewContext {
    ViewContext {
        outcome: QueryOutcome::InsufficientParameters,
        gene_select_widget: GeneSelectWidget {
            action: action.to_string(),
            tumor_type_select: true,
            all_tumor_types: options.clone(),
            button_label: BUTTON_LABEL.to_string(),
        },
        query_status: QueryStatus::new(
            QueryOutcome::InsufficientParameters,
            request.summary_only,
            request.gene.clone(),
        ),
        gene_label: gene_label.clone(),
        is_gene_summary: request.summary_only,
        static_data: StaticData {
            gene_list,
            gene_label,
            fill_in_gene: true,
        },
        all_tumor_types: options,
        gene: None,
        tumor_list: None,
        plot_data: None,
        data_bundle: None,
        dropped_tumor_types,
        dropped_tracks: 0,
    }
}
