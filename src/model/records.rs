use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single somatic mutation observed in one sample.
///
/// Only the join/sort keys are typed; every other field of the provider's
/// record is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// Tumor-type identifier the sample belongs to.
    pub tumor_type: String,
    /// Residue coordinate on the protein.
    #[serde(deserialize_with = "deserialize_position")]
    pub amino_acid_position: u32,
    /// Sample (patient barcode) the mutation was called in.
    #[serde(rename = "patient_barcode", alias = "sample_id")]
    pub sample_id: String,
    /// Protein accession used to look up length and domains.
    #[serde(
        rename = "uniprot_id",
        alias = "protein_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub protein_id: Option<String>,
    /// Remaining provider fields, in key order.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl MutationRecord {
    /// Construct a record without a protein id or extra fields.
    pub fn new(tumor_type: impl Into<String>, position: u32, sample_id: impl Into<String>) -> Self {
        Self {
            tumor_type: tumor_type.into(),
            amino_acid_position: position,
            sample_id: sample_id.into(),
            protein_id: None,
            extra: BTreeMap::new(),
        }
    }

    /// Attach a protein accession.
    pub fn with_protein_id(mut self, protein_id: impl Into<String>) -> Self {
        self.protein_id = Some(protein_id.into());
        self
    }

    /// Attach an opaque pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Providers send coordinates either as JSON numbers or as numeric strings.
/// Anything that is not a non-negative integer fails the whole decode.
fn deserialize_position<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let position = match &value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    position
        .and_then(|p| u32::try_from(p).ok())
        .ok_or_else(|| {
            D::Error::custom(format!(
                "amino_acid_position must be a non-negative integer, got {}",
                value
            ))
        })
}

/// A mutation hotspot region reported by the cluster service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
    /// Tumor type the cluster was computed for.
    pub tumor_type: String,
    /// First residue of the region.
    pub start: u32,
    /// Last residue of the region.
    pub end: u32,
    /// Opaque per-cluster mutation statistics.
    #[serde(default)]
    pub mutation_stats: Value,
    /// Opaque significance statistics.
    #[serde(default)]
    pub stats: Value,
}

impl ClusterRecord {
    /// Construct a cluster with empty statistics payloads.
    pub fn new(tumor_type: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            tumor_type: tumor_type.into(),
            start,
            end,
            mutation_stats: Value::Null,
            stats: Value::Null,
        }
    }
}

/// A raw protein-domain hit as returned by the InterPro service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Member-database accession, e.g. `PF00069`.
    pub database: String,
    /// Short domain name.
    pub name: String,
    /// First residue of the hit.
    pub start: u32,
    /// Last residue of the hit.
    pub end: u32,
    /// Integrated InterPro entry, when there is one.
    #[serde(default)]
    pub interpro_id: Option<String>,
}

/// Protein entry (length and descriptive fields) for a resolved accession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinAnnotation {
    /// Protein accession.
    pub id: String,
    /// Sequence length in residues.
    pub length: u32,
    /// Any other descriptive fields, passed through.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ProteinAnnotation {
    /// Construct an annotation with no extra fields.
    pub fn new(id: impl Into<String>, length: u32) -> Self {
        Self {
            id: id.into(),
            length,
            extra: BTreeMap::new(),
        }
    }
}
