//! Query-parameter sanitization
//!
//! Both user-supplied parameters are cleaned by projection, never rejected:
//! the gene symbol loses every non-alphanumeric character and the tumor-type
//! list loses every entry outside the whitelist.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::util::Filtered;

/// Strip everything that is not a Unicode letter or digit.
///
/// Case is preserved; callers upper-case the result themselves. An empty
/// result is returned as-is.
pub fn sanitize_gene(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Keep the requested tumor types that appear in `whitelist`, in request
/// order. Repeated entries are kept as given.
pub fn normalize_tumor_types<S: AsRef<str>>(raw: &[S], whitelist: &[String]) -> Filtered<String> {
    let permitted: HashSet<&str> = whitelist.iter().map(String::as_str).collect();
    Filtered::partition(
        raw.iter().map(|t| t.as_ref().to_string()),
        |tumor| permitted.contains(tumor.as_str()),
    )
}

/// Entry of the tumor-type multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TumorTypeOption {
    /// Tumor-type identifier.
    pub name: String,
    /// Whether the identifier was part of the validated request.
    pub selected: bool,
}

/// Every whitelisted tumor type, flagged when it was selected.
pub fn tumor_type_selection(all: &[String], selected: &[String]) -> Vec<TumorTypeOption> {
    all.iter()
        .map(|name| TumorTypeOption {
            name: name.clone(),
            selected: selected.contains(name),
        })
        .collect()
}
