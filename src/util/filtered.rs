//! Permissive projection results
//!
//! Stages that silently drop input (invalid tumor types, non-PFAM domains,
//! empty tracks) return the residual sequence together with how many items
//! were dropped, so callers can log or assert on the loss.

/// Items that survived a filter plus the number that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<T> {
    /// Retained items, in their original relative order.
    pub kept: Vec<T>,
    /// Number of input items that were removed.
    pub dropped: usize,
}

impl<T> Filtered<T> {
    /// Partition `items` with `keep`, preserving order.
    pub fn partition<I, F>(items: I, mut keep: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> bool,
    {
        let mut kept = Vec::new();
        let mut dropped = 0;
        for item in items {
            if keep(&item) {
                kept.push(item);
            } else {
                dropped += 1;
            }
        }
        Self { kept, dropped }
    }

    /// Number of items seen before filtering.
    pub fn total(&self) -> usize {
        self.kept.len() + self.dropped
    }

    /// Map retained items, keeping the dropped count.
    pub fn map<U, F>(self, f: F) -> Filtered<U>
    where
        F: FnMut(T) -> U,
    {
        Filtered {
            kept: self.kept.into_iter().map(f).collect(),
            dropped: self.dropped,
        }
    }

    /// Discard the diagnostic count.
    pub fn into_kept(self) -> Vec<T> {
        self.kept
    }
}
