// BuildSleuth - core/filter.rs
//
// Merge-size threshold: entries below the cutoff are hidden from the chart
// and counted instead. Core layer: pure logic, no I/O.

use crate::core::model::BuildEntry;
use crate::util::constants::{MAX_MERGE_SIZE_MB, MIN_MERGE_SIZE_MB};

/// Entries that survive the merge-size cutoff, plus what was hidden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome<'a> {
    /// Entries with `size >= merge_size`, in their original order.
    pub kept: Vec<&'a BuildEntry>,
    /// Number of entries below the cutoff.
    pub merged_count: usize,
    /// Total size in megabytes of the entries below the cutoff.
    pub merged_size: f64,
}

impl MergeOutcome<'_> {
    /// Total size in megabytes of the kept entries.
    pub fn kept_size(&self) -> f64 {
        self.kept.iter().map(|e| e.size()).sum()
    }

    /// Labels and values for the chart, in kept order.
    pub fn chart_series(&self) -> (Vec<String>, Vec<f64>) {
        self.kept
            .iter()
            .map(|e| (e.path().to_string(), e.size()))
            .unzip()
    }
}

/// Split `entries` at the merge-size cutoff.
pub fn apply_merge_size(entries: &[BuildEntry], merge_size: f64) -> MergeOutcome<'_> {
    let mut outcome = MergeOutcome::default();
    for entry in entries {
        if entry.size() >= merge_size {
            outcome.kept.push(entry);
        } else {
            outcome.merged_count += 1;
            outcome.merged_size += entry.size();
        }
    }
    outcome
}

/// Returns the value if it is a usable merge size.
pub fn validate_merge_size(value: f64) -> Option<f64> {
    (value.is_finite() && (MIN_MERGE_SIZE_MB..=MAX_MERGE_SIZE_MB).contains(&value)).then_some(value)
}
