// BuildSleuth - app/state.rs
//
// Application state: the committed report, the merge size, and the chart
// built from them. Owned by the host (the CLI in main.rs) and passed
// explicitly; there is no global state.

use crate::core::chart::{build_chart_data, ChartData};
use crate::core::filter::{apply_merge_size, validate_merge_size, MergeOutcome};
use crate::core::model::BuildEntry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Entries from the most recent successful parse. Shared read-only.
    entries: Arc<[BuildEntry]>,

    /// Whether a log is currently being read and parsed.
    pub is_processing: bool,

    /// Current merge size in megabytes.
    merge_size: f64,

    /// Merge size restored whenever a new report is committed.
    default_merge_size: f64,

    /// Chart for the entries at or above the merge size.
    chart_data: ChartData,

    /// Log file the committed entries came from.
    pub source_path: Option<PathBuf>,

    /// Status message for the user.
    pub status_message: String,
}

impl AppState {
    /// Create empty state. `default_merge_size` is applied on every commit.
    pub fn new(default_merge_size: f64) -> Self {
        Self {
            entries: Arc::from(Vec::new()),
            is_processing: false,
            merge_size: default_merge_size,
            default_merge_size,
            chart_data: ChartData::placeholder(),
            source_path: None,
            status_message: "Ready. Open a Unity build log to begin.".to_string(),
        }
    }

    /// True once a non-empty report has been committed.
    pub fn has_data(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Committed entries, in log order.
    pub fn entries(&self) -> &[BuildEntry] {
        &self.entries
    }

    /// Shared handle to the committed entries.
    pub fn shared_entries(&self) -> Arc<[BuildEntry]> {
        Arc::clone(&self.entries)
    }

    pub fn merge_size(&self) -> f64 {
        self.merge_size
    }

    pub fn chart_data(&self) -> &ChartData {
        &self.chart_data
    }

    /// Entries split at the current merge size.
    pub fn visible(&self) -> MergeOutcome<'_> {
        apply_merge_size(&self.entries, self.merge_size)
    }

    /// Replace the displayed report with a new parse result.
    ///
    /// An empty result is ignored and everything previously committed stays
    /// in place. Returns whether the result was committed.
    pub fn commit_parse_result(&mut self, entries: Vec<BuildEntry>, source: Option<&Path>) -> bool {
        if entries.is_empty() {
            tracing::debug!("Empty parse result; keeping previous report");
            return false;
        }

        tracing::info!(entries = entries.len(), "Committing build report");
        self.entries = Arc::from(entries);
        self.source_path = source.map(Path::to_path_buf);
        self.merge_size = self.default_merge_size;
        self.rebuild_chart();
        true
    }

    /// Change the merge size and rebuild the chart.
    ///
    /// Returns false (and changes nothing) if the value is out of range.
    pub fn set_merge_size(&mut self, value: f64) -> bool {
        let Some(size) = validate_merge_size(value) else {
            tracing::warn!(value, "Ignoring out-of-range merge size");
            return false;
        };
        self.merge_size = size;
        if self.has_data() {
            self.rebuild_chart();
        }
        true
    }

    fn rebuild_chart(&mut self) {
        let (labels, data) = self.visible().chart_series();
        self.chart_data = build_chart_data(labels, data);
    }
}
