// BuildSleuth - app/load.rs
//
// Load orchestration: read a build log from disk, parse it, and commit the
// result into the application state.

use crate::app::state::AppState;
use crate::core::parser;
use crate::platform::fs;
use crate::util::error::Result;
use std::path::Path;

/// Summary of a single load, for status reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Whether the report marker was present in the log.
    pub marker_found: bool,
    /// Entries extracted from the report section.
    pub entries_found: usize,
    /// Report lines that were skipped as unparseable.
    pub lines_skipped: u64,
    /// Whether the entries replaced the previously committed report.
    pub committed: bool,
}

/// Read, parse, and commit the build log at `path`.
///
/// A log without a usable report leaves `state` untouched apart from the
/// status message. Read failures are returned as errors; `is_processing`
/// is cleared on every path.
pub fn load_log_file(state: &mut AppState, path: &Path) -> Result<LoadOutcome> {
    state.is_processing = true;
    let result = load_inner(state, path);
    state.is_processing = false;

    match &result {
        Ok(outcome) if outcome.committed => {
            state.status_message = format!(
                "Loaded {} assets from '{}'.",
                outcome.entries_found,
                path.display()
            );
        }
        Ok(outcome) if outcome.marker_found => {
            state.status_message = format!(
                "The asset report in '{}' has no entries.",
                path.display()
            );
        }
        Ok(_) => {
            state.status_message = format!(
                "No asset report found in '{}'. Is this a log from a completed build?",
                path.display()
            );
        }
        Err(e) => {
            tracing::error!(file = %path.display(), error = %e, "Failed to load build log");
            state.status_message = format!("Failed to load build log: {e}");
        }
    }

    result
}

fn load_inner(state: &mut AppState, path: &Path) -> Result<LoadOutcome> {
    tracing::info!(file = %path.display(), "Loading build log");
    let text = fs::read_editor_log(path)?;

    let report = parser::parse_report(&text);
    let marker_found = report.marker_found();
    let entries_found = report.entries.len();
    let lines_skipped = report.lines_skipped;

    if !marker_found {
        tracing::warn!(file = %path.display(), "Build log has no asset report section");
    } else if lines_skipped > 0 {
        tracing::debug!(skipped = lines_skipped, "Some report lines could not be parsed");
    }

    let committed = state.commit_parse_result(report.entries, Some(path));

    Ok(LoadOutcome {
        marker_found,
        entries_found,
        lines_skipped,
        committed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::REPORT_MARKER;
    use crate::util::error::{BuildSleuthError, LoadError};

    fn write_log(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_commits_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "Editor.log",
            &format!("{REPORT_MARKER}\n1.0 mb 50.0% Assets/a.png\nbogus\n---\n"),
        );

        let mut state = AppState::new(0.01);
        let outcome = load_log_file(&mut state, &path).unwrap();

        assert!(outcome.committed);
        assert!(outcome.marker_found);
        assert_eq!(outcome.entries_found, 1);
        assert_eq!(outcome.lines_skipped, 1);
        assert!(!state.is_processing);
        assert!(state.status_message.contains("Loaded 1 assets"));
    }

    #[test]
    fn test_load_without_report_keeps_previous_entries() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_log(
            &dir,
            "good.log",
            &format!("{REPORT_MARKER}\n1.0 mb 50.0% Assets/a.png\n---\n"),
        );
        let empty = write_log(&dir, "empty.log", "Refreshing native plugins\n");

        let mut state = AppState::new(0.01);
        load_log_file(&mut state, &good).unwrap();
        let outcome = load_log_file(&mut state, &empty).unwrap();

        assert!(!outcome.committed);
        assert!(!outcome.marker_found);
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.source_path.as_deref(), Some(good.as_path()));
        assert!(state.status_message.contains("No asset report"));
    }

    #[test]
    fn test_load_missing_file_returns_error_and_clears_processing() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(0.01);
        let result = load_log_file(&mut state, &dir.path().join("nope.log"));

        assert!(
            matches!(
                result,
                Err(BuildSleuthError::Load(LoadError::NotFound { .. }))
            ),
            "expected NotFound, got {result:?}"
        );
        assert!(!state.is_processing);
        assert!(state.status_message.starts_with("Failed to load"));
    }
}
