// BuildSleuth - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.

use serde::Serialize;

// =============================================================================
// Build Entry (normalised output of parsing)
// =============================================================================

/// One asset from the build report: a path and its uncompressed size.
///
/// Entries are only created by the parser and never mutated afterwards.
/// `path` is non-empty and `size_mb` is finite and non-negative; the
/// parser rejects any line that would violate either.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildEntry {
    path: String,
    #[serde(rename = "size_mb")]
    size: f64,
}

impl BuildEntry {
    pub(crate) fn new(path: String, size: f64) -> Self {
        debug_assert!(!path.is_empty());
        debug_assert!(size.is_finite() && size >= 0.0);
        Self { path, size }
    }

    /// Asset path, forward-slash separated.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Uncompressed size in megabytes.
    pub fn size(&self) -> f64 {
        self.size
    }
}

/// Human-readable size: kilobytes below 1 MB, megabytes otherwise.
pub fn format_size(mb: f64) -> String {
    if mb < 1.0 {
        format!("{:.1} KB", mb * crate::util::constants::KILOBYTES_PER_MEGABYTE)
    } else {
        format!("{mb:.2} MB")
    }
}
