// BuildSleuth - core/parser.rs
//
// Extraction of the asset size report from Unity editor build log text.
// Core layer: works on an in-memory string, never touches the filesystem.
//
// Report shape (one asset per line, between marker and terminator):
//
//   Used Assets and files from the Resources folder, sorted by uncompressed size:
//    12.3 mb	 5.2% Assets/Textures/Hero.png
//    512.0 kb	 0.2% Assets/Audio/Click.wav
//    3.5 mb	 1.5% Built-in Texture2D: sactx-0-1024x1024-DXT5-UI
//   -------------------------------------------------------------------------------

use crate::core::model::BuildEntry;
use crate::util::constants::{
    ATLAS_DIR, ATLAS_EXTENSION, ATLAS_PREFIX, KILOBYTES_PER_MEGABYTE, KILOBYTE_UNIT,
    PATH_DELIMITER, REPORT_MARKER, REPORT_TERMINATOR_PREFIX, UNIT_CODE_LEN,
};

/// Result of scanning a build log, with diagnostics for the caller.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Entries in the order they appear in the log.
    pub entries: Vec<BuildEntry>,
    /// 1-based line number of the report marker, if one was found.
    pub marker_line: Option<u64>,
    /// Report lines examined after the marker (terminator excluded).
    pub lines_scanned: u64,
    /// Report lines that did not yield an entry.
    pub lines_skipped: u64,
    /// Whether the section was closed by a terminator line rather than
    /// running to the end of the input.
    pub terminated: bool,
}

impl ParseResult {
    pub fn marker_found(&self) -> bool {
        self.marker_line.is_some()
    }
}

/// Why a report line did not produce an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRejection {
    /// No space separates the size from the rest of the line.
    NoSizeField,
    /// The size field is not a number.
    InvalidSize,
    /// The size is NaN, infinite, or negative.
    SizeOutOfRange,
    /// The "% " separator before the path is missing.
    NoPathDelimiter,
    /// Nothing follows the "% " separator.
    EmptyPath,
}

impl LineRejection {
    fn reason(self) -> &'static str {
        match self {
            Self::NoSizeField => "no size field",
            Self::InvalidSize => "size is not a number",
            Self::SizeOutOfRange => "size is not a finite non-negative number",
            Self::NoPathDelimiter => "missing '% ' before path",
            Self::EmptyPath => "empty path",
        }
    }
}

/// Extract the asset entries from a build log.
///
/// Only the first report section is read. Returns an empty vector when the
/// marker is missing or the section holds no valid entries.
pub fn parse(text: &str) -> Vec<BuildEntry> {
    parse_report(text).entries
}

/// Extract the asset entries from a build log, keeping scan diagnostics.
pub fn parse_report(text: &str) -> ParseResult {
    let mut result = ParseResult::default();

    // `lines()` splits on both "\n" and "\r\n" and strips the "\r".
    let mut lines = text.lines().enumerate();

    for (idx, line) in lines.by_ref() {
        if line.trim() == REPORT_MARKER {
            result.marker_line = Some(idx as u64 + 1);
            break;
        }
    }

    let Some(marker_line) = result.marker_line else {
        tracing::debug!("Build report marker not found");
        return result;
    };

    for (idx, line) in lines {
        let line = line.trim();
        if line.starts_with(REPORT_TERMINATOR_PREFIX) {
            result.terminated = true;
            break;
        }

        result.lines_scanned += 1;
        match read_entry(line) {
            Ok(entry) => result.entries.push(entry),
            Err(rejection) => {
                result.lines_skipped += 1;
                tracing::trace!(
                    line_number = idx + 1,
                    reason = rejection.reason(),
                    "Skipping report line"
                );
            }
        }
    }

    tracing::debug!(
        marker_line,
        entries = result.entries.len(),
        skipped = result.lines_skipped,
        terminated = result.terminated,
        "Build report parsed"
    );

    result
}

/// Parse a single report line into an entry.
///
/// Expects `<size> <unit>... <percent>% <path>`. Returns `None` for any
/// line that does not fit that shape.
pub fn parse_entry(line: &str) -> Option<BuildEntry> {
    read_entry(line).ok()
}

fn read_entry(line: &str) -> Result<BuildEntry, LineRejection> {
    let (size_field, rest) = line.split_once(' ').ok_or(LineRejection::NoSizeField)?;

    let mut size: f64 = size_field
        .parse()
        .map_err(|_| LineRejection::InvalidSize)?;

    if rest.get(..UNIT_CODE_LEN) == Some(KILOBYTE_UNIT) {
        size /= KILOBYTES_PER_MEGABYTE;
    }

    if !size.is_finite() || size < 0.0 {
        return Err(LineRejection::SizeOutOfRange);
    }

    let path_start = line
        .find(PATH_DELIMITER)
        .ok_or(LineRejection::NoPathDelimiter)?
        + PATH_DELIMITER.len();
    let path = &line[path_start..];
    if path.is_empty() {
        return Err(LineRejection::EmptyPath);
    }

    Ok(BuildEntry::new(normalize_path(path), size))
}

/// Map built-in texture atlas names to a path-like label.
///
/// `Built-in Texture2D: Foo` becomes `Atlases/Foo.png`; any other path is
/// returned unchanged.
pub fn normalize_path(path: &str) -> String {
    match path.strip_prefix(ATLAS_PREFIX) {
        Some(name) => format!("{ATLAS_DIR}{name}{ATLAS_EXTENSION}"),
        None => path.to_string(),
    }
}
