// BuildSleuth - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// The report literals below are contracts with the Unity editor log format
// and must match it byte for byte.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "BuildSleuth";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "BuildSleuth";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Unity build report format
// =============================================================================

/// Line that opens the asset size report section of a build log.
pub const REPORT_MARKER: &str =
    "Used Assets and files from the Resources folder, sorted by uncompressed size:";

/// Any trimmed line starting with this closes the report section.
pub const REPORT_TERMINATOR_PREFIX: &str = "---";

/// Separator between the percentage column and the asset path.
pub const PATH_DELIMITER: &str = "% ";

/// The only unit code that triggers a conversion. Everything else is
/// assumed to already be megabytes.
pub const KILOBYTE_UNIT: &str = "kb";

/// Number of characters in a unit code ("kb", "mb").
pub const UNIT_CODE_LEN: usize = 2;

/// Divisor from kilobytes to megabytes (the editor reports decimal units).
pub const KILOBYTES_PER_MEGABYTE: f64 = 1000.0;

/// Prefix the editor uses for built-in texture atlases, which are reported
/// by name rather than by file path.
pub const ATLAS_PREFIX: &str = "Built-in Texture2D: ";

/// Replacement directory for atlas names.
pub const ATLAS_DIR: &str = "Atlases/";

/// Extension appended to atlas names.
pub const ATLAS_EXTENSION: &str = ".png";

// =============================================================================
// Merge size (chart threshold)
// =============================================================================

/// Entries smaller than this many megabytes are hidden from the chart.
pub const DEFAULT_MERGE_SIZE_MB: f64 = 0.01;

/// Lowest accepted merge size (0 shows everything).
pub const MIN_MERGE_SIZE_MB: f64 = 0.0;

/// Highest accepted merge size (prevents configuration mistakes).
pub const MAX_MERGE_SIZE_MB: f64 = 1024.0;

// =============================================================================
// Log file reading
// =============================================================================

/// Files above this size are memory-mapped rather than read into a buffer.
pub const MMAP_THRESHOLD_BYTES: u64 = 16 * 1024 * 1024; // 16 MB

/// Hard upper bound on the size of a build log we are willing to load.
pub const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024 * 1024; // 2 GB

/// Number of attempts for reads that fail with a transient error. The editor
/// keeps Editor.log open for writing while it runs.
pub const MAX_READ_RETRIES: u32 = 3;

/// Delay before each retry attempt.
pub const READ_RETRY_DELAYS_MS: [u64; 3] = [50, 100, 200];

/// Unity's Editor.log file name.
pub const EDITOR_LOG_FILE_NAME: &str = "Editor.log";

// =============================================================================
// Chart
// =============================================================================

/// Label shown before any report has been loaded.
pub const PLACEHOLDER_LABEL: &str = "None";

/// Colour of the placeholder slice.
pub const PLACEHOLDER_COLOUR: &str = "#000000";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Name of the configuration file within the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
