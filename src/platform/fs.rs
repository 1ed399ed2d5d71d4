// BuildSleuth - platform/fs.rs
//
// Build log acquisition: locating Unity's Editor.log and reading it into
// memory for the parser.

use crate::util::constants::{
    EDITOR_LOG_FILE_NAME, MAX_LOG_FILE_SIZE_BYTES, MAX_READ_RETRIES, MMAP_THRESHOLD_BYTES,
    READ_RETRY_DELAYS_MS,
};
use crate::util::error::LoadError;
use directories::BaseDirs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Location of the Unity editor log for the current user.
///
/// - **Windows**: `%LOCALAPPDATA%\Unity\Editor\Editor.log`
/// - **macOS**: `~/Library/Logs/Unity/Editor.log`
/// - **Linux**: `~/.config/unity3d/Editor.log`
///
/// Returns `None` if the home directory cannot be determined.
pub fn default_editor_log_path() -> Option<PathBuf> {
    let Some(base) = BaseDirs::new() else {
        tracing::warn!("Could not determine home directory for Editor.log lookup");
        return None;
    };

    let dir = if cfg!(target_os = "windows") {
        base.data_local_dir().join("Unity").join("Editor")
    } else if cfg!(target_os = "macos") {
        base.home_dir().join("Library").join("Logs").join("Unity")
    } else {
        base.config_dir().join("unity3d")
    };
    let path = dir.join(EDITOR_LOG_FILE_NAME);

    tracing::debug!(path = %path.display(), "Default Editor.log location");
    Some(path)
}

/// Read a build log into a string.
///
/// Large files are memory-mapped; small ones are read with retries on
/// transient errors, since the editor may still be writing the log.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_editor_log(path: &Path) -> Result<String, LoadError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if !metadata.is_file() {
        return Err(LoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let size = metadata.len();
    if size > MAX_LOG_FILE_SIZE_BYTES {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: MAX_LOG_FILE_SIZE_BYTES,
        });
    }

    let result = if size > MMAP_THRESHOLD_BYTES {
        tracing::debug!(file = %path.display(), size, "Memory-mapping large build log");
        read_mapped(path)
    } else {
        read_with_retry(path)
    };

    result.map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read using `memmap2` (avoids allocating a second full-size buffer for
/// the raw bytes).
fn read_mapped(path: &Path) -> io::Result<String> {
    let file = std::fs::File::open(path)?;
    // SAFETY: the map is read-only and dropped before returning. If the
    // editor appends to the log while it is mapped we may see a torn final
    // line, which the parser tolerates.
    let mmap = unsafe { memmap2::Mmap::map(&file)? };
    Ok(String::from_utf8_lossy(&mmap).into_owned())
}

/// Read a small file with transient-error retries.
fn read_with_retry(path: &Path) -> io::Result<String> {
    let mut last_err: Option<io::Error> = None;

    for attempt in 0..MAX_READ_RETRIES {
        match std::fs::read(path) {
            Ok(bytes) => return Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if is_transient_error(&e) => {
                tracing::debug!(
                    file = %path.display(),
                    attempt = attempt + 1,
                    error = %e,
                    "Transient I/O error, retrying"
                );
                std::thread::sleep(Duration::from_millis(
                    READ_RETRY_DELAYS_MS[attempt as usize],
                ));
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or_else(|| io::Error::other("Unknown read error")))
}

/// Returns true for transient I/O errors that are worth retrying.
fn is_transient_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted | io::ErrorKind::TimedOut
    )
}
