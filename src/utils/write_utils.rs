//! Output writing utilities
//!
//! Outputs are staged into a temporary file next to their destination and
//! renamed into place once complete. A staged file that is never committed
//! is removed when dropped, so a failed run leaves no partial output behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::errors::{ExtractError, ExtractResult};

/// An encoded output waiting to be moved to its final path
pub struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// Temporary path currently holding the data
    pub fn staged_path(&self) -> &Path {
        self.temp.path()
    }

    /// Atomically replace the target with the staged data
    ///
    /// Any existing file at the target is overwritten.
    pub fn commit(self) -> ExtractResult<PathBuf> {
        let StagedFile { temp, target } = self;
        debug!("Moving {} into place at {}", temp.path().display(), target.display());

        temp.persist(&target).map_err(|e| ExtractError::WriteFailed {
            path: target.clone(),
            source: e.error,
        })?;

        Ok(target)
    }
}

/// Write bytes to a temporary file in the target's directory
///
/// # Arguments
/// * `target` - Final path of the output
/// * `data` - Encoded file contents
///
/// # Returns
/// The staged file, or `WriteFailed` naming the target
pub fn stage_bytes(target: &Path, data: &[u8]) -> ExtractResult<StagedFile> {
    let dir = target.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = target.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("output");

    let write_failed = |source| ExtractError::WriteFailed { path: target.to_path_buf(), source };

    let prefix = format!(".{}.", file_name);
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".tmp");

    // Same mode a plain create would get (0666 less the umask), not tempfile's 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder.tempfile_in(dir).map_err(write_failed)?;

    // An overwritten output keeps the mode it already had
    if let Ok(existing) = fs::metadata(target) {
        fs::set_permissions(temp.path(), existing.permissions()).map_err(write_failed)?;
    }

    temp.write_all(data).map_err(write_failed)?;
    temp.as_file().sync_all().map_err(write_failed)?;

    debug!("Staged {} bytes for {} at {}", data.len(), target.display(), temp.path().display());

    Ok(StagedFile {
        temp,
        target: target.to_path_buf(),
    })
}

/// Create the output directory if it does not exist yet
pub fn ensure_output_dir(dir: &Path) -> ExtractResult<()> {
    if dir.is_dir() {
        return Ok(());
    }

    debug!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| ExtractError::WriteFailed {
        path: dir.to_path_buf(),
        source,
    })
}
