//! Writing the deduplicated list to its destination file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
///
/// No trailing newline is added. The file is closed when this returns,
/// whether or not the write succeeded.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] naming `path` if the file cannot be
/// created, written, or flushed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source: std::io::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(contents.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
