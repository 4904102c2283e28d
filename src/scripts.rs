//! Enumeration of the executable scripts shipped with the package.
//!
//! Scripts are passed through to the manifest untouched; nothing here reads
//! their contents.

use crate::error::Result;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Finds the files matching `pattern` below `root`.
///
/// Directories are skipped. Paths are returned relative to `root` and sorted.
///
/// # Arguments
/// * `root` - Project root the pattern is evaluated against
/// * `pattern` - Glob such as `scripts/*`
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Matching files, possibly empty
/// * `Err` - If the pattern is invalid or an entry cannot be read
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let root_str = Pattern::escape(&root.to_string_lossy());
    let full_pattern = Path::new(&root_str).join(pattern);

    let mut scripts = Vec::new();
    for entry in glob(&full_pattern.to_string_lossy())? {
        let path = entry.map_err(std::io::Error::from)?;
        if !path.is_file() {
            tracing::trace!(path = %path.display(), "skipping non-file match");
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        scripts.push(relative);
    }

    scripts.sort();
    tracing::debug!(count = scripts.len(), pattern, "scripts matched");
    Ok(scripts)
}
