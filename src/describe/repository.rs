use crate::describe::DescribeProvider;
use crate::error::{DevscriptsError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, Repository};
use std::path::{Path, PathBuf};

/// Length of the abbreviated hash, matching the git default
const ABBREVIATED_SIZE: u32 = 7;

/// Describes HEAD in-process using `git2`
///
/// Produces the same text as `git describe --tags` without needing a git
/// binary: lightweight tags are considered and the hash is abbreviated to
/// seven characters.
#[derive(Debug, Clone)]
pub struct Git2Describe {
    path: PathBuf,
}

impl Git2Describe {
    /// Discover the repository containing `path` when describing
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Git2Describe {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn describe_head(&self) -> std::result::Result<String, git2::Error> {
        let repo = Repository::discover(&self.path)?;
        let head = repo.head()?.peel_to_commit()?;

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(ABBREVIATED_SIZE);

        let described = head.as_object().describe(&options)?.format(Some(&format))?;
        Ok(described)
    }
}

impl DescribeProvider for Git2Describe {
    fn describe(&self) -> Result<String> {
        tracing::debug!(path = %self.path.display(), "describing HEAD with git2");

        self.describe_head().map_err(|e| {
            DevscriptsError::invocation(format!(
                "Cannot describe repository at '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}
