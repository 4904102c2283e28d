//! Sources of version-control describe output
//!
//! The version resolver never runs git itself. It asks a [DescribeProvider]
//! for the raw output of `git describe --tags`, which keeps resolution a pure
//! function and lets tests run without a repository.
//!
//! # Overview
//!
//! - [command::GitCommand]: runs the `git` binary as a subprocess
//! - [repository::Git2Describe]: computes the same output in-process with `git2`
//! - [mock::StaticDescribe]: returns a fixed string
//!
//! ```rust
//! # use devscripts::describe::{DescribeProvider, StaticDescribe};
//! let provider = StaticDescribe::new("v1.2.0-5-gabcdef1");
//! assert_eq!(provider.describe().unwrap(), "v1.2.0-5-gabcdef1");
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommand;
pub use mock::StaticDescribe;
pub use repository::Git2Describe;

use crate::config::{Backend, VersionConfig};
use crate::error::Result;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Capability returning the raw describe output for the current revision
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so a provider can be shared freely.
///
/// ## Error Handling
///
/// Implementations report every failure to obtain the output (tool missing,
/// not inside a repository, non-zero exit) as
/// [crate::error::DevscriptsError::Invocation]. The output itself is never
/// validated.
pub trait DescribeProvider: Send + Sync {
    /// Get the describe output, e.g. `v1.2.0-5-gabcdef1`
    fn describe(&self) -> Result<String>;
}

impl<P: DescribeProvider + ?Sized> DescribeProvider for Box<P> {
    fn describe(&self) -> Result<String> {
        (**self).describe()
    }
}

/// Build the provider selected by the configuration, rooted at `repo`.
pub fn from_config(config: &VersionConfig, repo: &Path) -> Box<dyn DescribeProvider> {
    match config.backend {
        Backend::Git => Box::new(
            GitCommand::new()
                .with_program(config.git_program.clone())
                .in_dir(repo),
        ),
        Backend::Git2 => Box::new(Git2Describe::open(repo)),
    }
}

/// Structured view of a describe string, for display and warnings
///
/// Built from the same `-` separated tokens that [crate::version::resolve]
/// uses, so the tag and count shown always match the resolved version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeParts {
    /// First token, the nearest tag
    pub tag: String,
    /// Second token as reported, normally the commits made since the tag
    pub commits_since_tag: Option<String>,
    /// Abbreviated commit hash without the `g` prefix
    pub commit_hash: Option<String>,
    /// Whether a `dirty` marker follows the commit hash
    pub dirty: bool,
}

fn hash_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^g(?P<hash>[0-9a-fA-F]+)$").expect("hash pattern is valid"))
}

impl DescribeParts {
    /// Split describe output into its parts
    pub fn parse(describe: &str) -> Self {
        let mut words = describe.trim().split('-');

        let tag = words.next().unwrap_or_default().to_string();
        let commits_since_tag = words.next().map(str::to_string);

        let mut commit_hash = None;
        let mut dirty = false;
        for word in words {
            if word == "dirty" {
                dirty = true;
            } else if let Some(caps) = hash_regex().captures(word) {
                commit_hash.get_or_insert_with(|| caps["hash"].to_string());
            }
        }

        DescribeParts {
            tag,
            commits_since_tag,
            commit_hash,
            dirty,
        }
    }

    /// The commit count, when the second token is a number
    pub fn commit_count(&self) -> Option<u64> {
        self.commits_since_tag.as_deref()?.parse().ok()
    }

    /// Whether the described revision is exactly the tagged one
    pub fn is_exact_tag(&self) -> bool {
        match &self.commits_since_tag {
            None => true,
            Some(_) => self.commit_count() == Some(0),
        }
    }
}
