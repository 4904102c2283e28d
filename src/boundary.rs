use crate::describe::DescribeParts;
use crate::version;
use std::fmt;

/// Non-fatal observations about the version or scripts.
/// They are reported to the user but never change the computed result.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The tag does not parse as a semantic version
    NonSemverTag { tag: String },
    /// The second describe token is not a commit count
    NonNumericCommitCount { tag: String, count: String },
    /// The working tree has uncommitted changes
    DirtyWorkingTree { tag: String },
    /// The script pattern matched nothing
    NoScriptsMatched { pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NonSemverTag { tag } => {
                write!(f, "Tag '{}' is not a MAJOR.MINOR.PATCH version", tag)
            }
            BoundaryWarning::NonNumericCommitCount { tag, count } => {
                write!(
                    f,
                    "Commit count '{}' after tag '{}' is not a number",
                    count, tag
                )
            }
            BoundaryWarning::DirtyWorkingTree { tag } => {
                write!(f, "Working tree has local changes since tag '{}'", tag)
            }
            BoundaryWarning::NoScriptsMatched { pattern } => {
                write!(f, "No scripts match pattern '{}'", pattern)
            }
        }
    }
}

/// Inspects the parts of describe output.
///
/// Works on the describe tokens rather than the resolved version, so a tag
/// that itself contains `.post` is judged as a whole.
pub fn check_describe(parts: &DescribeParts) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    if version::tag_semver(&parts.tag).is_none() {
        warnings.push(BoundaryWarning::NonSemverTag {
            tag: parts.tag.clone(),
        });
    }

    if let Some(count) = &parts.commits_since_tag {
        if parts.commit_count().is_none() {
            warnings.push(BoundaryWarning::NonNumericCommitCount {
                tag: parts.tag.clone(),
                count: count.clone(),
            });
        }
    }

    if parts.dirty {
        warnings.push(BoundaryWarning::DirtyWorkingTree {
            tag: parts.tag.clone(),
        });
    }

    warnings
}
