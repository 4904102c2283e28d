use crate::describe::DescribeProvider;
use crate::error::Result;

/// Suffix marking a build some number of commits after the last tag.
pub const POST_RELEASE_SEPARATOR: &str = ".post";

/// Derives a version string from version-control describe output.
///
/// The input is trimmed and split on `-`. The first token becomes the version;
/// if a second token exists it is appended as `.post<token>` without any
/// validation. Remaining tokens (the abbreviated commit hash, a `dirty` marker)
/// are discarded.
///
/// # Arguments
/// * `describe` - Raw output of `git describe --tags`
///
/// # Returns
/// The derived version string
///
/// # Example
/// ```
/// use devscripts::version::resolve;
///
/// assert_eq!(resolve("v1.2.0"), "v1.2.0");
/// assert_eq!(resolve("v1.2.0-5-gabcdef1"), "v1.2.0.post5");
/// assert_eq!(resolve("  v2.0.0-0-g0000000\n"), "v2.0.0.post0");
/// ```
pub fn resolve(describe: &str) -> String {
    let mut words = describe.trim().split('-').take(2);

    let mut version = words.next().unwrap_or_default().to_string();
    if let Some(commits) = words.next() {
        version.push_str(POST_RELEASE_SEPARATOR);
        version.push_str(commits);
    }
    version
}

/// Asks the provider for describe output and resolves it.
///
/// Fails fast: any provider error is returned as-is and no fallback version
/// is substituted.
pub fn resolve_from<P: DescribeProvider + ?Sized>(provider: &P) -> Result<String> {
    let describe = provider.describe()?;
    tracing::debug!(describe = %describe.trim(), "describe output received");

    let version = resolve(&describe);
    tracing::debug!(%version, "resolved version");
    Ok(version)
}

/// Parses a describe tag as a semantic version.
///
/// Only used to warn about unusual tags; a `None` here never rejects a version.
/// A leading `v` or `V` is ignored.
pub fn tag_semver(tag: &str) -> Option<semver::Version> {
    let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');
    semver::Version::parse(clean_tag).ok()
}
