use crate::config::Config;
use crate::describe::DescribeProvider;
use crate::error::{DevscriptsError, Result};
use crate::{scripts, version};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Package metadata handed to the packaging system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub author_email: String,
    pub scripts: Vec<PathBuf>,
    pub classifiers: Vec<String>,
}

impl PackageManifest {
    /// Render the manifest as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DevscriptsError::config(e.to_string()))
    }
}

/// Assembles the manifest for the project at `root`.
///
/// The version comes from `provider`; if it cannot be obtained the whole
/// assembly fails and no fallback version is used.
///
/// # Arguments
/// * `config` - Package metadata and script pattern
/// * `provider` - Source of describe output
/// * `root` - Project root the script pattern is evaluated against
pub fn build_manifest<P: DescribeProvider + ?Sized>(
    config: &Config,
    provider: &P,
    root: &Path,
) -> Result<PackageManifest> {
    let version = version::resolve_from(provider)?;
    let scripts = scripts::discover(root, &config.scripts.pattern)?;

    let package = &config.package;
    Ok(PackageManifest {
        name: package.name.clone(),
        version,
        description: package.description.clone(),
        author: package.author.clone(),
        author_email: package.author_email.clone(),
        scripts,
        classifiers: package.classifiers.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::StaticDescribe;
    use std::fs;

    #[test]
    fn test_build_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("scripts")).unwrap();
        fs::write(dir.path().join("scripts/release"), "#!/bin/sh\n").unwrap();

        let manifest = build_manifest(
            &Config::default(),
            &StaticDescribe::new("v1.2.0-5-gabcdef1\n"),
            dir.path(),
        )
        .unwrap();

        assert_eq!(manifest.name, "devscripts");
        assert_eq!(manifest.version, "v1.2.0.post5");
        assert_eq!(manifest.scripts, vec![PathBuf::from("scripts/release")]);
    }

    #[test]
    fn test_to_toml() {
        let manifest = PackageManifest {
            name: "devscripts".to_string(),
            version: "v1.0.0".to_string(),
            description: "d".to_string(),
            author: "a".to_string(),
            author_email: "a@example.com".to_string(),
            scripts: vec![PathBuf::from("scripts/x")],
            classifiers: vec!["Environment :: Console".to_string()],
        };

        let text = manifest.to_toml().unwrap();
        assert!(text.contains("version = \"v1.0.0\""));
        assert!(text.contains("scripts/x"));

        let parsed: PackageManifest = toml::from_str(&text).unwrap();
        assert_eq!(parsed, manifest);
    }
}
