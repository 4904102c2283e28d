//! Terminal output for the command-line front-end.
//!
//! Results go to stdout unstyled so they can be captured by scripts; status,
//! warnings and errors go to stderr.

use crate::boundary::BoundaryWarning;
use crate::describe::DescribeParts;
use crate::manifest::PackageManifest;
use console::style;
use std::path::PathBuf;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print the resolved version on its own line.
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Show raw describe output, its parts and the resolved version.
pub fn display_describe(describe: &str, parts: &DescribeParts, version: &str) {
    println!("{}", style("Describe output:").bold());
    println!("  raw:     {}", describe.trim());
    println!("  tag:     {}", parts.tag);
    match &parts.commits_since_tag {
        None => println!("  commits: 0 (exact tag)"),
        Some(count) if parts.is_exact_tag() => println!("  commits: {} (exact tag)", count),
        Some(count) => println!("  commits: {}", count),
    }
    println!("  hash:    {}", parts.commit_hash.as_deref().unwrap_or("-"));
    println!("  dirty:   {}", if parts.dirty { "yes" } else { "no" });
    println!("{} {}", style("Version:").bold(), style(version).green());
}

/// List script paths, one per line.
pub fn display_scripts(scripts: &[PathBuf]) {
    for script in scripts {
        println!("{}", script.display());
    }
}

/// Print the manifest in TOML form.
pub fn display_manifest(manifest: &PackageManifest, rendered: &str) {
    display_status(&format!(
        "Manifest for {} {} ({} scripts)",
        manifest.name,
        manifest.version,
        manifest.scripts.len()
    ));
    print!("{}", rendered);
}
