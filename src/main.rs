use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use devscripts::boundary::{self, BoundaryWarning};
use devscripts::config::{self, Backend, Config};
use devscripts::describe::{self, DescribeParts, DescribeProvider, StaticDescribe};
use devscripts::{manifest, scripts, ui, version};

#[derive(Parser)]
#[command(
    name = "devscripts",
    version,
    about = "Derive package versions from git tags and list development scripts"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Show debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the version derived from `git describe --tags`
    Version(SourceArgs),
    /// Show describe output, its parts and the derived version
    Describe(SourceArgs),
    /// List the scripts that would be installed
    Scripts {
        #[arg(long, default_value = ".", help = "Project root")]
        root: PathBuf,
    },
    /// Print the package manifest as TOML
    Manifest {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, default_value = ".", help = "Project root")]
        root: PathBuf,

        #[arg(short, long, help = "Write the manifest to a file instead of stdout")]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    #[arg(long, help = "Resolve this describe string instead of asking git")]
    describe: Option<String>,

    #[arg(long, help = "Describe backend: git or git2")]
    backend: Option<Backend>,

    #[arg(long, default_value = ".", help = "Repository to describe")]
    repo: PathBuf,
}

impl SourceArgs {
    fn provider(&self, config: &Config) -> Box<dyn DescribeProvider> {
        if let Some(describe) = &self.describe {
            return Box::new(StaticDescribe::new(describe.clone()));
        }

        let mut version_config = config.version.clone();
        if let Some(backend) = self.backend {
            version_config.backend = backend;
        }
        describe::from_config(&version_config, &self.repo)
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and --version go to stdout and succeed; usage errors exit 1
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref()).context("Error loading config")?;

    match cli.command {
        Command::Version(source) => {
            let provider = source.provider(&config);
            let describe = provider.describe()?;
            let version = version::resolve(&describe);
            report_warnings(&boundary::check_describe(&DescribeParts::parse(&describe)));
            ui::display_version(&version);
        }
        Command::Describe(source) => {
            let provider = source.provider(&config);
            let describe = provider.describe()?;
            let version = version::resolve(&describe);
            let parts = DescribeParts::parse(&describe);
            report_warnings(&boundary::check_describe(&parts));
            ui::display_describe(&describe, &parts, &version);
        }
        Command::Scripts { root } => {
            let found = list_scripts(&config, &root)?;
            ui::display_scripts(&found);
        }
        Command::Manifest {
            source,
            root,
            output,
        } => {
            let provider = source.provider(&config);
            let manifest = manifest::build_manifest(&config, &provider, &root)
                .context("Failed to assemble manifest")?;
            if manifest.scripts.is_empty() {
                ui::display_boundary_warning(&BoundaryWarning::NoScriptsMatched {
                    pattern: config.scripts.pattern.clone(),
                });
            }

            let rendered = manifest.to_toml()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    ui::display_success(&format!("Wrote manifest to {}", path.display()));
                }
                None => ui::display_manifest(&manifest, &rendered),
            }
        }
    }

    Ok(())
}

fn list_scripts(config: &Config, root: &Path) -> Result<Vec<PathBuf>> {
    let found = scripts::discover(root, &config.scripts.pattern)?;
    if found.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoScriptsMatched {
            pattern: config.scripts.pattern.clone(),
        });
    }
    Ok(found)
}

fn report_warnings(warnings: &[BoundaryWarning]) {
    for warning in warnings {
        ui::display_boundary_warning(warning);
    }
}
