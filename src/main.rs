use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};

use doc_version::config::{Config, log_path};
use doc_version::install::InstallationSnippet;
use doc_version::logging::init_logging;
use doc_version::version::checker::has_version_documentation;
use doc_version::version::registries::DocusaurusSite;
use doc_version::version::resolver::VersionResolver;

#[derive(Parser)]
#[command(name = "doc-version")]
#[command(version, about = "Resolve and check documentation versions")]
struct Cli {
    /// Config file (defaults to ./doc-version.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Documentation site directory, overriding the config file
    #[arg(long, global = true)]
    site_dir: Option<PathBuf>,

    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the documentation version to link against
    Resolve {
        /// Resolution mode: latest or latestReleased
        #[arg(long, default_value = "latest")]
        mode: String,

        /// Version the viewer is currently browsing
        #[arg(long)]
        active: Option<String>,
    },
    /// Print the install command for the latest released version
    Install {
        /// Release asset URL prefix, overriding the config file
        #[arg(long)]
        release_asset_url: Option<String>,
    },
    /// Check that the next release has a documentation snapshot
    Check {
        /// release-please manifest, overriding the config file
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Manifest key holding the proposed version
        #[arg(long)]
        component: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_file = cli.log_file.then(log_path);
    let _guard = init_logging(log_file.as_deref(), cli.log_json)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(site_dir) = cli.site_dir {
        config.site_dir = site_dir;
    }
    debug!("Using versions file {:?}", config.versions_path());

    let site = DocusaurusSite::from_config(&config);

    match cli.command {
        Command::Resolve { mode, active } => {
            let resolver = VersionResolver::new(site.registry(active));
            let resolved = resolver.resolve_named(&mode)?;
            println!("{}", resolved);
        }
        Command::Install { release_asset_url } => {
            let url = release_asset_url.unwrap_or(config.install.release_asset_url);
            let resolver = VersionResolver::new(site.registry(None));
            println!("{}", InstallationSnippet::new(url).render(&resolver));
        }
        Command::Check {
            manifest,
            component,
        } => {
            let manifest = manifest.unwrap_or(config.release.manifest);
            let component = component.unwrap_or(config.release.component);
            let check =
                has_version_documentation(&manifest, &component, site.versions_path())?;

            if !check.documented {
                error!("No documentation found for version {}", check.version);
                println!("{}: missing documentation", check.version);
                return Ok(ExitCode::FAILURE);
            }
            println!("{}: documented", check.version);
        }
    }

    Ok(ExitCode::SUCCESS)
}
