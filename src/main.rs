use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_semver::git::Git2Repository;
use git_semver::{config, ui, GitSemverError, VersionResolver};

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    version,
    about = "Derive a semantic version from git tags and describe output"
)]
struct Args {
    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Directory inside the repository to describe"
    )]
    path: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Ignore uncommitted changes in the working tree")]
    no_dirty: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = config::find_config_file(args.config.as_deref());
    let mut config = match config::load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => fail(e),
    };
    if args.no_dirty {
        config.behavior.show_dirty = false;
    }

    init_tracing(&config.log.level, args.verbose);
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "loaded configuration"),
        None => tracing::debug!("no configuration file found, using defaults"),
    }

    let repo = match Git2Repository::open(&args.path) {
        Ok(repo) => repo,
        Err(e) => fail(e),
    };

    let version = match VersionResolver::new(&config).resolve(&repo) {
        Ok(version) => version,
        Err(e) => fail(e),
    };

    ui::display_version(&version)?;
    Ok(())
}

/// Report the error and exit with its stage-specific code.
fn fail(err: GitSemverError) -> ! {
    ui::display_error(&err.to_string());
    std::process::exit(err.exit_code());
}

/// Logs go to stderr so stdout carries nothing but the version.
fn init_tracing(default_level: &str, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
