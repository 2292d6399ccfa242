//! cookbook - interactive console for the recipe catalog

use std::io;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use recipe_book::{loader, session, Catalog, Console};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cookbook", version, about = "Store, search, and browse recipes")]
struct Cli {
    /// Load the initial recipes from this YAML file instead of the built-in samples
    #[arg(long, value_name = "FILE")]
    seed: Option<Utf8PathBuf>,

    /// Also load every .yaml recipe file found under this directory
    #[arg(long, value_name = "DIR")]
    recipes_dir: Option<Utf8PathBuf>,

    /// Start without the built-in sample recipes
    #[arg(long, conflicts_with = "seed")]
    no_builtin: bool,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);
    debug!(?cli, "starting");

    let mut catalog = load_catalog(&cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.write_line(&format!("Loaded {} recipes.", catalog.len()))?;
    session::run(&mut catalog, &mut console).context("console session failed")?;
    Ok(())
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    if let Some(seed) = &cli.seed {
        let recipes =
            loader::from_path(seed).with_context(|| format!("failed to load seed file {seed}"))?;
        catalog.extend(recipes);
    } else if !cli.no_builtin {
        catalog.extend(loader::builtin().context("failed to load built-in recipes")?);
    }

    if let Some(dir) = &cli.recipes_dir {
        let recipes = loader::from_dir(dir)
            .with_context(|| format!("failed to load recipes from {dir}"))?;
        catalog.extend(recipes);
    }

    Ok(catalog)
}

fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    // Logs go to stderr so they never interleave with the console on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
