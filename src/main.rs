use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use version_sanity::config::{self, Config};
use version_sanity::{IntervalNotationParser, SchemeRegistry, logging};

#[derive(Parser)]
#[command(name = "version-sanity")]
#[command(
    version,
    about = "Parse version ranges in interval notation and match versions against them"
)]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/version-sanity/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Versioning scheme identifier, e.g. "integer" or "semver"
    #[arg(long, global = true)]
    scheme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check which versions satisfy a range
    Matches {
        /// Range in interval notation, e.g. "[1,4)"
        range: String,
        /// Versions to check
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Show how a range is split into boundaries and version tokens
    Inspect {
        /// Range in interval notation
        range: String,
    },
    /// List the available versioning schemes
    Schemes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)?;
    logging::init(&config.log.level)?;
    debug!("Loaded configuration from {}", config_path.display());

    let registry = SchemeRegistry::standard();
    let scheme = cli.scheme.unwrap_or(config.default_scheme);

    run(cli.command, registry, &scheme, &mut std::io::stdout().lock())
}

fn run(
    command: Command,
    registry: &SchemeRegistry,
    scheme: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Matches { range, versions } => {
            let parsed = registry
                .parse_range(scheme, &range)
                .with_context(|| format!("Invalid {scheme} range"))?;

            for text in versions {
                let version = registry
                    .parse_version(scheme, &text)
                    .with_context(|| format!("Invalid {scheme} version"))?;
                writeln!(out, "{}\t{}", text, parsed.matches(&version)?)?;
            }
        }
        Command::Inspect { range } => {
            let interval = IntervalNotationParser::new().parse(&range)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&interval)?)?;
        }
        Command::Schemes => {
            for id in registry.ids() {
                let supports_ranges = registry
                    .get(id)
                    .is_some_and(|versioning| versioning.supports_ranges());
                writeln!(out, "{id}\tranges: {supports_ranges}")?;
            }
        }
    }

    Ok(())
}
