//! fib-report CLI entry point.
//!
//! Generates the configured number of Fibonacci terms and prints the
//! report to stdout. Logs go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fib_report_common::ConfigFile;
use fib_report_core::{Reporter, generate};

/// Print head, middle and tail windows of a wrapping i64 Fibonacci sequence.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of terms to generate (overrides the config file).
    #[arg(long, env = "FIB_TERMS", allow_negative_numbers = true)]
    terms: Option<i64>,

    /// Path to a TOML configuration file.
    #[arg(long, env = "FIB_REPORT_CONFIG")]
    config: Option<PathBuf>,
}

/// Pick the term count: CLI flag or env var first, then the config file.
fn resolve_terms(cli: &Cli, config: &ConfigFile) -> i64 {
    cli.terms.unwrap_or(config.sequence.terms)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,fib_report=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigFile::default(),
    };

    let terms = resolve_terms(&cli, &config);
    info!(terms, "Configuration loaded");

    let sequence = generate(terms);

    let mut reporter = Reporter::with_layout(io::stdout().lock(), config.report)
        .context("Invalid report layout")?;
    reporter
        .report(&sequence)
        .context("Failed to write report to stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_terms(terms: i64) -> ConfigFile {
        let mut config = ConfigFile::default();
        config.sequence.terms = terms;
        config
    }

    #[test]
    fn test_terms_flag_overrides_config() {
        let cli = Cli::try_parse_from(["fib-report", "--terms", "20"]).unwrap();
        assert_eq!(resolve_terms(&cli, &config_with_terms(50)), 20);
    }

    #[test]
    fn test_negative_terms_accepted() {
        let cli = Cli::try_parse_from(["fib-report", "--terms", "-5"]).unwrap();
        assert_eq!(cli.terms, Some(-5));
        assert_eq!(resolve_terms(&cli, &ConfigFile::default()), -5);
    }

    #[test]
    fn test_config_used_without_flag() {
        let cli = Cli {
            terms: None,
            config: None,
        };
        assert_eq!(resolve_terms(&cli, &config_with_terms(50)), 50);
    }

    #[test]
    fn test_default_terms() {
        let cli = Cli {
            terms: None,
            config: None,
        };
        assert_eq!(resolve_terms(&cli, &ConfigFile::default()), 1000);
    }

    #[test]
    fn test_config_path_flag() {
        let cli = Cli::try_parse_from(["fib-report", "--config", "fib.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("fib.toml")));
    }
}
