// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the badge generator binary.
//!
//! The run is a single synchronous pipeline: load the configuration, issue
//! one GraphQL query, normalize the response, render the sparkline and the
//! badge document, and write the artifact to the output path.

use std::{path::PathBuf, process};

use chrono::Utc;
use clap::Parser;
use ghbadge::{
    Error, RenderContext, SPARKLINE_DAYS, build_query, load_config, normalize, render_badge,
    run_query, sparkline_svg, write_badge,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for generating a GitHub activity badge.
#[derive(Debug, Parser)]
#[command(name = "ghbadge", version, about = "Render a GitHub activity badge")]
struct Cli {
    /// Path to the JSON configuration file with credentials.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Output path for the generated badge document.
    #[arg(
        short = 'o',
        long = "outpath",
        value_name = "PATH",
        default_value = "badge.html"
    )]
    outpath: PathBuf
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(error) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

/// Executes the badge pipeline using parsed arguments.
///
/// # Errors
///
/// Propagates errors from configuration loading, the GraphQL transport, and
/// the badge writer.
async fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    // The run instant is captured once and threaded explicitly so the query
    // window and the recency decision agree.
    let now = Utc::now();
    let query = build_query(&config.username, now);

    info!(username = %config.username, "running GitHub GraphQL query");
    let http = reqwest::Client::new();
    let raw = run_query(&http, &query, &config.apikey).await?;

    let stats = normalize(&raw, now);
    info!(
        stargazers = stats.stargazers,
        languages = stats.languages.len(),
        "normalized activity statistics"
    );

    let sparkline = sparkline_svg(&stats.contribs);
    let context = RenderContext {
        user:             &stats,
        days:             SPARKLINE_DAYS,
        support:          config.support,
        commit_sparkline: &sparkline,
        generated_at:     now
    };
    let html = render_badge(&context);
    write_badge(&cli.outpath, &html)?;

    info!(path = %cli.outpath.display(), "badge generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::Cli;

    #[test]
    fn cli_requires_config_path() {
        let result = Cli::try_parse_from([env!("CARGO_PKG_NAME")]);
        assert!(result.is_err(), "missing --config must be rejected");
    }

    #[test]
    fn cli_defaults_outpath_to_badge_html() {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--config", "config.json"])
            .expect("failed to parse CLI");

        assert_eq!(cli.config.as_path(), Path::new("config.json"));
        assert_eq!(cli.outpath.as_path(), Path::new("badge.html"));
    }

    #[test]
    fn cli_accepts_outpath_override() {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--config",
            "config.json",
            "--outpath",
            "out/profile.html",
        ])
        .expect("failed to parse CLI");

        assert_eq!(cli.outpath.as_path(), Path::new("out/profile.html"));
    }

    #[test]
    fn cli_accepts_short_flags() {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "-c",
            "config.json",
            "-o",
            "badge2.html",
        ])
        .expect("failed to parse CLI");

        assert_eq!(cli.config.as_path(), Path::new("config.json"));
        assert_eq!(cli.outpath.as_path(), Path::new("badge2.html"));
    }
}
