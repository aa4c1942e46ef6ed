use std::io::Write as _;

use anyhow::Context;
use clap::Parser;

mod cli;
mod compare;
mod output;
mod ui;

/// Exit status when differences were found and failing is enabled.
const EXIT_DIFFERENCES: i32 = 1;
/// Exit status for source, configuration, or structure errors.
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => std::process::exit(EXIT_DIFFERENCES),
        Ok(false) => {}
        Err(error) => {
            eprintln!("gqldiff error: {error:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Returns whether the process should exit with [`EXIT_DIFFERENCES`].
async fn run() -> anyhow::Result<bool> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config =
        gqld_config::GqlDiffConfig::load_with_dotenv().context("failed to load configuration")?;
    let report = cli.report(config.report);

    let diff = compare::compare(&cli, &config, report).await?;

    let color = ui::color_enabled(cli.color, cli.format);
    let rendered = output::render(&diff, cli.format, color)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(report.fail && diff.has_differences())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GQLDIFF_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
