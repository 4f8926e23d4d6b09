use std::{fs, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use metacheck::{logger, Engine, Options, Registry, UreqClient};

/// Validate a bibliographic metadata document and cross-reference it
/// against external authorities. The enriched report is printed to stdout
/// as JSON.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the metadata document.
    file: PathBuf,
    /// Model type of the document, e.g. 'ukriss_outputs' or 'csl_json';
    /// selects the generator.
    #[arg(short, long)]
    model_type: String,
    /// Override the Levenshtein ratio fuzzy text comparisons must exceed.
    #[arg(long, value_name = "RATIO")]
    levenshtein_threshold: Option<f64>,
    /// Override the per-request authority timeout, in seconds.
    #[arg(long, value_name = "SECONDS")]
    http_timeout: Option<u64>,
    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbosity.log_level_filter());

    let mut options = Options::default();
    if let Some(ratio) = cli.levenshtein_threshold {
        options.levenshtein_ratio_threshold = ratio;
    }
    if let Some(seconds) = cli.http_timeout {
        options.http_timeout = Duration::from_secs(seconds);
    }

    let input = fs::read(&cli.file)
        .with_context(|| format!("failed to read '{}'", cli.file.display()))?;

    let registry = Registry::with_builtins();
    let client = UreqClient::new(options.http_timeout);
    let engine = Engine::new(&registry, Box::new(client), options);

    let fieldsets = engine.validate_model(&cli.model_type, &input)?;

    let report = if cli.pretty {
        serde_json::to_string_pretty(&fieldsets)?
    } else {
        serde_json::to_string(&fieldsets)?
    };
    println!("{report}");

    Ok(())
}
