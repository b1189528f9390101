use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use news_digest::{load_config, DigestPipeline};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build per-language Markdown news digests from RSS/Atom feeds.
#[derive(Debug, Parser)]
#[command(name = "news-digest", version, about)]
struct Cli {
    /// Feed configuration (.yml/.yaml, .json or .toml)
    #[arg(long, env = "NEWS_DIGEST_CONFIG", default_value = "config.yml")]
    config: PathBuf,

    /// Directory digests are written under; overrides the config file
    #[arg(long)]
    digest_root: Option<PathBuf>,

    /// Language to build, repeatable; overrides the config file
    #[arg(long = "lang")]
    languages: Vec<String>,

    /// Date to stamp the digest with (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = load_config(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if let Some(root) = cli.digest_root {
        config.digest_root = root;
    }
    let languages = if cli.languages.is_empty() {
        config.languages.clone()
    } else {
        cli.languages
    };
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    info!(
        "Starting news digest for {:?} on {} ({} feeds configured)",
        languages,
        today,
        config.feeds.len()
    );

    let pipeline = DigestPipeline::from_config(&config).context("building feed client")?;
    let paths = pipeline
        .run(&config, &languages, today)
        .await
        .context("writing digests")?;

    for path in paths {
        println!("Saved: {}", path.display());
    }
    Ok(())
}
