mod classify;
mod extract;
mod fetch;
mod pipeline;
mod report;
mod source;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use crate::classify::OpenAiClassifier;
use crate::fetch::HttpFetcher;
use crate::pipeline::Pipeline;

#[derive(Parser)]
#[command(
    name = "activity_scraper",
    about = "Extract categorized activities from web pages via an LLM"
)]
struct Cli {
    /// Input file with one URL per line
    #[arg(long, default_value = "urls.txt")]
    input: PathBuf,

    /// Output JSON document
    #[arg(long, default_value = "summaries.json")]
    output: PathBuf,

    /// Chat-completion model id
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Pause between URLs, in seconds
    #[arg(long, default_value_t = 2)]
    delay_secs: u64,

    /// Max URLs to process (default: all)
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut urls = source::read_urls(&cli.input)?;
    println!("Reading input file complete");
    if let Some(limit) = cli.limit {
        urls.truncate(limit);
    }

    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY environment variable must be set")?;
    let fetcher = HttpFetcher::new()?;
    let classifier = OpenAiClassifier::new(api_key, cli.model);
    let driver = Pipeline::new(fetcher, classifier, Duration::from_secs(cli.delay_secs));

    println!("Processing {} URLs...", urls.len());
    let (results, stats) = driver.run(&urls).await?;

    report::write_results(&cli.output, &results)?;
    stats.print();
    println!("Summaries saved to {}", cli.output.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
