//! CLI entry point for quakeplot.
//!
//! Fetches a USGS earthquake feed, flattens it into records and renders the
//! dashboard charts, or exports/summarizes the records.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quakeplot::{
    catalog::SummaryFeed,
    charts::all_charts,
    dashboard::{write_dashboard, write_figures},
    fetch::{BasicClient, fetch_bytes},
    output::{append_record, print_json, print_pretty, write_records_csv},
    parser::parse_feed,
    records::{QuakeRecord, process_data},
    stats::FeedSummary,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "quakeplot")]
#[command(about = "Charts the USGS real-time earthquake feed", long_about = None)]
struct Cli {
    /// Seconds to wait for the feed before giving up
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Path to file or URL to fetch (overrides --feed and QUAKEPLOT_SOURCE)
    #[arg(short, long, value_name = "FILE_OR_URL")]
    source: Option<String>,

    /// USGS summary feed, as <magnitude>_<period> (e.g. 4.5_day) [default: all_week]
    #[arg(short, long)]
    feed: Option<SummaryFeed>,
}

impl SourceArgs {
    /// `--source`, then `--feed`, then `env_source`, then the default feed URL.
    fn resolve(self, env_source: Option<String>) -> String {
        self.source
            .or_else(|| self.feed.map(|f| f.url()))
            .or(env_source)
            .unwrap_or_else(|| SummaryFeed::default().url())
    }
}

fn env_source() -> Option<String> {
    std::env::var("QUAKEPLOT_SOURCE").ok()
}

#[derive(Subcommand)]
enum Commands {
    /// Render the four charts into an HTML dashboard
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory to write index.html and the figure JSON files into
        #[arg(short, long, default_value = "dashboard")]
        out_dir: PathBuf,

        /// Page heading
        #[arg(short, long, default_value = "Séismes récents")]
        title: String,
    },
    /// Export the flattened records as CSV
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// CSV file to write
        #[arg(short, long, default_value = "quakes.csv")]
        output: String,

        /// Gzip compress the CSV
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
    /// Log summary statistics for the feed
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Optional: CSV file to append the summary row to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the available USGS summary feeds
    ListFeeds,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/quakeplot.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("quakeplot.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %format!("{e:#}"), "Command failed");
        return Err(e);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let timeout = Duration::from_secs(cli.timeout_secs);

    match cli.command {
        Commands::Render {
            source,
            out_dir,
            title,
        } => {
            let source = source.resolve(env_source());
            let records = load_records(&source, timeout).await?;

            let charts = all_charts(&records);
            write_figures(&out_dir, &charts)?;
            let page = write_dashboard(&out_dir, &charts, &title)?;

            info!(page = %page.display(), records = records.len(), "Render complete");
        }
        Commands::Export {
            source,
            output,
            gzip,
        } => {
            let source = source.resolve(env_source());
            let records = load_records(&source, timeout).await?;

            write_records_csv(&output, &records, gzip)?;
        }
        Commands::Summary { source, output } => {
            let source = source.resolve(env_source());

            let summary = match load_records(&source, timeout).await {
                Ok(records) => FeedSummary::from_records(&records).with_source(&source),
                Err(e) => {
                    if let Some(output) = &output {
                        let error_summary = FeedSummary::from_error("load_error", &e.to_string())
                            .with_source(&source);
                        append_record(output, &error_summary)?;
                    }
                    return Err(e);
                }
            };

            print_pretty(&summary);
            print_json(&summary)?;
            info!(
                events = summary.total_events,
                magnitude_pct = summary.magnitude_pct(),
                days = summary.days,
                "Feed summary"
            );
            if let Some(output) = &output {
                append_record(output, &summary)?;
            }
        }
        Commands::ListFeeds => {
            let feeds = SummaryFeed::all();

            for feed in &feeds {
                info!(feed = %feed, url = %feed.url(), "Feed");
            }

            info!(total = feeds.len(), default = %SummaryFeed::default(), "Feed list summary");
        }
    }

    Ok(())
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads feed data from a local file path or fetches it over HTTP.
#[tracing::instrument(skip(timeout), fields(source = %source))]
async fn fetcher(source: &str, timeout: Duration) -> Result<Vec<u8>> {
    let bytes = if is_url(source) {
        let client = BasicClient::with_timeout(timeout)?;
        fetch_bytes(&client, source).await?
    } else {
        std::fs::read(source).with_context(|| format!("reading {source}"))?
    };
    Ok(bytes)
}

/// Fetches, parses and flattens the feed into one record per feature.
#[tracing::instrument(skip(timeout))]
async fn load_records(source: &str, timeout: Duration) -> Result<Vec<QuakeRecord>> {
    let bytes = fetcher(source, timeout).await?;
    let feed = parse_feed(&bytes)?;
    let records = process_data(&feed);

    info!(
        features = feed.features.len(),
        records = records.len(),
        "Feed processed"
    );
    Ok(records)
}
