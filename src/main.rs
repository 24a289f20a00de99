//! CLI tool for Steam review sentiment analysis
//!
//! Provides commands for analyzing live store reviews and for running the
//! pipeline over the built-in sample data.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use steam_sentiment::api::SteamClient;
use steam_sentiment::collector::{sample_reviews, RetrievalOutcome};
use steam_sentiment::pipeline::{
    resolve_and_analyze, run_analysis_with, AnalysisRequest, AnalysisSummary, CollectConfig,
};

#[derive(Parser)]
#[command(name = "steam_sentiment")]
#[command(about = "Steam review sentiment analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect reviews from the store and score their sentiment
    Analyze {
        /// Steam app id (e.g., 730 for Counter Strike 2)
        #[arg(short, long, default_value = "730")]
        app_id: String,

        /// Product name, used in the report header
        #[arg(short, long, default_value = "Counter Strike 2")]
        name: String,

        /// Number of reviews to collect
        #[arg(short, long, default_value = "50")]
        count: usize,

        /// Maximum endpoint pages to fetch
        #[arg(long, default_value = "5")]
        max_pages: usize,

        /// Pause between page fetches, in milliseconds
        #[arg(long, default_value = "2000")]
        delay_ms: u64,
    },

    /// Score the built-in sample reviews without any network access
    Sample {
        /// Number of sample reviews to generate
        #[arg(short, long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("steam_sentiment=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { app_id, name, count, max_pages, delay_ms } => {
            analyze(&app_id, &name, count, max_pages, delay_ms)?;
        }
        Commands::Sample { count } => {
            analyze_samples(count)?;
        }
    }

    Ok(())
}

fn analyze(app_id: &str, name: &str, count: usize, max_pages: usize, delay_ms: u64) -> Result<()> {
    println!("Analyzing {} reviews for {} (app {})...\n", count, name, app_id);

    let request = AnalysisRequest::new(app_id, name, count)?;
    let client = SteamClient::new(app_id);
    let config = CollectConfig {
        max_pages,
        page_delay: Duration::from_millis(delay_ms),
    };

    let summary = run_analysis_with(&request, &client, &config)?;
    print_summary(&summary);

    Ok(())
}

fn analyze_samples(count: usize) -> Result<()> {
    println!("Scoring {} built-in sample reviews...\n", count);

    let request = AnalysisRequest::new("sample", "Sample Data", count)?;
    let outcome = RetrievalOutcome::Collected(sample_reviews(count));

    let summary = resolve_and_analyze(&request, outcome)?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &AnalysisSummary) {
    let stats = &summary.stats;

    println!("Analyzed {} reviews\n", summary.review_count);
    println!("{:<12} {:>10} {:>10} {:>10} {:>12} {}",
        "Date", "Recommend", "Hours", "Compound", "Label", "Review");
    println!("{}", "-".repeat(100));

    for row in summary.table.rows().iter().take(15) {
        let sentiment = match &row.sentiment {
            Some(s) => s,
            None => continue,
        };
        let mut preview: String = row.review.text.chars().take(40).collect();
        if row.review.text.chars().count() > 40 {
            preview.push_str("...");
        }
        println!("{:<12} {:>10} {:>10.1} {:>10.3} {:>12} {}",
            row.review.posted_date.format("%Y-%m-%d"),
            if row.review.recommended { "True" } else { "False" },
            row.review.playtime_hours,
            sentiment.scores.compound,
            sentiment.label.as_str(),
            preview);
    }

    if summary.table.len() > 15 {
        println!("... and {} more reviews", summary.table.len() - 15);
    }

    println!("\n--- Statistics ---");
    println!("Recommended: {} | Not recommended: {}", stats.recommended, stats.not_recommended);
    println!("Labels - Positive: {}, Neutral: {}, Negative: {}",
        stats.positive, stats.neutral, stats.negative);
    println!("Mean compound: {:.3} (recommended: {:.3}, not recommended: {:.3})",
        stats.avg_compound,
        stats.recommended_avg_compound,
        stats.not_recommended_avg_compound);
}
