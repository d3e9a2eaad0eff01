//! AI Compliance main entry point
//!
//! This is the command-line interface for the AI compliance analyzer.

use ai_compliance::config::{load_config_with_hash, validate, Config};
use ai_compliance::report::{generate_markdown_report, print_report, save_report};
use ai_compliance::{normalize_target, Analyzer};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// AI Compliance: a heuristic AI-readiness auditor for websites
///
/// Crawls a handful of same-domain pages from the target site, scores them
/// across six categories (content quality, technical performance, semantic
/// structure, AI readiness, E-E-A-T and mobile optimization) and prints a
/// compliance report with prioritized actions.
#[derive(Parser, Debug)]
#[command(name = "ai-compliance")]
#[command(version)]
#[command(about = "Heuristic AI-compliance analyzer for websites", long_about = None)]
struct Cli {
    /// Website to analyze; https:// is assumed when no scheme is given
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of pages to analyze (overrides the config file)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pages: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Save the report as a timestamped JSON file
    #[arg(long)]
    save: bool,

    /// Directory for saved JSON reports (overrides the config file)
    #[arg(long, value_name = "DIR", requires = "save")]
    output_dir: Option<PathBuf>,

    /// Also write a markdown rendering of the report
    #[arg(long, value_name = "FILE")]
    markdown: Option<PathBuf>,

    /// Validate config and target and show what would be crawled without crawling
    #[arg(long, conflicts_with_all = ["save", "markdown"])]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(pages) = cli.pages {
        config.crawler.max_pages = pages as usize;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.report_dir = dir.display().to_string();
    }
    validate(&config).context("Invalid configuration")?;

    if cli.dry_run {
        return handle_dry_run(&config, &cli.url);
    }

    handle_analysis(config, &cli).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ai_compliance=info,warn"),
            1 => EnvFilter::new("ai_compliance=debug,info"),
            2 => EnvFilter::new("ai_compliance=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates the target and shows the crawl plan
fn handle_dry_run(config: &Config, target: &str) -> anyhow::Result<()> {
    let start_url =
        normalize_target(target).with_context(|| format!("Invalid target URL: {}", target))?;

    println!("=== AI Compliance Dry Run ===\n");

    println!("Target: {}", start_url);

    println!("\nCrawler Configuration:");
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Request timeout: {}s", config.crawler.request_timeout);
    println!("  Politeness delay: {}ms", config.crawler.politeness_delay);
    println!("  Links followed per page: {}", config.crawler.max_links_per_page);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Report directory: {}", config.output.report_dir);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would analyze up to {} pages on {}",
        config.crawler.max_pages,
        ai_compliance::extract_netloc(&start_url)
    );

    Ok(())
}

/// Handles the main analysis run
async fn handle_analysis(config: Config, cli: &Cli) -> anyhow::Result<()> {
    let report_dir = PathBuf::from(&config.output.report_dir);

    let analyzer = Analyzer::from_config(config).context("Failed to build HTTP client")?;
    let report = match analyzer.analyze(&cli.url).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            return Err(e).with_context(|| format!("Could not analyze {}", cli.url));
        }
    };

    print_report(&report);

    if cli.save {
        let path = save_report(&report, &report_dir)
            .with_context(|| format!("Failed to save report to {}", report_dir.display()))?;
        println!("\n✓ Report saved to: {}", path.display());
    }

    if let Some(path) = &cli.markdown {
        generate_markdown_report(&report, path)
            .with_context(|| format!("Failed to write markdown report to {}", path.display()))?;
        println!("✓ Markdown report written to: {}", path.display());
    }

    Ok(())
}
