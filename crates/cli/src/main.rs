mod echo;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lexometer_core::{
    AnalyzeConfig, ExtractConfig, Lexicon, LexiconLoader, OutputFormat, ScrapeConfig, analyze_directory,
    extract_to_file, fetch_file, read_records, scrape_records, write_records,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract articles from web pages and score their readability and sentiment
#[derive(Parser, Debug)]
#[command(name = "lexometer")]
#[command(author = "Lexometer Contributors")]
#[command(version)]
#[command(about = "Extract articles and compute readability and sentiment metrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every URL in a record table and save article text as <URL_ID>.txt
    Fetch(FetchArgs),

    /// Extract an article from a local HTML file
    Extract {
        /// HTML file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Identifier used as the output file stem
        #[arg(long, value_name = "ID")]
        id: String,

        /// Directory receiving the text file
        #[arg(short, long, default_value = ".", value_name = "DIR")]
        dir: PathBuf,

        #[command(flatten)]
        selectors: SelectorArgs,
    },

    /// Compute metrics for every matching text file in a directory
    Analyze {
        /// Directory holding the text files
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        opts: AnalyzeArgs,
    },

    /// Fetch, then analyze the fetched files
    Run {
        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        analyze: AnalyzeArgs,
    },
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// Record table (.xlsx or .csv) with URL and URL_ID columns
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory receiving <URL_ID>.txt files
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    #[command(flatten)]
    selectors: SelectorArgs,
}

#[derive(Args, Debug)]
struct SelectorArgs {
    /// CSS selector for the article title
    #[arg(long, default_value = "h1", value_name = "SEL")]
    title_selector: String,

    /// CSS selector for the article body container
    #[arg(long, default_value = "div.td-post-content", value_name = "SEL")]
    body_selector: String,
}

impl SelectorArgs {
    fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            title_selector: self.title_selector.clone(),
            body_selector: self.body_selector.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Only files whose names start with this prefix are analyzed
    #[arg(long, default_value = "bctech", value_name = "PREFIX")]
    prefix: String,

    /// Output table
    #[arg(short, long, default_value = "final_output.csv", value_name = "FILE")]
    output: PathBuf,

    /// Output format (csv, json)
    #[arg(short, long, default_value = "csv", value_name = "FORMAT")]
    format: OutputFormat,

    /// Directory with stopwords.txt, positive-words.txt, negative-words.txt
    #[arg(long, value_name = "DIR")]
    lexicon_dir: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,lexometer={level},lexometer_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    if cli.verbose {
        echo::print_banner();
    }

    match cli.command {
        Command::Fetch(args) => run_fetch(&args, cli.verbose, (1, 1)).await,
        Command::Extract { file, id, dir, selectors } => run_extract(&file, &id, &dir, &selectors),
        Command::Analyze { dir, opts } => run_analyze(&dir, &opts, cli.verbose, (1, 1)),
        Command::Run { fetch, analyze } => {
            run_fetch(&fetch, cli.verbose, (1, 2)).await?;
            run_analyze(&fetch.dir, &analyze, cli.verbose, (2, 2))
        }
    }
}

async fn run_fetch(args: &FetchArgs, verbose: bool, (step, total): (usize, usize)) -> anyhow::Result<()> {
    if verbose {
        echo::print_step(
            step,
            total,
            &format!("Fetching articles listed in {}", args.input.display().bright_white()),
        );
    }

    let records =
        read_records(&args.input).with_context(|| format!("Failed to read records from {}", args.input.display()))?;
    fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed to create output directory {}", args.dir.display()))?;

    if verbose {
        echo::print_detail("Records", records.len());
        echo::print_detail("Output", args.dir.display());
    }

    let mut builder = ScrapeConfig::builder()
        .output_dir(&args.dir)
        .timeout(args.timeout)
        .title_selector(&args.selectors.title_selector)
        .body_selector(&args.selectors.body_selector);
    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let config = builder.build();

    let started = Instant::now();
    let report = scrape_records(&records, &config).await;

    if verbose {
        echo::print_timing("Fetch", started.elapsed());
    }
    echo::print_scrape_summary(&report);

    Ok(())
}

fn run_extract(file: &Path, id: &str, dir: &Path, selectors: &SelectorArgs) -> anyhow::Result<()> {
    let html = fetch_file(file).with_context(|| format!("Failed to read file: {}", file.display()))?;
    fs::create_dir_all(dir).with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = extract_to_file(&html, id, dir, &selectors.extract_config())
        .with_context(|| format!("Failed to extract article from {}", file.display()))?;

    echo::print_success(&format!("Article saved to {}", path.display().bright_white()));
    Ok(())
}

fn load_lexicon(dir: Option<&Path>) -> anyhow::Result<Lexicon> {
    let mut loader = LexiconLoader::default();
    if let Some(dir) = dir {
        anyhow::ensure!(dir.is_dir(), "Lexicon directory not found: {}", dir.display());
        loader = loader.with_custom_dir(dir);
    }
    loader.load().context("Failed to load lexicon")
}

fn run_analyze(dir: &Path, args: &AnalyzeArgs, verbose: bool, (step, total): (usize, usize)) -> anyhow::Result<()> {
    if verbose {
        echo::print_step(step, total, &format!("Analyzing files in {}", dir.display().bright_white()));
    }

    let lexicon = load_lexicon(args.lexicon_dir.as_deref())?;
    if verbose {
        echo::print_detail("Stopwords", lexicon.stopwords.len());
        echo::print_detail(
            "Opinion words",
            format!("{} positive, {} negative", lexicon.positive.len(), lexicon.negative.len()),
        );
    }

    let config = AnalyzeConfig::builder().prefix(&args.prefix).build();

    let started = Instant::now();
    let report =
        analyze_directory(dir, &config, &lexicon).with_context(|| format!("Failed to analyze {}", dir.display()))?;
    if verbose {
        echo::print_timing("Analysis", started.elapsed());
    }
    echo::print_analysis_summary(&report);

    if report.records.is_empty() {
        echo::print_warning(&format!("No files matching {}*.txt were analyzed", args.prefix));
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to write to file: {}", args.output.display()))?;
    write_records(&report.records, args.format, BufWriter::new(file))
        .with_context(|| format!("Failed to write to file: {}", args.output.display()))?;

    echo::print_success(&format!(
        "Analysis of {} file(s) saved to {}",
        report.records.len(),
        args.output.display().bright_white()
    ));

    Ok(())
}
