//! aeo-scorer: AI Engine Optimization content scoring
//!
//! Scores content for answer-engine visibility and renders PDF reports.

#![allow(clippy::too_many_lines, clippy::needless_pass_by_value)]

use aeo_scorer::{
    cli,
    config::{self, AnalyzerMode, AppConfig, OutputConfig},
    model::ContentType,
    pipeline::{exit_codes, InputSource},
    reports::ReportFormat,
    schema::{FaqEntry, SchemaInput, SchemaType},
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aeo-scorer")]
#[command(version)]
#[command(about = "Score content for AI answer engines and render PDF reports", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  A final score fell below --min-score
    3  Error occurred

EXAMPLES:
    # Score a draft with a terminal summary
    aeo-scorer analyze draft.md -t blog

    # Gate a CI job on the final score
    aeo-scorer analyze docs/*.md -o json --min-score 70

    # Render a PDF report for a URL
    aeo-scorer report --url https://example.com/blog/my-post -t blog

    # FAQ markup
    aeo-scorer schema faq-page --name FAQ --faq \"What is AEO?|Optimizing for answer engines.\"")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Input selection shared by `analyze` and `report`
#[derive(clap::Args)]
struct SourceArgs {
    /// Analyze this text directly
    #[arg(long)]
    text: Option<String>,

    /// Analyze a URL (placeholder content; pages are not fetched)
    #[arg(long)]
    url: Option<String>,

    /// Content type: blog, product, service or other
    #[arg(short = 't', long, default_value = "other")]
    content_type: String,
}

/// Analyzer overrides shared by `analyze` and `report`
#[derive(clap::Args)]
struct AnalyzerArgs {
    /// Use the remote analyzer instead of the built-in engine
    #[arg(long)]
    remote: bool,

    /// Remote analyzer endpoint
    #[arg(long, env = "AEO_SCORER_ENDPOINT")]
    endpoint: Option<String>,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Text files to analyze (scored in parallel)
    files: Vec<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,

    /// Output format (auto: summary on a terminal, json otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Include raw text metrics
    #[arg(long)]
    metrics: bool,

    /// Exit with code 1 if any final score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    #[command(flatten)]
    analyzer: AnalyzerArgs,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Text file to analyze
    file: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,

    /// Output PDF path (defaults to the configured report filename)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Omit the analyzed-content page
    #[arg(long)]
    no_content_dump: bool,

    /// Pin the report date (RFC 3339) for reproducible output
    #[arg(long, value_parser = parse_timestamp)]
    generated_at: Option<DateTime<Utc>>,

    #[command(flatten)]
    analyzer: AnalyzerArgs,
}

/// Arguments for the `schema` subcommand
#[derive(Parser)]
struct SchemaArgs {
    /// Schema.org type
    #[arg(value_enum)]
    schema_type: SchemaType,

    /// Name, or headline for articles
    #[arg(long)]
    name: String,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    url: Option<String>,

    #[arg(long)]
    image: Option<String>,

    /// Article author
    #[arg(long)]
    author: Option<String>,

    /// Article publication date
    #[arg(long)]
    date_published: Option<String>,

    /// Publisher (articles) or provider (services)
    #[arg(long, visible_aliases = ["publisher", "provider"])]
    organization: Option<String>,

    #[arg(long)]
    price: Option<String>,

    /// ISO 4217 currency code
    #[arg(long)]
    currency: Option<String>,

    #[arg(long)]
    telephone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    /// FAQ entry as "question|answer" (repeatable)
    #[arg(long = "faq", value_parser = parse_faq)]
    faqs: Vec<FaqEntry>,

    /// Image added to types that need one when --image is missing
    #[arg(long)]
    fallback_image: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score content and print the results
    Analyze(AnalyzeArgs),

    /// Score content and save a PDF report
    Report(ReportArgs),

    /// Generate Schema.org JSON-LD markup
    Schema(SchemaArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (defaults merged with the file)
    Show,
    /// Print config file search paths and the discovered config file
    Path,
    /// Write an example .aeo-scorer.yaml in the current directory
    Init,
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

fn parse_faq(s: &str) -> Result<FaqEntry, String> {
    FaqEntry::parse(s).ok_or_else(|| "expected \"question|answer\"".to_string())
}

/// Apply `--remote` / `--endpoint` on top of the file configuration.
fn apply_analyzer_args(app: &mut AppConfig, args: AnalyzerArgs) {
    if args.endpoint.is_some() {
        app.analyzer.endpoint = args.endpoint;
    }
    if args.remote {
        app.analyzer.mode = AnalyzerMode::Remote;
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let (mut app, loaded_from) = config::load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    // Dispatch to command handlers
    match cli.command {
        Commands::Analyze(args) => {
            apply_analyzer_args(&mut app, args.analyzer);
            cli::ensure_valid(&app)?;

            let options = cli::AnalyzeOptions {
                inputs: InputSource::from_args(args.source.text, args.source.url, &args.files),
                content_type: ContentType::parse(&args.source.content_type),
                output: OutputConfig {
                    format: args.output.unwrap_or(app.output.format),
                    file: args.output_file.or_else(|| app.output.file.clone()),
                    no_color: cli.no_color || app.output.no_color,
                },
                metrics: args.metrics,
                min_score: args.min_score,
                quiet: cli.quiet,
            };
            cli::run_analyze(&app, options)
        }

        Commands::Report(args) => {
            apply_analyzer_args(&mut app, args.analyzer);
            cli::ensure_valid(&app)?;

            let mut inputs = InputSource::from_args(
                args.source.text,
                args.source.url,
                args.file.as_slice(),
            );
            if inputs.len() != 1 {
                anyhow::bail!("report takes exactly one of FILE, --text or --url");
            }
            let options = cli::ReportOptions {
                input: inputs.remove(0),
                content_type: ContentType::parse(&args.source.content_type),
                output_file: args
                    .output_file
                    .unwrap_or_else(|| app.report.filename.clone()),
                title: args.title,
                no_content_dump: args.no_content_dump,
                generated_at: args.generated_at,
                quiet: cli.quiet,
            };
            cli::run_report(&app, options)
        }

        Commands::Schema(args) => {
            let input = SchemaInput {
                schema_type: args.schema_type,
                name: args.name,
                description: args.description,
                url: args.url,
                image: args.image,
                author: args.author,
                date_published: args.date_published,
                organization: args.organization,
                price: args.price,
                currency: args.currency,
                telephone: args.telephone,
                address: args.address,
                faqs: args.faqs,
            };
            cli::run_schema(cli::SchemaOptions {
                input,
                fallback_image: args.fallback_image,
                output_file: args.output_file,
                quiet: cli.quiet,
            })?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "aeo-scorer", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config(action, &app, loaded_from, cli.config)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config(
    action: ConfigAction,
    app: &AppConfig,
    loaded_from: Option<PathBuf>,
    explicit: Option<PathBuf>,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(app).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("aeo-scorer").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order, git root after the current directory):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in [".aeo-scorer.yaml", ".aeo-scorer.yml", "aeo-scorer.yaml"] {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".aeo-scorer.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
        ConfigAction::Schema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
        }
    }
    Ok(())
}
