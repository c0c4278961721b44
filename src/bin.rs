//! Binary entry point for `pm-knowledge-agent`.
//!
//! This module provides the command-line interface for the agent with options
//! for configuration file paths and logging verbosity. It initializes the
//! necessary components and runs the comparison demo.

use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use pm_knowledge_agent::base::{config::Config, types::Void};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Pm-knowledge-agent - a program management question demo.
///
/// Configuration can come from `config.toml` or environment variables.
/// The agent answers program management questions from a hardcoded
/// knowledge base and from an LLM, and prints both answers side by side.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the agent will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Emit each comparison as pretty-printed JSON instead of colored text.
    #[arg(long)]
    json: bool,
    /// Ask a single question instead of running the full demo (optional).
    question: Option<String>,
}

/// Main entry point for the pm-knowledge-agent binary.
///
/// Sets up logging based on verbosity, loads configuration, and runs the demo.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the otlp layer.

    let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
    let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("pm-knowledge-agent");
    let otel = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?;

    match args.question {
        Some(question) => pm_knowledge_agent::ask(config, &question, args.json).await,
        None => pm_knowledge_agent::start(config, args.json).await,
    }
}
