//! CLI entrypoint for mmlu-bench
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use mmlu_bench_application::{
    NoProgress, ProgressNotifier, QuestionSource, RunBenchmarkInput, RunBenchmarkUseCase,
};
use mmlu_bench_infrastructure::{
    ConfigLoader, FileConfig, JsonQuestionSource, OllamaGateway, Severity,
};
use mmlu_bench_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting mmlu-bench");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if config.has_errors() {
        bail!("Invalid configuration");
    }

    ConsoleFormatter::set_color(config.output.color);

    // === Question set ===
    let source = JsonQuestionSource::new(&config.benchmark.questions);
    let records = match source.load() {
        Ok(records) => records,
        Err(e) => {
            error!("{}", e);
            bail!("Could not load questions: {}", e);
        }
    };

    // === Dependency Injection ===
    let gateway = Arc::new(OllamaGateway::new(config.endpoint.to_ollama_config())?);
    let use_case = RunBenchmarkUseCase::new(gateway);
    let params = config.benchmark.to_bench_params();
    let debug = params.debug;
    let input = RunBenchmarkInput::new(records, params);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || !config.output.progress {
        Box::new(NoProgress)
    } else if debug {
        Box::new(SimpleProgress::new())
    } else {
        Box::new(ProgressReporter::new())
    };

    let output = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    println!("{}", ConsoleFormatter::format(&output)?);

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    let endpoint = &mut config.endpoint;
    if let Some(host) = &cli.host {
        endpoint.host = host.clone();
    }
    if let Some(user) = &cli.user {
        endpoint.user = Some(user.clone());
    }
    if let Some(password) = &cli.password {
        endpoint.password = Some(password.clone());
    }
    if let Some(model) = &cli.model {
        endpoint.model = model.clone();
    }
    if let Some(accept) = cli.accept_invalid_certs() {
        endpoint.accept_invalid_certs = accept;
    }
    if let Some(timeout) = cli.timeout {
        endpoint.timeout_secs = timeout;
    }

    let benchmark = &mut config.benchmark;
    if let Some(path) = &cli.questions {
        benchmark.questions = path.clone();
    }
    if let Some(max) = cli.max_prompts {
        benchmark.max_prompts = max;
    }
    if let Some(runs) = cli.runs {
        benchmark.runs = runs;
    }
    if cli.debug {
        benchmark.debug = true;
    }
    if let Some(max) = cli.max_attempts {
        benchmark.max_attempts = max;
    }

    if cli.no_color {
        config.output.color = false;
    }
}
