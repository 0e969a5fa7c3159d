use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use canvas_render::{
    load_config, parse_request, render_batch, CanvasCreateRequest, CanvasResponse,
    ErrorResponse, OutputFormat, RenderConfig, Result,
};

/// Render rectangle requests as ASCII art
#[derive(Debug, Parser)]
#[command(name = "canvas-render", version, about)]
struct Cli {
    /// JSON request files; stdin is read when none are given
    files: Vec<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at info level
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

/// One decoded request and where it came from
struct Input {
    label: String,
    request: Result<CanvasCreateRequest>,
}

/// Rendered drawing, or the first failure, for one input
struct Outcome {
    label: String,
    drawing: Result<String>,
}

fn init_logging(cli: &Cli, config: &RenderConfig) {
    let level = if cli.debug {
        Some(tracing::Level::DEBUG)
    } else if cli.verbose {
        Some(tracing::Level::INFO)
    } else {
        None
    };

    let filter = match (level, config.log_level.as_deref()) {
        (Some(level), _) => EnvFilter::from_default_env().add_directive(level.into()),
        (None, Some(directive)) => EnvFilter::try_new(directive)
            .unwrap_or_else(|_| EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())),
        (None, None) => EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
    };

    // Logs go to stderr; stdout carries drawings only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn read_stdin() -> Result<CanvasCreateRequest> {
    let mut body = String::new();
    tokio::io::stdin().read_to_string(&mut body).await?;
    parse_request(&body)
}

async fn read_file(path: &Path) -> Result<CanvasCreateRequest> {
    let body = tokio::fs::read_to_string(path).await?;
    parse_request(&body)
}

/// Read and decode every input. Failures stay with their input.
async fn read_inputs(files: &[PathBuf]) -> Vec<Input> {
    if files.is_empty() {
        return vec![Input {
            label: "<stdin>".to_string(),
            request: read_stdin().await,
        }];
    }

    let mut inputs = Vec::with_capacity(files.len());
    for path in files {
        inputs.push(Input {
            label: path.display().to_string(),
            request: read_file(path).await,
        });
    }
    inputs
}

/// Render every decoded input, keeping input order
fn render_inputs(inputs: Vec<Input>) -> Vec<Outcome> {
    // Failed inputs take an empty slot so the batch lines up with `inputs`
    let batch: Vec<CanvasCreateRequest> = inputs
        .iter()
        .map(|input| input.request.as_ref().map_or_else(|_| Vec::new(), Clone::clone))
        .collect();

    inputs
        .into_iter()
        .zip(render_batch(&batch))
        .map(|(input, drawing)| Outcome {
            label: input.label,
            drawing: input.request.and(drawing),
        })
        .collect()
}

fn write_outcomes(outcomes: &[Outcome], format: OutputFormat) -> anyhow::Result<usize> {
    let mut out = io::stdout().lock();
    let mut failures = 0;

    for outcome in outcomes {
        match (&outcome.drawing, format) {
            (Ok(drawing), OutputFormat::Text) => writeln!(out, "{drawing}")?,
            (Ok(drawing), OutputFormat::Json) => {
                serde_json::to_writer(&mut out, &CanvasResponse::new(drawing))?;
                writeln!(out)?;
            }
            (Err(err), format) => {
                failures += 1;
                tracing::error!(input = %outcome.label, error = %err, "Failed to render canvas");
                if format == OutputFormat::Json {
                    serde_json::to_writer(&mut out, &ErrorResponse::from(err))?;
                    writeln!(out)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(failures)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&cli, &config);

    let format = cli.format.unwrap_or(config.format);
    tracing::info!("Starting canvas-render version {}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?format, files = cli.files.len(), "Resolved options");

    let outcomes = render_inputs(read_inputs(&cli.files).await);
    let failures = write_outcomes(&outcomes, format)?;

    if failures > 0 {
        bail!("{failures} of {} canvas requests failed", outcomes.len());
    }

    tracing::info!(rendered = outcomes.len(), "Done");
    Ok(())
}
