use mztrace::errors::MzTraceError;
use mztrace::models::config::{FailurePolicy, TraceConfig};
use mztrace::pipeline::{BarProgress, LogProgress, Session};
use mztrace::readers::{AutoScanSource, SpectralFileLister};
use mztrace::sinks::{SummaryTableSink, SvgPlotSink};
use mztrace::{ProgressReporter, RenderSink};

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::subscriber::set_global_default;
use tracing::{info, warn};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Emit bunyan-formatted json logs instead of plain text.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Also write a chrome trace (chrome://tracing) to this path.
    #[arg(long, global = true)]
    chrome_trace: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum PossibleRender {
    #[default]
    Svg,
    Table,
    Both,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Directory with the spectral files. Overrides the one in the config.
    #[arg(short, long)]
    root_path: Option<String>,

    /// The path to the json file with the trace settings.
    #[arg(short, long)]
    config_path: Option<String>,

    /// Where the plots go.
    #[arg(short, long, default_value = "traces")]
    output_dir: String,

    #[arg(long, default_value_t, value_enum)]
    render: PossibleRender,

    /// Trace files on all cores. Output order is unchanged.
    #[arg(long)]
    parallel: bool,

    /// Log failing files and keep going instead of stopping.
    #[arg(long)]
    skip_failed: bool,

    /// Only trace scans of this MS level.
    #[arg(long)]
    ms_level: Option<u8>,

    /// Show a progress bar instead of one log line per file.
    #[arg(long)]
    progress_bar: bool,
}

#[derive(Parser, Debug)]
struct WriteTemplateArgs {
    /// The path to the output files.
    #[arg(short, long)]
    output_path: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Trace the configured features through every file of a directory.
    Trace(TraceArgs),
    WriteTemplate(WriteTemplateArgs),
}

fn init_tracing(json_logs: bool, chrome_trace: Option<&str>) -> Option<FlushGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (chrome_layer, guard) = match chrome_trace {
        Some(path) => {
            let (layer, guard) = ChromeLayerBuilder::new().file(path).build();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let (json_layer, text_layer) = if json_logs {
        let formatting_layer = BunyanFormattingLayer::new("mztrace".into(), std::io::stderr);
        (Some(formatting_layer), None)
    } else {
        let text_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        (None, Some(text_layer))
    };

    let subscriber = Registry::default()
        .with(env_filter)
        .with(chrome_layer)
        .with(JsonStorageLayer)
        .with(json_layer)
        .with(text_layer);

    if let Err(e) = set_global_default(subscriber) {
        eprintln!("Setting default subscriber failed: {}", e);
    }
    guard
}

fn main() -> Result<(), MzTraceError> {
    let args = Args::parse();
    let _guard = init_tracing(args.json_logs, args.chrome_trace.as_deref());

    match args.command {
        Some(Commands::Trace(args)) => main_trace(args),
        Some(Commands::WriteTemplate(args)) => main_write_template(args),
        None => {
            println!("No command provided");
            Ok(())
        }
    }
}

fn main_write_template(args: WriteTemplateArgs) -> Result<(), MzTraceError> {
    let put_path = Path::new(&args.output_path);
    std::fs::create_dir_all(put_path).map_err(|e| {
        MzTraceError::config(format!("Unable to create {}: {}", put_path.display(), e))
    })?;
    let config_json = TraceConfig::default().to_json_pretty()?;
    let config_path = put_path.join("trace_config.json");
    println!("Writing to {}", config_path.display());
    std::fs::write(&config_path, config_json).map_err(|e| {
        MzTraceError::config(format!("Unable to write {}: {}", config_path.display(), e))
    })?;
    println!(
        "use as `mztrace trace --render both --output-dir 'traces' --config-path {:#?}`",
        config_path,
    );
    Ok(())
}

fn main_trace(args: TraceArgs) -> Result<(), MzTraceError> {
    let mut config = match &args.config_path {
        Some(path) => TraceConfig::from_json_path(Path::new(path))?,
        None => TraceConfig::default(),
    };
    if let Some(root_path) = &args.root_path {
        config.root_path = PathBuf::from(root_path);
    }
    if args.ms_level.is_some() {
        config.ms_level = args.ms_level;
    }
    if args.skip_failed {
        config.failure_policy = FailurePolicy::SkipFile;
    }
    let root_path = config.root_path.clone();

    let sink: Box<dyn RenderSink> = match args.render {
        PossibleRender::Svg => Box::new(SvgPlotSink::new(&args.output_dir)),
        PossibleRender::Table => Box::new(SummaryTableSink::stdout()),
        PossibleRender::Both => Box::new((
            SvgPlotSink::new(&args.output_dir),
            SummaryTableSink::stdout(),
        )),
    };
    let progress: Box<dyn ProgressReporter> = if args.progress_bar {
        Box::new(BarProgress::new())
    } else {
        Box::new(LogProgress)
    };

    let mut session = Session::new(
        config,
        AutoScanSource::default(),
        SpectralFileLister::default(),
        sink,
        progress,
    )?;
    let summary = if args.parallel {
        session.run_parallel(&root_path)?
    } else {
        session.run(&root_path)?
    };

    info!(
        "Traced {} of {} files in {:.2?}",
        summary.files_traced, summary.files_total, summary.elapsed
    );
    for failure in summary.failures.iter() {
        warn!("Failed {}: {}", failure.path.display(), failure.reason);
    }
    summary.into_result()?;
    Ok(())
}
