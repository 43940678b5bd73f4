use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use wirebend::{
    init_logging, timestamp_millis, Config, ConversionFailure, ConversionPipeline,
    ConversionResult, SequenceDocument, SvgInterpreter,
};

/// Convert drawings into wire-bending sequences
#[derive(Parser, Debug)]
#[command(
    name = "wirebend",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about
)]
struct Cli {
    /// Settings file (.toml or .json); defaults to the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an SVG or DXF file into an action sequence
    Convert(ConvertArgs),
    /// Convert an SVG file into DXF
    ToDxf {
        svg: PathBuf,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ConvertArgs {
    file: PathBuf,

    /// Do not trace the closing edge of closed polylines
    #[arg(long)]
    no_close_polygons: bool,

    /// Start from the first vertex instead of the longest segment
    #[arg(long)]
    no_longest_start: bool,

    /// Accept bends beyond the rotation limit
    #[arg(long)]
    ignore_angle_checks: bool,

    /// Trace the SVG directly, without the DXF round trip
    #[arg(long)]
    direct: bool,

    /// Output directory for the sequence document
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the sequence document instead of writing it
    #[arg(long)]
    print: bool,
}

#[derive(Serialize)]
struct FailureReport<'a> {
    success: bool,
    #[serde(flatten)]
    failure: &'a ConversionFailure,
}

fn convert(config: &Config, args: &ConvertArgs) -> anyhow::Result<ExitCode> {
    let mut options = config.conversion_options();
    if args.no_close_polygons {
        options.close_polygons = false;
    }
    if args.no_longest_start {
        options.start_at_longest_segment = false;
    }
    if args.ignore_angle_checks {
        options.ignore_angle_checks = true;
    }

    let interpreter = SvgInterpreter::with_flattener(config.curves.flattener());
    let pipeline = ConversionPipeline::new(interpreter, options);
    let result = if args.direct {
        pipeline.trace_file(&args.file)?
    } else {
        pipeline.convert_file(&args.file)?
    };

    match result {
        ConversionResult::Success(actions) => {
            let document = SequenceDocument::new(args.file.display().to_string(), actions);
            if args.print {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                let dir = args.output.as_deref().unwrap_or(&config.output.directory);
                let path = document.write_to(dir, timestamp_millis())?;
                println!("{}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        ConversionResult::Failure(failure) => {
            error!("{}", failure.reason);
            let report = FailureReport {
                success: false,
                failure: &failure,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn to_dxf(config: &Config, svg: &Path, output: Option<&Path>) -> anyhow::Result<ExitCode> {
    let content =
        std::fs::read_to_string(svg).with_context(|| format!("Failed to read {}", svg.display()))?;
    let interpreter = SvgInterpreter::with_flattener(config.curves.flattener());
    let dxf = ConversionPipeline::new(interpreter, config.conversion_options()).svg_to_dxf(&content)?;

    match output {
        Some(path) => {
            std::fs::write(path, dxf)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{dxf}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging()?;

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load settings")?;

    match &cli.command {
        Command::Convert(args) => convert(&config, args),
        Command::ToDxf { svg, output } => to_dxf(&config, svg, output.as_deref()),
    }
}
