// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Selective Stretch CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use selective_stretch::cli::Reporter;
use selective_stretch::geometry::{Axis, BoundingBox};
use selective_stretch::io::{self, StlEncoding};
use selective_stretch::stretch::{AxisStretcher, StretchRequest, TargetRange};
use selective_stretch::{StretchConfig, StretchError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// File name used when no output path is given
const DEFAULT_OUTPUT_NAME: &str = "stretched.stl";

#[derive(Parser)]
#[command(name = "selective-stretch")]
#[command(about = "Stretch STL models to a new size while keeping their ends fixed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show detected dimensions and the allowed target sizes
    Inspect {
        /// Input STL file
        input: String,

        /// Margin configuration (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,

        #[command(flatten)]
        margins: MarginArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Stretch an STL file to new X/Y/Z sizes
    Stretch {
        /// Input STL file
        input: String,

        /// Output file (defaults to stretched.stl next to the input)
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Target X size in mm (defaults to the detected size)
        #[arg(long, value_name = "MM")]
        x: Option<f64>,

        /// Target Y size in mm (defaults to the detected size)
        #[arg(long, value_name = "MM")]
        y: Option<f64>,

        /// Target Z size in mm (defaults to the detected size)
        #[arg(long, value_name = "MM")]
        z: Option<f64>,

        /// Margin configuration (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,

        #[command(flatten)]
        margins: MarginArgs,

        /// Write ASCII STL regardless of the input encoding
        #[arg(long, conflicts_with = "binary")]
        ascii: bool,

        /// Write binary STL regardless of the input encoding
        #[arg(long)]
        binary: bool,

        /// Print the stretch report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print or save the effective margin configuration
    Config {
        /// Write the configuration to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        #[command(flatten)]
        margins: MarginArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct MarginArgs {
    /// Override the X margin in mm
    #[arg(long, value_name = "MM")]
    margin_x: Option<f64>,

    /// Override the Y margin in mm
    #[arg(long, value_name = "MM")]
    margin_y: Option<f64>,

    /// Override the Z margin in mm
    #[arg(long, value_name = "MM")]
    margin_z: Option<f64>,
}

impl MarginArgs {
    fn apply(&self, config: &mut StretchConfig) {
        let overrides = [
            (Axis::X, self.margin_x),
            (Axis::Y, self.margin_y),
            (Axis::Z, self.margin_z),
        ];
        for (axis, margin) in overrides {
            if let Some(margin) = margin {
                config.set_margin(axis, margin);
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Inspect {
            input,
            config,
            margins,
            json,
        } => {
            let config = resolve_config(config.as_deref(), margins)?;
            inspect_command(input, &config, *json)?;
        }
        Commands::Stretch {
            input,
            output,
            x,
            y,
            z,
            config,
            margins,
            ascii,
            binary,
            json,
        } => {
            let config = resolve_config(config.as_deref(), margins)?;
            let encoding = match (*ascii, *binary) {
                (true, _) => Some(StlEncoding::Ascii),
                (_, true) => Some(StlEncoding::Binary),
                _ => None,
            };
            let output = output
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| default_output_path(input));
            if is_same_file(Path::new(input), &output) {
                Reporter::report_error(&format!(
                    "Output would overwrite the input file: {}",
                    output.display()
                ));
                std::process::exit(1);
            }
            stretch_command(input, &output, [*x, *y, *z], &config, encoding, *json, cli.verbose)?;
        }
        Commands::Config { output, margins } => {
            let config = resolve_config(None, margins)?;
            config_command(&config, output.as_deref())?;
        }
        Commands::Version => {
            println!("Selective Stretch v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit file, else `stretch.toml`/defaults plus environment, then flags
fn resolve_config(path: Option<&str>, margins: &MarginArgs) -> Result<StretchConfig> {
    let mut config = match path {
        Some(path) => StretchConfig::from_file(path)?,
        None => StretchConfig::load()?,
    };
    margins.apply(&mut config);
    config.validate().context("Invalid margin configuration")?;
    Ok(config)
}

/// `stretched.stl` next to the input, or `<stem>-stretched.stl` when the
/// input already has that name
fn default_output_path(input: &str) -> PathBuf {
    let input = Path::new(input);
    let dir = input.parent().unwrap_or_else(|| Path::new(""));

    if input.file_name() == Some(OsStr::new(DEFAULT_OUTPUT_NAME)) {
        let stem = input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("output");
        return dir.join(format!("{}-{}", stem, DEFAULT_OUTPUT_NAME));
    }
    dir.join(DEFAULT_OUTPUT_NAME)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn load_input(input: &str) -> Result<io::LoadedMesh> {
    if !Path::new(input).exists() {
        Reporter::report_error(&format!("Input file not found: {}", input));
        std::process::exit(1);
    }

    io::import_stl_file(input).with_context(|| format!("Failed to load STL file: {}", input))
}

fn inspect_command(input: &str, config: &StretchConfig, json: bool) -> Result<()> {
    let loaded = load_input(input)?;
    let bbox = loaded.mesh.bounding_box()?;

    if json {
        let axes: Vec<_> = Axis::ALL
            .iter()
            .map(|&axis| {
                serde_json::json!({
                    "axis": axis,
                    "detected": bbox.axis_size(axis),
                    "range": TargetRange::for_axis(&bbox, axis, config.max_scale),
                    "config": config.axis(axis),
                })
            })
            .collect();
        let summary = serde_json::json!({
            "file": input,
            "encoding": loaded.encoding,
            "triangle_count": loaded.mesh.triangle_count(),
            "bounding_box": bbox,
            "axes": axes,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        Reporter::report_dimensions(input, &bbox, loaded.mesh.triangle_count(), config);
    }

    Ok(())
}

fn stretch_command(
    input: &str,
    output: &Path,
    targets: [Option<f64>; 3],
    config: &StretchConfig,
    encoding: Option<StlEncoding>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let start = std::time::Instant::now();
    let loaded = load_input(input)?;
    let bbox = loaded.mesh.bounding_box()?;

    if !json {
        Reporter::report_dimensions(input, &bbox, loaded.mesh.triangle_count(), config);
        if targets.iter().all(Option::is_none) {
            Reporter::report_warning("No target sizes given; the output will match the input");
        }
    }

    let request = build_request(&bbox, targets);
    let stretcher = match AxisStretcher::new(config, &bbox, &request) {
        Ok(stretcher) => stretcher,
        Err(err @ StretchError::Validation { .. }) => {
            Reporter::report_error(&err.to_string());
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if !json {
        warn_degenerate_axes(&stretcher, &bbox, &request);
    }

    let stretched = stretcher.apply(&loaded.mesh);
    let encoding = encoding.unwrap_or(loaded.encoding);
    io::export_stl(&stretched, output, encoding)
        .with_context(|| format!("Failed to write STL file: {}", output.display()))?;

    let report = stretcher.report(stretched.triangle_count());
    let output_name = output.display().to_string();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Reporter::report_stretch(input, &output_name, &report, start.elapsed());
        if verbose {
            Reporter::report_info(&format!("Encoding: {:?}", encoding));
        }
        Reporter::success(&format!("Done! Stretched STL written to {}", output_name));
    }

    Ok(())
}

/// Missing targets keep the detected size on that axis
fn build_request(bbox: &BoundingBox, targets: [Option<f64>; 3]) -> StretchRequest {
    let size = bbox.size();
    StretchRequest::new(
        targets[0].unwrap_or(size.x),
        targets[1].unwrap_or(size.y),
        targets[2].unwrap_or(size.z),
    )
}

fn warn_degenerate_axes(stretcher: &AxisStretcher, bbox: &BoundingBox, request: &StretchRequest) {
    for axis in Axis::ALL {
        let grows = request.target(axis) > bbox.axis_size(axis);
        if grows && stretcher.factor(axis) == 1.0 {
            Reporter::report_warning(&format!(
                "{} margins cover the whole axis; its interior is not scaled",
                axis
            ));
        }
    }
}

fn config_command(config: &StretchConfig, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            config.save(path)?;
            Reporter::success(&format!("Configuration written to {}", path));
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
