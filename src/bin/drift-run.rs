//! CLI tool to run forecast stages against CSV files.
//!
//! Usage:
//!   drift-run thin <export.csv> [-o grid.csv] [--resolution 10]
//!   drift-run predict <grid.csv> <origins.csv> [-o paths.csv]
//!   drift-run overlay <paths.csv> [-o markers.json]
//!
//! If no output file is specified, writes to stdout. Processing counts
//! go to stderr.

use clap::{Parser, Subcommand};
use driftcast::{DriftError, ForecastParams, Viewport};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "drift-run", version, about = "Run drift-forecast pipeline stages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Thin a dense wind export into an evenly spaced grid
    Thin {
        /// Raw wind export CSV (time, depth, lat, lon, u, v)
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Grid spacing in degrees
        #[arg(long, default_value_t = driftcast::DEFAULT_RESOLUTION)]
        resolution: f64,
    },
    /// Forecast drift paths for debris origins
    Predict {
        /// Thinned wind grid CSV (lat,lon,x_wind,y_wind)
        wind: PathBuf,
        /// Debris origins CSV (id,count,lat,lon)
        origins: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seconds simulated per step
        #[arg(long, default_value_t = 300.0)]
        interval: f64,
        /// Number of steps
        #[arg(long, default_value_t = 100)]
        steps: usize,
    },
    /// Project forecast paths into screen-space markers
    Overlay {
        /// Forecast paths CSV (id,count,start_lat,start_lon,end_lat,end_lon)
        paths: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1920)]
        width: u32,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 980)]
        height: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("drift-run: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), DriftError> {
    match command {
        Command::Thin {
            input,
            output,
            resolution,
        } => {
            let text = fs::read_to_string(&input)?;
            let (grid, rows_in, rows_kept) = driftcast::thin_wind_csv(&text, resolution)?;
            write_output(output.as_deref(), &grid)?;
            eprintln!("Thinned {rows_in} -> {rows_kept} samples");
        }
        Command::Predict {
            wind,
            origins,
            output,
            interval,
            steps,
        } => {
            let wind_text = fs::read_to_string(&wind)?;
            let origins_text = fs::read_to_string(&origins)?;
            let params = ForecastParams {
                step_secs: interval,
                steps,
            };
            let paths = driftcast::run_forecast(&wind_text, &origins_text, params)?;
            write_output(output.as_deref(), &driftcast::paths_to_csv(&paths))?;
            eprintln!("Forecast {} drifters over {} steps", paths.len(), steps);
        }
        Command::Overlay {
            paths,
            output,
            width,
            height,
        } => {
            let text = fs::read_to_string(&paths)?;
            let markers = driftcast::markers_from_paths_csv(&text, Viewport::new(width, height))?;
            write_output(output.as_deref(), &driftcast::markers_to_json(&markers)?)?;
            eprintln!("Projected {} markers", markers.len());
        }
    }
    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), DriftError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        None => {
            io::stdout().write_all(content.as_bytes())?;
            if !content.is_empty() && !content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
