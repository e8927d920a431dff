//! Ground-track CLI
//!
//! Builds the run configuration from the command line, assembles the output
//! sink, and drives one propagation to completion. A missing or unreadable
//! shapefile aborts with a diagnostic before any simulation work starts.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use groundtrack::basemap::{load_coastlines, GlobeRaster, Palette};
use groundtrack::config::{
    IntegratorKind, OrbitPreset, OutputMode, RasterConfig, ReferenceFrame, SimulationConfig,
};
use groundtrack::output::{MapSink, SampleSink, TableSink};
use groundtrack::propagation::{Propagator, MU_EARTH};

/// Propagate a low-Earth orbit and tabulate or map its ground track
#[derive(Parser, Debug)]
#[command(name = "groundtrack", version, about)]
struct Cli {
    /// Coastline shapefile (required for map output)
    shapefile: Option<PathBuf>,

    /// What the run emits
    #[arg(long, value_enum, default_value_t = OutputMode::Map)]
    mode: OutputMode,

    /// Ground-track reference frame
    #[arg(long, value_enum, default_value_t = ReferenceFrame::Rotating)]
    frame: ReferenceFrame,

    /// Initial orbit preset
    #[arg(long, value_enum, default_value_t = OrbitPreset::Circular)]
    preset: OrbitPreset,

    /// Integration scheme
    #[arg(long, value_enum, default_value_t = IntegratorKind::SemiImplicitEuler)]
    integrator: IntegratorKind,

    /// Gravitational parameter G·M in m³/s²
    #[arg(long, default_value_t = MU_EARTH)]
    mu: f64,

    /// Initial altitude in meters (default: the preset's altitude)
    #[arg(long)]
    altitude: Option<f64>,

    /// Orbit inclination in degrees
    #[arg(long, default_value_t = 66.5)]
    inclination: f64,

    /// Integration timestep in seconds
    #[arg(long, default_value_t = 0.25)]
    dt: f64,

    /// Mission duration in seconds
    #[arg(long, default_value_t = 86_400.0)]
    duration: f64,

    /// Retain every k-th integration step
    #[arg(long = "every", default_value_t = 4)]
    decimation: u64,

    /// Map width in pixels
    #[arg(long, default_value_t = 3600)]
    width: u32,

    /// Map height in pixels
    #[arg(long, default_value_t = 1800)]
    height: u32,

    /// Output file (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Include longitude/latitude columns in table output
    #[arg(long)]
    geodetic: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let altitude = cli.altitude.unwrap_or_else(|| cli.preset.altitude_m());
    let config = SimulationConfig {
        mu: cli.mu,
        initial_state: cli.preset.initial_state(cli.mu, altitude, cli.inclination),
        dt: cli.dt,
        duration: cli.duration,
        decimation: cli.decimation,
    };
    config.validate()?;

    log::info!(
        "{} preset: altitude {:.3} m, inclination {:.1} deg, {} frame",
        cli.preset,
        altitude,
        cli.inclination,
        cli.frame
    );

    let projector = cli.frame.projector();
    let sink: Box<dyn SampleSink> = match cli.mode {
        OutputMode::Table => {
            let projector = cli.geodetic.then_some(projector);
            match &cli.output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("failed to create output file {:?}", path))?;
                    Box::new(TableSink::new(BufWriter::new(file), projector)?)
                }
                None => Box::new(TableSink::new(io::stdout().lock(), projector)?),
            }
        }
        OutputMode::Map => {
            let raster_config = RasterConfig {
                width: cli.width,
                height: cli.height,
            };
            raster_config.validate()?;

            let path = cli
                .shapefile
                .as_ref()
                .context("a coastline shapefile path is required for map output")?;
            let coastlines = load_coastlines(path)?;
            let raster = GlobeRaster::from_coastlines(
                raster_config.width,
                raster_config.height,
                Palette::default(),
                &coastlines,
            );
            Box::new(MapSink::new(raster, projector, cli.output.clone()))
        }
    };

    let show_progress = cli.mode == OutputMode::Map;
    let summary = Propagator::new(config, cli.integrator.create()).run(sink, show_progress)?;

    log::info!(
        "completed: {} steps, {} samples over {:.2} s simulated",
        summary.steps,
        summary.samples,
        summary.simulated
    );

    Ok(())
}
