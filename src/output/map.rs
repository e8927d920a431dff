//! Ground-track raster sink

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{SampleSink, TrajectorySample};
use crate::basemap::GlobeRaster;
use crate::geodesy::GeodeticProjector;

/// Plots each retained sample onto the basemap and encodes the composited
/// raster as a GIF once, at finalization
pub struct MapSink {
    raster: GlobeRaster,
    projector: GeodeticProjector,
    output: Option<PathBuf>,
    plotted: u64,
}

impl MapSink {
    /// Create a sink writing to `output`, or to stdout when `None`
    pub fn new(raster: GlobeRaster, projector: GeodeticProjector, output: Option<PathBuf>) -> Self {
        Self {
            raster,
            projector,
            output,
            plotted: 0,
        }
    }

    /// Number of track samples plotted so far
    pub fn plotted(&self) -> u64 {
        self.plotted
    }

    /// The raster being composited
    pub fn raster(&self) -> &GlobeRaster {
        &self.raster
    }
}

impl SampleSink for MapSink {
    fn record(&mut self, sample: &TrajectorySample) -> Result<()> {
        let sub = self.projector.project(&sample.state.position, sample.elapsed);
        self.raster.plot_track(&sub);
        self.plotted += 1;
        Ok(())
    }

    fn finalize(self: Box<Self>) -> Result<()> {
        log::info!("plotted {} ground-track samples", self.plotted);

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create output file {:?}", path))?;
                self.raster.encode_gif(BufWriter::new(file))?;
                log::info!("wrote ground-track map to {:?}", path);
            }
            None => {
                let stdout = io::stdout();
                self.raster.encode_gif(stdout.lock())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basemap::{Palette, TRACK_INDEX};
    use crate::propagation::StateVector;
    use nalgebra::Vector3;

    #[test]
    fn test_record_plots_pixel() {
        let raster = GlobeRaster::new(360, 180, Palette::default());
        let mut sink = MapSink::new(raster, GeodeticProjector::inertial(), None);

        // Position over longitude 90, latitude 0
        let sample = TrajectorySample {
            elapsed: 0.0,
            state: StateVector::new(
                Vector3::new(0.0, 8.0e6, 0.0),
                Vector3::new(0.0, 0.0, 0.0),
            ),
        };
        sink.record(&sample).unwrap();

        assert_eq!(sink.plotted(), 1);
        let (x, y) = sink.raster().to_pixel(90.0, 0.0);
        assert_eq!(sink.raster().index_at(x, y), TRACK_INDEX);
    }
}
