//! Tabular text recorder

use std::io::Write;

use anyhow::Result;

use super::{SampleSink, TrajectorySample};
use crate::geodesy::GeodeticProjector;

/// Writes one whitespace-separated record per retained sample
///
/// Columns: elapsed time, velocity components, position components, orbital
/// radius, and (when a projector is supplied) longitude and latitude. The
/// header names every column. Records are appended in generation order.
pub struct TableSink<W: Write> {
    writer: W,
    projector: Option<GeodeticProjector>,
}

impl<W: Write> TableSink<W> {
    /// Create the sink and emit the header line
    pub fn new(mut writer: W, projector: Option<GeodeticProjector>) -> Result<Self> {
        write!(writer, "# t\tVx\tVy\tVz\tx\ty\tz\tr")?;
        if projector.is_some() {
            write!(writer, "\tlong\tlat")?;
        }
        writeln!(writer)?;

        Ok(Self { writer, projector })
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SampleSink for TableSink<W> {
    fn record(&mut self, sample: &TrajectorySample) -> Result<()> {
        let state = &sample.state;
        write!(
            self.writer,
            "{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            sample.elapsed,
            state.velocity.x,
            state.velocity.y,
            state.velocity.z,
            state.position.x,
            state.position.y,
            state.position.z,
            state.radius(),
        )?;

        if let Some(projector) = &self.projector {
            let sub = projector.project(&state.position, sample.elapsed);
            write!(self.writer, "\t{:.6}\t{:.6}", sub.longitude, sub.latitude)?;
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
