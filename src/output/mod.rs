//! Output sinks for trajectory samples
//!
//! The propagation loop hands every retained sample to a `SampleSink`; the
//! sink decides what becomes of it. One capability, two implementations:
//!
//! - **TableSink**: tabular text records, one line per sample
//! - **MapSink**: ground-track pixels composited onto the basemap raster,
//!   serialized as a GIF at finalization
//!
//! The sink is selected once at construction; the loop is identical for
//! both.

mod map;
mod table;

pub use map::MapSink;
pub use table::TableSink;

use anyhow::Result;

use crate::propagation::StateVector;

/// One retained (non-decimated) sample of the trajectory
#[derive(Debug, Clone, Copy)]
pub struct TrajectorySample {
    /// Elapsed time since the start of the run, in seconds
    pub elapsed: f64,

    /// State at that time
    pub state: StateVector,
}

/// Capability consuming retained samples in generation order
///
/// `record` is called once per retained sample; `finalize` exactly once,
/// after the last sample, to emit the run's artifact.
pub trait SampleSink {
    /// Consume one sample
    fn record(&mut self, sample: &TrajectorySample) -> Result<()>;

    /// Emit the final artifact; the sink is gone afterward
    fn finalize(self: Box<Self>) -> Result<()>;
}
