//! Mission driver
//!
//! Orchestrates one run: steps the integrator across the mission duration,
//! hands every retained sample to the sink, and finalizes the sink's
//! artifact exactly once. A run moves through
//! `Initialized → Propagating → Finalized`; `run` consumes the driver, so a
//! finalized run cannot be touched again.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use super::forces::PointMassGravity;
use super::integrator::Integrator;
use super::state::StateVector;
use crate::config::SimulationConfig;
use crate::output::{SampleSink, TrajectorySample};

/// Phase of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Initialized,
    Propagating,
    Finalized,
}

/// Statistics of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Integration steps executed
    pub steps: u64,

    /// Samples handed to the sink
    pub samples: u64,

    /// Elapsed time of the last executed step, in seconds
    pub simulated: f64,

    /// State after the final step
    pub final_state: StateVector,
}

/// Fixed-step orbit propagator
pub struct Propagator {
    config: SimulationConfig,
    integrator: Box<dyn Integrator>,
    gravity: PointMassGravity,
    state: StateVector,
    phase: RunPhase,
}

impl Propagator {
    /// Create a driver at t = 0 from a validated configuration
    pub fn new(config: SimulationConfig, integrator: Box<dyn Integrator>) -> Self {
        let gravity = PointMassGravity::new(config.mu);
        let state = config.initial_state;

        Self {
            config,
            integrator,
            gravity,
            state,
            phase: RunPhase::Initialized,
        }
    }

    /// Current run phase
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Propagate to the mission duration, feeding retained samples to `sink`
    ///
    /// The loop samples first, then steps: the iteration where the elapsed
    /// time is still within the duration is the last one executed, and
    /// elapsed time accumulates by repeated addition of dt.
    pub fn run(mut self, mut sink: Box<dyn SampleSink>, show_progress: bool) -> Result<RunSummary> {
        let dt = self.config.dt;
        let decimation = self.config.decimation;

        log::info!(
            "propagating with {} for {:.0} s at dt = {} s, every {}th step retained",
            self.integrator.name(),
            self.config.duration,
            dt,
            decimation
        );

        let expected_steps = (self.config.duration / dt).floor() as u64 + 1;
        let progress = if show_progress {
            let bar = ProgressBar::new(expected_steps);
            bar.set_style(
                ProgressStyle::with_template(
                    "{elapsed_precise} {bar:40.cyan/blue} {pos}/{len} {percent}% ETA {eta_precise}",
                )
                .unwrap()
                .progress_chars("##-"),
            );
            Some(bar)
        } else {
            None
        };

        self.phase = RunPhase::Propagating;
        log::debug!("run phase: {:?}", self.phase);

        let mut elapsed = 0.0;
        let mut counter: u64 = 0;
        let mut samples: u64 = 0;

        while elapsed <= self.config.duration {
            if counter % decimation == 0 {
                sink.record(&TrajectorySample {
                    elapsed,
                    state: self.state,
                })?;
                samples += 1;
            }
            counter += 1;

            self.state = self.integrator.step(&self.state, dt, &self.gravity);
            elapsed += dt;

            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = &progress {
            bar.finish_and_clear();
        }

        self.phase = RunPhase::Finalized;
        log::debug!("run phase: {:?}", self.phase);
        sink.finalize()?;

        Ok(RunSummary {
            steps: counter,
            samples,
            simulated: elapsed - dt,
            final_state: self.state,
        })
    }
}
