//! Run configuration
//!
//! The CLI-facing choice enums and the validated simulation settings. Each
//! choice enum maps onto the concrete component it selects, so `main` never
//! matches on variants itself.

use std::fmt;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use nalgebra::Vector3;

use crate::geodesy::GeodeticProjector;
use crate::propagation::{
    ExplicitEuler, Integrator, SemiImplicitEuler, StateVector, EARTH_RADIUS_M,
};

/// What the run emits
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tabular text records
    Table,
    /// Ground-track map raster
    Map,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Map => "map",
        })
    }
}

/// Reference frame of the projected ground track
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrame {
    /// Non-rotating Earth: longitude straight from the inertial position
    Inertial,
    /// Rotating Earth: longitude corrected by the accumulated rotation
    Rotating,
}

impl ReferenceFrame {
    /// Projector implementing this frame
    pub fn projector(&self) -> GeodeticProjector {
        match self {
            Self::Inertial => GeodeticProjector::inertial(),
            Self::Rotating => GeodeticProjector::rotating(),
        }
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inertial => "inertial",
            Self::Rotating => "rotating",
        })
    }
}

/// Integration scheme selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Semi-implicit Euler (reference scheme, energy-stable)
    SemiImplicitEuler,
    /// Naive explicit Euler (drifts; for comparison runs)
    ExplicitEuler,
}

impl IntegratorKind {
    /// Instantiate the selected integrator
    pub fn create(&self) -> Box<dyn Integrator> {
        match self {
            Self::SemiImplicitEuler => Box::new(SemiImplicitEuler),
            Self::ExplicitEuler => Box::new(ExplicitEuler),
        }
    }
}

impl fmt::Display for IntegratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SemiImplicitEuler => "semi-implicit-euler",
            Self::ExplicitEuler => "explicit-euler",
        })
    }
}

/// Orbital speed of the fixed-speed preset, in m/s
pub const FIXED_PRESET_SPEED: f64 = 7_012.6;

/// Named initial-orbit presets
///
/// Two independently tuned configurations, preserved side by side: they use
/// different altitudes and derive the orbital speed differently.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitPreset {
    /// Altitude 1,686,870.745 m, speed computed for a circular orbit
    Circular,
    /// Altitude 1,730,044.745 m, hardcoded speed of 7,012.6 m/s
    FixedSpeed,
}

impl OrbitPreset {
    /// Default altitude above the mean Earth radius, in meters
    pub fn altitude_m(&self) -> f64 {
        match self {
            Self::Circular => 1_686_870.745,
            Self::FixedSpeed => 1_730_044.745,
        }
    }

    /// Build the initial state on the +x axis at the given altitude,
    /// velocity in the y/z plane at the given inclination
    pub fn initial_state(&self, mu: f64, altitude_m: f64, inclination_deg: f64) -> StateVector {
        let r0 = EARTH_RADIUS_M + altitude_m;
        let speed = match self {
            Self::Circular => (mu / r0).sqrt(),
            Self::FixedSpeed => FIXED_PRESET_SPEED,
        };
        let inclination = inclination_deg.to_radians();

        StateVector::new(
            Vector3::new(r0, 0.0, 0.0),
            Vector3::new(0.0, speed * inclination.cos(), speed * inclination.sin()),
        )
    }
}

impl fmt::Display for OrbitPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Circular => "circular",
            Self::FixedSpeed => "fixed-speed",
        })
    }
}

/// Immutable settings of one simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Gravitational parameter G·M in m³/s²
    pub mu: f64,

    /// State at t = 0
    pub initial_state: StateVector,

    /// Fixed integration timestep in seconds
    pub dt: f64,

    /// Mission duration in seconds
    pub duration: f64,

    /// Retain every k-th step
    pub decimation: u64,
}

impl SimulationConfig {
    /// Check the configuration invariants up front
    pub fn validate(&self) -> Result<()> {
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(anyhow!("dt must be a positive number of seconds"));
        }
        if !(self.duration >= 0.0) {
            return Err(anyhow!("duration must be >= 0 seconds"));
        }
        if self.decimation < 1 {
            return Err(anyhow!("decimation factor must be >= 1"));
        }
        if !(self.mu > 0.0) {
            return Err(anyhow!("gravitational parameter must be > 0"));
        }
        Ok(())
    }
}

/// Dimensions of the output raster
#[derive(Debug, Clone, Copy)]
pub struct RasterConfig {
    pub width: u32,
    pub height: u32,
}

impl RasterConfig {
    /// GIF frames are limited to 65535 pixels per side
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > u32::from(u16::MAX) {
                return Err(anyhow!("{} must be between 1 and 65535 pixels", name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::MU_EARTH;

    fn valid_config() -> SimulationConfig {
        SimulationConfig {
            mu: MU_EARTH,
            initial_state: OrbitPreset::Circular.initial_state(MU_EARTH, 1_686_870.745, 66.5),
            dt: 0.25,
            duration: 86_400.0,
            decimation: 4,
        }
    }

    #[test]
    fn test_validate_accepts_reference_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = valid_config();
        config.dt = 0.0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.dt = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.duration = -1.0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.decimation = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_raster_config_bounds() {
        assert!(RasterConfig { width: 3600, height: 1800 }.validate().is_ok());
        assert!(RasterConfig { width: 0, height: 1800 }.validate().is_err());
        assert!(RasterConfig { width: 3600, height: 70_000 }.validate().is_err());
    }

    #[test]
    fn test_circular_preset_matches_circular_speed() {
        let state = OrbitPreset::Circular.initial_state(MU_EARTH, 1_686_870.745, 66.5);
        let r = state.radius();
        let expected = (MU_EARTH / r).sqrt();

        assert!((state.speed() - expected).abs() < 1e-9);
        // Velocity lies in the y/z plane, inclined 66.5° from the equator
        assert_eq!(state.velocity.x, 0.0);
        let inclination = state.velocity.z.atan2(state.velocity.y).to_degrees();
        assert!((inclination - 66.5).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_speed_preset() {
        let state = OrbitPreset::FixedSpeed.initial_state(MU_EARTH, 1_730_044.745, 66.5);
        assert!((state.speed() - FIXED_PRESET_SPEED).abs() < 1e-9);
        assert!((state.radius() - (EARTH_RADIUS_M + 1_730_044.745)).abs() < 1e-6);
    }
}
