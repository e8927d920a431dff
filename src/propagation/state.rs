//! Orbital state representation
//!
//! Provides the state vector advanced by the fixed-step integrators, plus
//! the physical constants shared across the propagation pipeline.

use nalgebra::Vector3;

/// State vector for numerical integration
///
/// Position and velocity are in an Earth-centered inertial frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    /// Position in the inertial frame (meters)
    pub position: Vector3<f64>,

    /// Velocity in the inertial frame (m/s)
    pub velocity: Vector3<f64>,
}

impl StateVector {
    /// Create a new state vector
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// Compute orbital radius (distance from Earth center) in meters
    pub fn radius(&self) -> f64 {
        self.position.norm()
    }

    /// Compute altitude above Earth surface in meters
    pub fn altitude(&self) -> f64 {
        self.radius() - EARTH_RADIUS_M
    }

    /// Compute orbital speed in m/s
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Compute specific orbital energy (vis-viva) in J/kg
    pub fn specific_energy(&self, mu: f64) -> f64 {
        let v2 = self.velocity.norm_squared();
        let r = self.position.norm();
        0.5 * v2 - mu / r
    }

    /// Compute semi-major axis in meters (negative for hyperbolic)
    pub fn semi_major_axis(&self, mu: f64) -> f64 {
        -mu / (2.0 * self.specific_energy(mu))
    }

    /// Compute orbital period in seconds (only valid for elliptical orbits)
    pub fn period(&self, mu: f64) -> Option<f64> {
        let a = self.semi_major_axis(mu);
        if a > 0.0 {
            Some(2.0 * std::f64::consts::PI * (a.powi(3) / mu).sqrt())
        } else {
            None // Hyperbolic or parabolic
        }
    }
}

// Physical constants
/// Gravitational constant in m³/(kg·s²)
pub const G: f64 = 6.673e-11;

/// Earth mass in kilograms
pub const EARTH_MASS_KG: f64 = 5.97e24;

/// Earth's gravitational parameter (G·M) in m³/s²
pub const MU_EARTH: f64 = G * EARTH_MASS_KG;

/// Earth's mean radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Earth's rotation rate in degrees per second (one revolution per day)
pub const OMEGA_EARTH_DEG_PER_S: f64 = 360.0 / 86_400.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_leo_state() {
        // The reference orbit: ~1687 km altitude, circular speed
        let r = EARTH_RADIUS_M + 1_686_870.745;
        let v = (MU_EARTH / r).sqrt();

        let state = StateVector::new(Vector3::new(r, 0.0, 0.0), Vector3::new(0.0, v, 0.0));

        assert!((state.altitude() / 1000.0 - 1686.87).abs() < 0.01);
        assert!((state.speed() / 1000.0 - 7.03).abs() < 0.01);

        // Circular orbit: semi-major axis equals the radius
        let a = state.semi_major_axis(MU_EARTH);
        assert!((a - r).abs() / r < 1e-12);

        // ~2 hour period at this altitude
        let period = state.period(MU_EARTH).unwrap();
        assert!((period / 60.0 - 120.0).abs() < 1.0);
    }

    #[test]
    fn test_bound_orbit_energy_negative() {
        let r = EARTH_RADIUS_M + 400_000.0;
        let v = (MU_EARTH / r).sqrt();
        let state = StateVector::new(Vector3::new(r, 0.0, 0.0), Vector3::new(0.0, v, 0.0));

        assert!(state.specific_energy(MU_EARTH) < 0.0);
        assert!(state.period(MU_EARTH).is_some());
    }

    #[test]
    fn test_escape_orbit_has_no_period() {
        let r = EARTH_RADIUS_M + 400_000.0;
        let v_escape = (2.0 * MU_EARTH / r).sqrt();
        let state =
            StateVector::new(Vector3::new(r, 0.0, 0.0), Vector3::new(0.0, v_escape * 1.1, 0.0));

        assert!(state.period(MU_EARTH).is_none());
    }
}
