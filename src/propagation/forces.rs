//! Central-body gravity model
//!
//! Two-body point-mass gravity is the only force in the dynamics model.

use nalgebra::Vector3;

/// Point-mass central gravity: a = −μ/r³ × r
///
/// The gravitational parameter μ = G·M is supplied at construction so runs
/// against other central bodies (or tweaked constants) need no code change.
#[derive(Debug, Clone, Copy)]
pub struct PointMassGravity {
    mu: f64,
}

impl PointMassGravity {
    /// Create a gravity model for a body with gravitational parameter μ (m³/s²)
    pub fn new(mu: f64) -> Self {
        Self { mu }
    }

    /// Gravitational parameter μ in m³/s²
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Acceleration at `position` in m/s².
    ///
    /// Precondition: |position| > 0. A zero radius is not checked at runtime;
    /// an orbit never passes through the origin, and a degenerate input
    /// propagates as NaN.
    pub fn acceleration(&self, position: &Vector3<f64>) -> Vector3<f64> {
        debug_assert!(position.norm_squared() > 0.0);

        let r2 = position.norm_squared();
        let r = r2.sqrt();
        let r3 = r2 * r;
        -self.mu / r3 * position
    }
}
