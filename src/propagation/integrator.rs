//! Fixed-step integrators for orbit propagation
//!
//! Both integrators are first-order explicit Euler schemes; they differ only
//! in the order of the velocity and position updates. That ordering decides
//! the long-run energy behavior, so it is part of each integrator's contract.

use super::forces::PointMassGravity;
use super::state::StateVector;

/// Trait for fixed-step integrators
///
/// Implementations must be `Send + Sync` so independent runs (parameter
/// sweeps) can propagate on separate threads.
pub trait Integrator: Send + Sync {
    /// Advance the state by one step of `dt` seconds
    fn step(&self, state: &StateVector, dt: f64, gravity: &PointMassGravity) -> StateVector;

    /// Integrator name
    fn name(&self) -> &'static str;

    /// Integrator order (for error estimation)
    fn order(&self) -> u8;
}

/// Semi-implicit (symplectic) Euler
///
/// Velocity is updated first; the position update then uses the UPDATED
/// velocity. Swapping the two updates changes long-run orbital energy drift.
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, state: &StateVector, dt: f64, gravity: &PointMassGravity) -> StateVector {
        let accel = gravity.acceleration(&state.position);
        let velocity = state.velocity + accel * dt;
        let position = state.position + velocity * dt;
        StateVector::new(position, velocity)
    }

    fn name(&self) -> &'static str {
        "Semi-implicit Euler"
    }

    fn order(&self) -> u8 {
        1
    }
}

/// Naive explicit (forward) Euler
///
/// Position is advanced with the PRE-update velocity. Energy grows without
/// bound over many orbits; kept selectable for drift comparisons.
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn step(&self, state: &StateVector, dt: f64, gravity: &PointMassGravity) -> StateVector {
        let accel = gravity.acceleration(&state.position);
        let position = state.position + state.velocity * dt;
        let velocity = state.velocity + accel * dt;
        StateVector::new(position, velocity)
    }

    fn name(&self) -> &'static str {
        "Explicit Euler"
    }

    fn order(&self) -> u8 {
        1
    }
}
