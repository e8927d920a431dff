//! Orbit propagation module
//!
//! Two-body propagation with fixed-step explicit integration:
//!
//! - **StateVector**: position/velocity state advanced each step
//! - **PointMassGravity**: central-body acceleration
//! - **Integrator**: fixed-step schemes (semi-implicit and naive Euler)
//! - **Propagator**: the driver looping the integrator over the mission
//!   duration and feeding decimated samples to an output sink

pub mod forces;
pub mod integrator;
pub mod state;

mod propagator;

pub use forces::PointMassGravity;
pub use integrator::{ExplicitEuler, Integrator, SemiImplicitEuler};
pub use propagator::{Propagator, RunPhase, RunSummary};
pub use state::{
    StateVector, EARTH_MASS_KG, EARTH_RADIUS_M, G, MU_EARTH, OMEGA_EARTH_DEG_PER_S,
};
