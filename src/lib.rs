//! Low-Earth-orbit ground-track propagator
//!
//! Propagates a satellite under two-body point-mass gravity with a
//! fixed-step integrator, projects the trajectory to geographic
//! longitude/latitude, and either tabulates the samples or composites the
//! ground track onto an equirectangular coastline map.

pub mod basemap;
pub mod config;
pub mod geodesy;
pub mod output;
pub mod propagation;
