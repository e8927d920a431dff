//! World basemap module
//!
//! Coastline geometry loading and the equirectangular raster the ground
//! track is composited onto.

pub mod geometry;
pub mod raster;

pub use geometry::{load_coastlines, Coastlines, Vertex};
pub use raster::{GlobeRaster, Palette, BACKGROUND_INDEX, COASTLINE_INDEX, TRACK_INDEX};
