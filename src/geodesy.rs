//! Geodetic projection of inertial positions
//!
//! Converts an Earth-centered inertial position into the longitude/latitude
//! of the sub-satellite point. In the rotating-frame configuration the
//! longitude is additionally corrected for Earth rotation by an offset
//! proportional to elapsed time.

use nalgebra::Vector3;

use crate::propagation::OMEGA_EARTH_DEG_PER_S;

/// Sub-satellite point in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPoint {
    /// Longitude in degrees, in (−180, 180]
    pub longitude: f64,

    /// Latitude in degrees, in [−90, 90]
    pub latitude: f64,
}

/// Projects inertial positions to longitude/latitude
///
/// A rotation rate of zero reproduces the non-rotating (inertial-frame)
/// ground track; the rotating variant subtracts the accumulated Earth
/// rotation from the longitude.
#[derive(Debug, Clone, Copy)]
pub struct GeodeticProjector {
    omega_deg_per_s: f64,
}

impl GeodeticProjector {
    /// Projector for a non-rotating Earth
    pub fn inertial() -> Self {
        Self {
            omega_deg_per_s: 0.0,
        }
    }

    /// Projector correcting longitude for Earth rotation
    pub fn rotating() -> Self {
        Self {
            omega_deg_per_s: OMEGA_EARTH_DEG_PER_S,
        }
    }

    /// Project `position` (meters, inertial frame) at `elapsed` seconds
    /// since the start of the run.
    ///
    /// Undefined when x = y = 0 (pole-on-axis case), inherited from atan2.
    pub fn project(&self, position: &Vector3<f64>, elapsed: f64) -> GroundPoint {
        let (x, y, z) = (position.x, position.y, position.z);

        let longitude = y.atan2(x).to_degrees();
        let latitude = z.atan2((x * x + y * y).sqrt()).to_degrees();

        // Both the accumulated rotation and the corrected longitude are
        // wrapped, so multi-day runs stay at the seam-consistent range.
        let dlong = wrap_degrees(elapsed * self.omega_deg_per_s);
        let longitude = wrap_degrees(longitude - dlong);

        GroundPoint {
            longitude,
            latitude,
        }
    }
}

/// Wrap an angle in degrees into (−180, 180]
///
/// The half-open range must match the raster's pixel mapping or tracks alias
/// to the wrong hemisphere at the ±180° seam.
pub fn wrap_degrees(deg: f64) -> f64 {
    let mut wrapped = deg % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    wrapped
}
