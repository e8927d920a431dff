//! Coastline geometry loading
//!
//! Reads polyline geometries from an ESRI shapefile into a plain vertex
//! structure the raster can consume. Every geometry kind is matched
//! explicitly; anything that is not a polyline is skipped and counted, not
//! silently dropped.

use std::path::Path;

use anyhow::{Context, Result};
use shapefile::Shape;

/// A single coastline vertex in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Longitude in degrees
    pub lon: f64,

    /// Latitude in degrees
    pub lat: f64,
}

/// Coastline polylines, each an ordered vertex sequence
#[derive(Debug, Clone, Default)]
pub struct Coastlines {
    polylines: Vec<Vec<Vertex>>,
}

impl Coastlines {
    /// Number of polylines
    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Total vertex count across all polylines
    pub fn vertex_count(&self) -> usize {
        self.polylines.iter().map(|line| line.len()).sum()
    }

    /// Iterate over the polylines
    pub fn iter(&self) -> impl Iterator<Item = &[Vertex]> {
        self.polylines.iter().map(|line| line.as_slice())
    }

    /// Append one polyline
    ///
    /// Programmatic construction path; the shapefile loader goes through
    /// this too.
    pub fn push(&mut self, line: Vec<Vertex>) {
        self.polylines.push(line);
    }
}

/// Load coastline polylines from a shapefile
///
/// Failure to open or parse the file is fatal to the run; the caller aborts
/// before any propagation work starts.
pub fn load_coastlines(path: impl AsRef<Path>) -> Result<Coastlines> {
    let path = path.as_ref();
    log::info!("Loading coastline geometry from {:?}", path);

    let shapes = shapefile::read_shapes(path)
        .with_context(|| format!("failed to read shapefile {:?}", path))?;

    let mut coastlines = Coastlines::default();
    let mut skipped = 0usize;
    for shape in shapes {
        if !ingest_shape(shape, &mut coastlines) {
            skipped += 1;
        }
    }

    log::info!(
        "Loaded {} polylines ({} vertices), skipped {} non-polyline geometries",
        coastlines.len(),
        coastlines.vertex_count(),
        skipped
    );

    Ok(coastlines)
}

/// Add one shape to the coastline set
///
/// Returns true if the shape was consumed. Only plain polylines carry
/// coastline data; every other kind is an explicit no-op.
fn ingest_shape(shape: Shape, out: &mut Coastlines) -> bool {
    match shape {
        Shape::Polyline(polyline) => {
            for part in polyline.parts() {
                out.push(
                    part.iter()
                        .map(|p| Vertex { lon: p.x, lat: p.y })
                        .collect(),
                );
            }
            true
        }
        other => {
            log::debug!("ignoring unsupported geometry kind: {}", shape_kind(&other));
            false
        }
    }
}

/// Short name for a geometry kind, for skip diagnostics
fn shape_kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::NullShape => "null",
        Shape::Point(_) => "point",
        Shape::Polyline(_) => "polyline",
        Shape::Polygon(_) => "polygon",
        Shape::Multipoint(_) => "multipoint",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapefile::{Point, Polyline};

    #[test]
    fn test_polyline_consumed() {
        let mut coastlines = Coastlines::default();
        let line = Polyline::new(vec![
            Point::new(-10.0, 50.0),
            Point::new(-9.5, 50.2),
            Point::new(-9.0, 50.1),
        ]);

        assert!(ingest_shape(Shape::Polyline(line), &mut coastlines));
        assert_eq!(coastlines.len(), 1);
        assert_eq!(coastlines.vertex_count(), 3);

        let first = coastlines.iter().next().unwrap();
        assert_eq!(first[0], Vertex { lon: -10.0, lat: 50.0 });
    }

    #[test]
    fn test_multipart_polyline_split() {
        let mut coastlines = Coastlines::default();
        let line = Polyline::with_parts(vec![
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            vec![Point::new(10.0, 10.0), Point::new(11.0, 11.0), Point::new(12.0, 12.0)],
        ]);

        assert!(ingest_shape(Shape::Polyline(line), &mut coastlines));
        assert_eq!(coastlines.len(), 2);
        assert_eq!(coastlines.vertex_count(), 5);
    }

    #[test]
    fn test_other_kinds_skipped() {
        let mut coastlines = Coastlines::default();

        assert!(!ingest_shape(Shape::Point(Point::new(1.0, 2.0)), &mut coastlines));
        assert!(!ingest_shape(Shape::NullShape, &mut coastlines));

        assert!(coastlines.is_empty());
        assert_eq!(coastlines.vertex_count(), 0);
    }
}
