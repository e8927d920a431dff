//! Equirectangular basemap raster and ground-track compositing
//!
//! A fixed-size indexed-color buffer mapping longitude ∈ [−180, 180] to
//! x ∈ [0, width) and latitude ∈ [90, −90] to y ∈ [0, height) (north up, so
//! increasing latitude maps to decreasing y). Construction burns the
//! background, the coastline vertices, then the equator reference line;
//! ground-track pixels are burned afterward during propagation and
//! permanently overwrite whatever is underneath.

use std::io::Write;

use anyhow::Result;

use super::geometry::Coastlines;
use crate::geodesy::GroundPoint;

/// Palette index of the background fill
pub const BACKGROUND_INDEX: u8 = 0;

/// Palette index of coastline vertices
pub const COASTLINE_INDEX: u8 = 1;

/// Palette index of the equator line and the ground track
pub const TRACK_INDEX: u8 = 2;

/// The three-entry color palette, passed in explicitly at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: [u8; 3],
    pub coastline: [u8; 3],
    pub track: [u8; 3],
}

impl Default for Palette {
    /// White background, black coastlines, red track
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            coastline: [0, 0, 0],
            track: [255, 0, 0],
        }
    }
}

impl Palette {
    /// Flat RGB byte layout in palette-index order
    fn flat(&self) -> [u8; 9] {
        let mut flat = [0u8; 9];
        flat[0..3].copy_from_slice(&self.background);
        flat[3..6].copy_from_slice(&self.coastline);
        flat[6..9].copy_from_slice(&self.track);
        flat
    }
}

/// Indexed-color world raster with degree→pixel mapping
pub struct GlobeRaster {
    width: u32,
    height: u32,
    scale: f64,    // pixels per degree
    offset_x: f64, // degrees added to longitude
    offset_y: f64, // degrees latitude is subtracted from
    palette: Palette,
    pixels: Vec<u8>,
}

impl GlobeRaster {
    /// Create a raster filled with the background color
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        let scale = f64::from(width) / 360.0;
        let raster = Self {
            width,
            height,
            scale,
            offset_x: f64::from(width) / (2.0 * scale),
            offset_y: f64::from(height) / (2.0 * scale),
            palette,
            pixels: vec![BACKGROUND_INDEX; width as usize * height as usize],
        };

        log::debug!("created {}x{} raster, 3-color palette", width, height);
        log::debug!("long/lat scaled by {:.3} px/deg", raster.scale);
        log::debug!(
            "long/lat offset by ({:.3}, {:.3}) deg",
            raster.offset_x,
            raster.offset_y
        );

        raster
    }

    /// Build the full basemap: background, coastline vertices, equator line
    pub fn from_coastlines(width: u32, height: u32, palette: Palette, coastlines: &Coastlines) -> Self {
        let mut raster = Self::new(width, height, palette);
        raster.burn_coastlines(coastlines);
        raster.burn_equator();
        raster
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw palette-index buffer, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Map longitude/latitude in degrees to pixel coordinates
    ///
    /// The mapping is linear with the ±180° and ±90° boundaries clamped onto
    /// the edge pixel columns/rows, never out of bounds.
    pub fn to_pixel(&self, longitude: f64, latitude: f64) -> (u32, u32) {
        let x = (self.scale * (longitude + self.offset_x)).floor();
        let y = (self.scale * (self.offset_y - latitude)).floor();

        let x = (x.max(0.0) as u32).min(self.width - 1);
        let y = (y.max(0.0) as u32).min(self.height - 1);
        (x, y)
    }

    /// Palette index at a pixel
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    fn set_index(&mut self, x: u32, y: u32, index: u8) {
        self.pixels[y as usize * self.width as usize + x as usize] = index;
    }

    /// Mark every coastline vertex at its projected pixel
    fn burn_coastlines(&mut self, coastlines: &Coastlines) {
        for line in coastlines.iter() {
            for vertex in line {
                let (x, y) = self.to_pixel(vertex.lon, vertex.lat);
                self.set_index(x, y, COASTLINE_INDEX);
            }
        }
    }

    /// Burn the equator reference line at fine longitude resolution,
    /// overwriting any coastline pixel it crosses
    fn burn_equator(&mut self) {
        let mut longitude = -180.0;
        while longitude <= 180.0 {
            let (x, y) = self.to_pixel(longitude, 0.0);
            self.set_index(x, y, TRACK_INDEX);
            longitude += 0.01;
        }
    }

    /// Mark one ground-track sample; the track always wins over the basemap
    pub fn plot_track(&mut self, point: &GroundPoint) {
        let (x, y) = self.to_pixel(point.longitude, point.latitude);
        self.set_index(x, y, TRACK_INDEX);
    }

    /// Serialize the composited raster as a palette-indexed GIF
    pub fn encode_gif<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = gif::Encoder::new(
            writer,
            self.width as u16,
            self.height as u16,
            &self.palette.flat(),
        )?;

        let frame = gif::Frame::from_indexed_pixels(
            self.width as u16,
            self.height as u16,
            &self.pixels[..],
            None,
        );
        encoder.write_frame(&frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basemap::geometry::Vertex;

    fn coastlines_from(lines: &[&[(f64, f64)]]) -> Coastlines {
        let mut coastlines = Coastlines::default();
        for line in lines {
            coastlines.push(line.iter().map(|&(lon, lat)| Vertex { lon, lat }).collect());
        }
        coastlines
    }

    #[test]
    fn test_seam_maps_to_opposite_edges() {
        let raster = GlobeRaster::new(3600, 1800, Palette::default());

        let (west, _) = raster.to_pixel(-180.0, 0.0);
        let (east, _) = raster.to_pixel(180.0, 0.0);

        assert_eq!(west, 0);
        assert_eq!(east, 3599);
    }

    #[test]
    fn test_vertical_flip() {
        let raster = GlobeRaster::new(3600, 1800, Palette::default());

        let (_, north) = raster.to_pixel(0.0, 90.0);
        let (_, equator) = raster.to_pixel(0.0, 0.0);
        let (_, south) = raster.to_pixel(0.0, -90.0);

        assert_eq!(north, 0);
        assert_eq!(equator, 900);
        assert_eq!(south, 1799);
    }

    #[test]
    fn test_center_of_map() {
        let raster = GlobeRaster::new(3600, 1800, Palette::default());
        assert_eq!(raster.to_pixel(0.0, 0.0), (1800, 900));
    }

    #[test]
    fn test_equator_line_burned() {
        let coastlines = coastlines_from(&[]);
        let raster = GlobeRaster::from_coastlines(360, 180, Palette::default(), &coastlines);

        for x in [0, 90, 180, 359] {
            assert_eq!(raster.index_at(x, 90), TRACK_INDEX);
        }
        // The row above stays background
        assert_eq!(raster.index_at(180, 89), BACKGROUND_INDEX);
    }

    #[test]
    fn test_compositing_order() {
        // A coastline vertex on the equator is overwritten by the equator
        // line; a track pixel overwrites a coastline pixel.
        let coastlines = coastlines_from(&[&[(10.0, 0.0), (10.0, 45.0)]]);
        let mut raster = GlobeRaster::from_coastlines(360, 180, Palette::default(), &coastlines);

        let (x_eq, y_eq) = raster.to_pixel(10.0, 0.0);
        assert_eq!(raster.index_at(x_eq, y_eq), TRACK_INDEX);

        let (x, y) = raster.to_pixel(10.0, 45.0);
        assert_eq!(raster.index_at(x, y), COASTLINE_INDEX);

        raster.plot_track(&GroundPoint {
            longitude: 10.0,
            latitude: 45.0,
        });
        assert_eq!(raster.index_at(x, y), TRACK_INDEX);
    }

    #[test]
    fn test_idempotent_construction() {
        let coastlines = coastlines_from(&[
            &[(-10.0, 50.0), (-9.5, 50.2), (-9.0, 50.1)],
            &[(100.0, -30.0), (101.0, -31.0)],
        ]);

        let first = GlobeRaster::from_coastlines(720, 360, Palette::default(), &coastlines);
        let second = GlobeRaster::from_coastlines(720, 360, Palette::default(), &coastlines);

        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn test_gif_roundtrip_header() {
        let raster = GlobeRaster::new(36, 18, Palette::default());
        let mut buf = Vec::new();
        raster.encode_gif(&mut buf).unwrap();

        // GIF89a magic and the encoded dimensions
        assert_eq!(&buf[0..6], b"GIF89a");
        assert_eq!(u16::from_le_bytes([buf[6], buf[7]]), 36);
        assert_eq!(u16::from_le_bytes([buf[8], buf[9]]), 18);
    }
}
