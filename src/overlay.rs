//! Screen-space projection of forecast paths.
//!
//! Turns forecast paths into positioned markers for the map view. The
//! projection is a plain equirectangular fit of the whole globe into a
//! fixed viewport, with whole-pixel steps per degree.

use serde::{Deserialize, Serialize};

use crate::drift::DriftPath;
use crate::error::DriftError;

/// Pixel area the markers are projected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixels per degree of longitude (whole pixels).
    fn px_per_deg_lon(&self) -> i32 {
        (self.width / 360) as i32
    }

    /// Pixels per degree of latitude (whole pixels).
    fn px_per_deg_lat(&self) -> i32 {
        (self.height / 180) as i32
    }

    /// Project a coordinate to viewport pixels.
    ///
    /// Degrees are truncated before scaling, so markers snap to the
    /// degree grid.
    pub fn project(&self, lat: f64, lon: f64) -> (i32, i32) {
        let x = (lon + 180.0).trunc() as i32 * self.px_per_deg_lon();
        let y = (-lat + 90.0).trunc() as i32 * self.px_per_deg_lat();
        (x, y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 980,
        }
    }
}

/// Marker diameter in pixels for a cluster of `count` items.
///
/// Small clusters are floored to a visible minimum.
pub fn marker_size(count: u32) -> i32 {
    (count.max(10) / 2) as i32
}

/// One positioned marker: the cluster's current pixel position, its
/// forecast position, and a diameter scaled from the cluster count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub count: u32,
    pub lat: f64,
    pub lon: f64,
    pub x: i32,
    pub y: i32,
    pub forecast_x: i32,
    pub forecast_y: i32,
    pub size: i32,
}

impl Marker {
    /// Build a marker from one forecast path.
    pub fn from_path(path: &DriftPath, viewport: Viewport) -> Self {
        let (x, y) = viewport.project(path.start_lat, path.start_lon);
        let (forecast_x, forecast_y) = viewport.project(path.end_lat, path.end_lon);
        Self {
            id: path.id.clone(),
            count: path.count,
            lat: path.start_lat,
            lon: path.start_lon,
            x,
            y,
            forecast_x,
            forecast_y,
            size: marker_size(path.count),
        }
    }
}

/// Parse a forecast-paths CSV and project every path into a marker.
pub fn markers_from_paths_csv(input: &str, viewport: Viewport) -> Result<Vec<Marker>, DriftError> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());
    let mut markers = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let path: DriftPath = result.map_err(|e| DriftError::malformed(idx + 2, e.to_string()))?;
        markers.push(Marker::from_path(&path, viewport));
    }
    Ok(markers)
}

/// Serialize markers as a JSON array.
pub fn markers_to_json(markers: &[Marker]) -> Result<String, DriftError> {
    Ok(serde_json::to_string_pretty(markers)?)
}
