//! # driftcast
//!
//! Wind-driven ocean debris drift forecasting.
//!
//! Floating debris moves with the surface wind. This library models
//! that in three stages:
//!
//! - **Grid thinning**: a dense NOAA surface-wind export is thinned to
//!   an evenly spaced grid of wind samples.
//! - **Drift forecast**: debris origins are advanced in fixed time
//!   steps, each step taking the wind of the nearest grid sample.
//! - **Overlay projection**: the resulting paths are projected into
//!   screen space as sized markers for the map view.
//!
//! ## Example
//!
//! ```
//! use driftcast::{ForecastParams, run_forecast};
//!
//! let wind = "lat,lon,x_wind,y_wind\n0.0,0.0,1.0,0.0\n";
//! let origins = "id,count,lat,lon\nGYRE-1,42,0.0,-140.0\n";
//!
//! let paths = run_forecast(wind, origins, ForecastParams::default()).unwrap();
//! assert_eq!(paths.len(), 1);
//! // Eastward wind: the cluster ends up east of where it started.
//! assert!(paths[0].end_lon > paths[0].start_lon);
//! ```

pub mod drift;
pub mod error;
pub mod geo;
pub mod grid;
pub mod overlay;
pub mod wind;

pub use drift::{
    DriftPath, Drifter, ForecastParams, PATHS_HEADER, parse_origins, paths_to_csv, run_forecast,
};
pub use error::DriftError;
pub use geo::{M_PER_DEG_LAT, WindVector, distance, m_per_deg_lon};
pub use grid::{DEFAULT_RESOLUTION, GRID_HEADER, thin_wind_csv};
pub use overlay::{Marker, Viewport, marker_size, markers_from_paths_csv, markers_to_json};
pub use wind::{WindField, WindSample};
