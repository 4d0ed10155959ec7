//! Wind-driven drift simulation.
//!
//! Each tracked debris cluster is advanced in fixed time steps. At
//! every step the cluster takes the wind of the nearest grid sample and
//! converts it from meters per second into degrees of latitude and
//! longitude travelled.

use serde::{Deserialize, Serialize};

use crate::error::DriftError;
use crate::geo::{self, M_PER_DEG_LAT, WindVector};
use crate::wind::WindField;

/// Header written on every forecast-paths CSV.
pub const PATHS_HEADER: &str = "id,count,start_lat,start_lon,end_lat,end_lon";

/// Forecast parameters: step length and step count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastParams {
    /// Seconds simulated per step.
    pub step_secs: f64,
    /// Number of steps.
    pub steps: usize,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            step_secs: 300.0,
            steps: 100,
        }
    }
}

/// One tracked debris cluster.
///
/// `count` is the number of debris items aggregated at the origin; it
/// rides along unchanged and scales the overlay marker downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Drifter {
    pub id: String,
    pub count: u32,
    pub lat: f64,
    pub lon: f64,
}

impl Drifter {
    /// Advance the position under `wind` for `dt_secs` seconds.
    ///
    /// The longitude scale is taken at the latitude before the step.
    pub fn step(&mut self, wind: &WindVector, dt_secs: f64) {
        let m_lon = geo::m_per_deg_lon(self.lat);
        self.lat += wind.y / M_PER_DEG_LAT * dt_secs;
        self.lon += wind.x / m_lon * dt_secs;
    }
}

/// Origin and forecast endpoint for one drifter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftPath {
    pub id: String,
    pub count: u32,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
}

/// Parse debris origins (`id,count,lat,lon` header plus rows).
pub fn parse_origins(input: &str) -> Result<Vec<Drifter>, DriftError> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());
    let mut drifters = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let drifter: Drifter = result.map_err(|e| DriftError::malformed(idx + 2, e.to_string()))?;
        drifters.push(drifter);
    }
    Ok(drifters)
}

/// Run the forecast: every drifter steps under its nearest wind sample.
///
/// Drifters are independent, so the order they step in within one
/// iteration does not change the result.
pub fn run_forecast(
    wind_csv: &str,
    origins_csv: &str,
    params: ForecastParams,
) -> Result<Vec<DriftPath>, DriftError> {
    let field = WindField::parse(wind_csv)?;
    let mut drifters = parse_origins(origins_csv)?;
    let starts: Vec<(f64, f64)> = drifters.iter().map(|d| (d.lat, d.lon)).collect();

    for _ in 0..params.steps {
        for drifter in drifters.iter_mut() {
            let wind = field.nearest(drifter.lat, drifter.lon);
            drifter.step(&wind, params.step_secs);
        }
    }

    Ok(drifters
        .into_iter()
        .zip(starts)
        .map(|(drifter, (start_lat, start_lon))| DriftPath {
            id: drifter.id,
            count: drifter.count,
            start_lat,
            start_lon,
            end_lat: drifter.lat,
            end_lon: drifter.lon,
        })
        .collect())
}

/// Render forecast paths as CSV.
pub fn paths_to_csv(paths: &[DriftPath]) -> String {
    let mut output = String::from(PATHS_HEADER);
    output.push('\n');
    for path in paths {
        output.push_str(&format!(
            "{},{},{},{},{},{}\n",
            path.id, path.count, path.start_lat, path.start_lon, path.end_lat, path.end_lon
        ));
    }
    output
}
