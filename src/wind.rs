//! Nearest-sample wind lookup over a thinned grid.

use serde::Deserialize;

use crate::error::DriftError;
use crate::geo::{self, WindVector};

/// Samples farther away than this (in degrees) fall back to calm air.
const NEAREST_CUTOFF_DEG: f64 = 1000.0;

/// One grid sample: a position and the wind recorded there.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WindSample {
    pub lat: f64,
    pub lon: f64,
    pub x_wind: f64,
    pub y_wind: f64,
}

impl WindSample {
    pub fn vector(&self) -> WindVector {
        WindVector::new(self.x_wind, self.y_wind)
    }
}

/// An immutable set of wind samples, loaded once per forecast.
#[derive(Debug, Clone, Default)]
pub struct WindField {
    samples: Vec<WindSample>,
}

impl WindField {
    /// Parse a thinned grid (`lat,lon,x_wind,y_wind` header plus rows).
    pub fn parse(input: &str) -> Result<Self, DriftError> {
        let mut reader = csv::Reader::from_reader(input.as_bytes());
        let mut samples = Vec::new();
        for (idx, result) in reader.deserialize().enumerate() {
            let sample: WindSample =
                result.map_err(|e| DriftError::malformed(idx + 2, e.to_string()))?;
            samples.push(sample);
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The wind at the sample closest to `(lat, lon)`.
    ///
    /// Falls back to calm air when no sample lies within the cutoff. A
    /// genuinely calm nearest sample is indistinguishable from the
    /// fallback.
    pub fn nearest(&self, lat: f64, lon: f64) -> WindVector {
        let mut shortest = NEAREST_CUTOFF_DEG;
        let mut wind = WindVector::CALM;
        for sample in &self.samples {
            let dist = geo::distance(lat, lon, sample.lat, sample.lon);
            if dist < shortest {
                shortest = dist;
                wind = sample.vector();
            }
        }
        wind
    }
}
