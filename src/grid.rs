//! Wind-grid thinning.
//!
//! A NOAA surface-wind export carries far more samples than the
//! forecast needs. [`thin_wind_csv`] walks the export in file order and
//! keeps roughly one sample per `resolution` degrees in each direction,
//! producing the compact `lat,lon,x_wind,y_wind` grid that the rest of
//! the pipeline reads.

use crate::error::DriftError;

/// Header written on every thinned grid.
pub const GRID_HEADER: &str = "lat,lon,x_wind,y_wind";

/// Default grid spacing in degrees.
pub const DEFAULT_RESOLUTION: f64 = 10.0;

/// Columns of the raw export, by position. The export is whatever the
/// upstream NetCDF-to-CSV dump produced; only these four matter.
const COL_LAT: usize = 2;
const COL_LON: usize = 3;
const COL_X_WIND: usize = 4;
const COL_Y_WIND: usize = 5;

/// Thin a dense wind export into an evenly spaced grid.
///
/// The export's first line is a header and is skipped. Rows are walked
/// in file order, latitude-major: a row is dropped when its longitude
/// is within `resolution` degrees of the last kept longitude, or when
/// the longitude has wrapped to a new sweep and the latitude is still
/// within `resolution` degrees of the last kept latitude. Rows with an
/// empty wind component are dropped as well and never advance the grid
/// cursor.
///
/// Returns `(output_csv, rows_in, rows_kept)`.
pub fn thin_wind_csv(input: &str, resolution: f64) -> Result<(String, usize, usize), DriftError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut output = String::from(GRID_HEADER);
    output.push('\n');

    let mut rows_in = 0usize;
    let mut rows_kept = 0usize;

    // Grid cursor: the last kept position. Starts south of everything.
    let mut last_lat = -90.0f64;
    let mut last_lon = 0.0f64;

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        rows_in += 1;
        let line = idx + 2; // 1-based, after the header

        let lat_field = record.get(COL_LAT).unwrap_or("").trim();
        let lon_field = record.get(COL_LON).unwrap_or("").trim();
        let x_wind = record.get(COL_X_WIND).unwrap_or("").trim();
        let y_wind = record.get(COL_Y_WIND).unwrap_or("").trim();

        let lat: f64 = lat_field
            .parse()
            .map_err(|_| DriftError::malformed(line, format!("bad latitude {lat_field:?}")))?;
        let lon: f64 = lon_field
            .parse()
            .map_err(|_| DriftError::malformed(line, format!("bad longitude {lon_field:?}")))?;

        // Within the current grid step, or a new latitude sweep that is
        // still too close to the previous one.
        if (lon - last_lon).abs() < resolution
            || (last_lon > lon && (lat - last_lat).abs() < resolution)
        {
            continue;
        }

        // No wind recorded at this point.
        if x_wind.is_empty() || y_wind.is_empty() {
            continue;
        }

        last_lat = lat;
        last_lon = lon;
        rows_kept += 1;
        output.push_str(&format!("{lat_field},{lon_field},{x_wind},{y_wind}\n"));
    }

    Ok((output, rows_in, rows_kept))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: wrap rows in the raw-export shape (header + 6 columns).
    fn export(rows: &[&str]) -> String {
        let mut text = String::from("time,depth,lat,lon,u,v\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    #[test]
    fn keeps_samples_spaced_by_resolution() {
        let input = export(&[
            "t,0,-80.0,20.0,1.0,2.0",
            "t,0,-80.0,25.0,1.1,2.1", // within 10 deg of lon 20
            "t,0,-80.0,40.0,1.2,2.2",
        ]);
        let (output, rows_in, rows_kept) = thin_wind_csv(&input, 10.0).unwrap();
        assert_eq!(rows_in, 3);
        assert_eq!(rows_kept, 2);
        assert_eq!(
            output,
            "lat,lon,x_wind,y_wind\n-80.0,20.0,1.0,2.0\n-80.0,40.0,1.2,2.2\n"
        );
    }

    #[test]
    fn drops_rows_near_initial_cursor() {
        // The cursor starts at lon 0, so an early row at lon 5 is
        // already inside the first grid step.
        let input = export(&["t,0,-80.0,5.0,1.0,2.0"]);
        let (_, rows_in, rows_kept) = thin_wind_csv(&input, 10.0).unwrap();
        assert_eq!(rows_in, 1);
        assert_eq!(rows_kept, 0);
    }

    #[test]
    fn skips_rows_without_wind() {
        let input = export(&[
            "t,0,-80.0,20.0,,2.0",
            "t,0,-80.0,40.0,1.0,",
            "t,0,-80.0,60.0,1.0,2.0",
        ]);
        let (output, _, rows_kept) = thin_wind_csv(&input, 10.0).unwrap();
        assert_eq!(rows_kept, 1);
        assert!(output.contains("-80.0,60.0,1.0,2.0"));
    }

    #[test]
    fn empty_wind_does_not_advance_cursor() {
        // The windless row at lon 40 must not claim the grid step, so
        // the following row at lon 41 is still eligible.
        let input = export(&["t,0,-80.0,40.0,,2.0", "t,0,-80.0,41.0,1.0,2.0"]);
        let (_, _, rows_kept) = thin_wind_csv(&input, 10.0).unwrap();
        assert_eq!(rows_kept, 1);
    }

    #[test]
    fn longitude_wrap_thins_latitudes() {
        let input = export(&[
            "t,0,-80.0,350.0,1.0,2.0",
            "t,0,-75.0,10.0,1.1,2.1", // wrapped, lat within 10 deg
            "t,0,-70.0,10.0,1.2,2.2", // wrapped, lat exactly 10 deg away
        ]);
        let (output, _, rows_kept) = thin_wind_csv(&input, 10.0).unwrap();
        assert_eq!(rows_kept, 2);
        assert!(output.contains("-80.0,350.0"));
        assert!(output.contains("-70.0,10.0"));
        assert!(!output.contains("-75.0"));
    }

    #[test]
    fn header_only_input_yields_header_only_output() {
        let (output, rows_in, rows_kept) = thin_wind_csv("time,depth,lat,lon,u,v\n", 10.0).unwrap();
        assert_eq!(output, "lat,lon,x_wind,y_wind\n");
        assert_eq!(rows_in, 0);
        assert_eq!(rows_kept, 0);
    }

    #[test]
    fn malformed_latitude_reports_line() {
        let input = export(&["t,0,-80.0,20.0,1.0,2.0", "t,0,oops,40.0,1.0,2.0"]);
        let err = thin_wind_csv(&input, 10.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 3"), "unexpected error: {message}");
        assert!(message.contains("latitude"));
    }
}
