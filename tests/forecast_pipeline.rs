//! End-to-end run of the forecast pipeline over files on disk:
//! raw export -> thinned grid -> forecast paths -> overlay markers.

use driftcast::{ForecastParams, Viewport};
use std::fs;

/// A small raw export: two usable samples with eastward wind, one row
/// inside the first grid step and one without wind data.
const RAW_EXPORT: &str = "\
time,depth,lat,lon,u,v
2011-09-01,0,-80.0,5.0,9.9,9.9
2011-09-01,0,-80.0,20.0,2.0,0.0
2011-09-01,0,-80.0,40.0,,
2011-09-01,0,-60.0,200.0,2.0,0.0
";

const ORIGINS: &str = "\
id,count,lat,lon
GYRE-1,42,-80.0,21.0
GYRE-2,7,-60.0,199.0
";

#[test]
fn thin_predict_overlay_chain() {
    let dir = tempfile::tempdir().unwrap();

    // Stage 1: thin the raw export.
    let export_path = dir.path().join("export.csv");
    fs::write(&export_path, RAW_EXPORT).unwrap();
    let export_text = fs::read_to_string(&export_path).unwrap();
    let (grid, rows_in, rows_kept) = driftcast::thin_wind_csv(&export_text, 10.0).unwrap();
    assert_eq!(rows_in, 4);
    // The lon-5 row sits inside the first grid step and the windless
    // row is dropped.
    assert_eq!(rows_kept, 2);

    let grid_path = dir.path().join("grid.csv");
    fs::write(&grid_path, &grid).unwrap();

    // Stage 2: forecast both origins against the thinned grid.
    let grid_text = fs::read_to_string(&grid_path).unwrap();
    let params = ForecastParams::default();
    let paths = driftcast::run_forecast(&grid_text, ORIGINS, params).unwrap();
    assert_eq!(paths.len(), 2);
    for path in &paths {
        // Pure eastward wind everywhere: longitude grows, latitude holds.
        assert!(path.end_lon > path.start_lon, "no drift for {}", path.id);
        assert_eq!(path.end_lat, path.start_lat);
    }

    let paths_path = dir.path().join("paths.csv");
    fs::write(&paths_path, driftcast::paths_to_csv(&paths)).unwrap();

    // Stage 3: project the forecast into markers.
    let paths_text = fs::read_to_string(&paths_path).unwrap();
    let markers = driftcast::markers_from_paths_csv(&paths_text, Viewport::default()).unwrap();
    assert_eq!(markers.len(), 2);

    let by_id = |id: &str| markers.iter().find(|m| m.id == id).unwrap();
    let gyre1 = by_id("GYRE-1");
    assert_eq!(gyre1.count, 42);
    assert_eq!(gyre1.size, 21);
    assert!(gyre1.forecast_x >= gyre1.x);

    let gyre2 = by_id("GYRE-2");
    // Small cluster floors to the minimum marker size.
    assert_eq!(gyre2.size, 5);

    // Markers serialize for the map view.
    let json = driftcast::markers_to_json(&markers).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}
