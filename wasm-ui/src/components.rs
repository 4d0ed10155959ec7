//! Routed views for the driftcast UI.

use driftcast::{Marker, Viewport, markers_from_paths_csv};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Demo forecast shipped with the UI so the map renders without any
/// input: a handful of Pacific debris clusters after a default run.
const SAMPLE_PATHS: &str = r#"id,count,start_lat,start_lon,end_lat,end_lon
GYRE-N01,42,33.0,-145.0,32.4,-143.2
GYRE-N02,18,35.0,-150.0,34.6,-148.9
GYRE-N03,7,30.0,-138.0,29.5,-136.6
COAST-A1,25,21.0,-157.0,20.7,-155.8
COAST-B4,11,-8.0,-112.0,-8.3,-110.9
"#;

/// Landing page.
#[function_component(HomeView)]
pub fn home_view() -> Html {
    html! {
        <div class="panel home-panel">
            <div class="panel-header">
                <h2>{ "Ocean Debris Tracker" }</h2>
            </div>
            <div class="panel-content">
                <p>{ "driftcast forecasts where floating debris drifts under surface \
                      wind. Debris origins are advanced in five-minute steps against \
                      the nearest sample of a thinned wind grid, and the resulting \
                      paths are projected onto the world map." }</p>
                <ul class="feature-list">
                    <li>{ "Wind grids thinned from NOAA surface exports" }</li>
                    <li>{ "Nearest-sample wind lookup with calm fallback" }</li>
                    <li>{ "Forecast endpoints projected to screen space" }</li>
                </ul>
                <p class="hint">{ "Open the Map page to see the current forecast." }</p>
            </div>
        </div>
    }
}

/// Map page state.
#[derive(Clone, PartialEq)]
struct MapState {
    /// Forecast paths CSV, editable in the side panel.
    paths_text: String,
    /// Markers projected from the last good parse.
    markers: Vec<Marker>,
    /// Parse error, if any.
    error: Option<String>,
    /// Cluster count summary.
    stats: String,
    /// Whether markers sit at their forecast position.
    at_forecast: bool,
}

impl MapState {
    /// Re-parse the paths text and rebuild the marker set.
    fn reproject(&mut self) {
        match markers_from_paths_csv(&self.paths_text, Viewport::default()) {
            Ok(markers) => {
                self.stats = format!("{} clusters tracked", markers.len());
                self.markers = markers;
                self.error = None;
            }
            Err(e) => {
                self.markers.clear();
                self.stats.clear();
                self.error = Some(e.to_string());
            }
        }
        self.at_forecast = false;
    }
}

impl Default for MapState {
    fn default() -> Self {
        let mut state = Self {
            paths_text: SAMPLE_PATHS.to_string(),
            markers: Vec::new(),
            error: None,
            stats: String::new(),
            at_forecast: false,
        };
        state.reproject();
        state
    }
}

/// One debris marker, absolutely positioned in the map area.
fn marker_html(marker: &Marker, at_forecast: bool) -> Html {
    let (x, y) = if at_forecast {
        (marker.forecast_x, marker.forecast_y)
    } else {
        (marker.x, marker.y)
    };
    let style = format!(
        "left:{x}px;top:{y}px;width:{size}px;height:{size}px",
        size = marker.size
    );
    let title = format!(
        "{}: {} items at {:.4}N {:.4}E",
        marker.id, marker.count, marker.lat, marker.lon
    );
    html! {
        <div key={marker.id.clone()} class="marker" style={style} title={title} />
    }
}

/// Drift map: projected markers over a fixed-viewport world map, plus
/// a panel for supplying forecast paths.
#[function_component(MapView)]
pub fn map_view() -> Html {
    let state = use_state(MapState::default);

    let on_paths_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.paths_text = target.value();
            state.set(new_state);
        })
    };

    let on_render = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.reproject();
            state.set(new_state);
        })
    };

    // Snap markers back to their origins, then glide them to the
    // forecast position after a beat.
    let on_playback = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.at_forecast = false;
            state.set(new_state);

            let state = state.clone();
            Timeout::new(300, move || {
                let mut new_state = (*state).clone();
                new_state.at_forecast = true;
                state.set(new_state);
            })
            .forget();
        })
    };

    let viewport = Viewport::default();

    html! {
        <div class="map-page">
            <div class="panel map-panel">
                <div class="panel-header">
                    <h2>{ "Drift Map" }</h2>
                    if !state.stats.is_empty() {
                        <span class="stats">{ &state.stats }</span>
                    }
                    <div class="button-group">
                        <button class="playback-button" onclick={on_playback}>
                            { "Play forecast" }
                        </button>
                    </div>
                </div>
                <div class="panel-content">
                    <div
                        class="map-area"
                        style={format!("width:{}px;height:{}px", viewport.width, viewport.height)}
                    >
                        { for state.markers.iter().map(|m| marker_html(m, state.at_forecast)) }
                    </div>
                </div>
            </div>

            <div class="panel paths-panel">
                <div class="panel-header">
                    <h2>{ "Forecast Paths" }</h2>
                    <div class="button-group">
                        <button class="run-button" onclick={on_render}>
                            { "Render" }
                        </button>
                    </div>
                </div>
                <div class="panel-content">
                    <textarea
                        class="paths-input"
                        value={state.paths_text.clone()}
                        oninput={on_paths_input}
                        spellcheck="false"
                        rows="8"
                    />
                    if let Some(error) = &state.error {
                        <div class="error">
                            { error }
                        </div>
                    }
                    <div class="format-help">
                        <details>
                            <summary>{ "CSV format" }</summary>
                            <pre>{ "id,count,start_lat,start_lon,end_lat,end_lon" }</pre>
                        </details>
                    </div>
                </div>
            </div>
        </div>
    }
}
