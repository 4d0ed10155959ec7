//! Root application component.
//!
//! Hosts the router: history-based navigation between the landing
//! page and the drift map, wrapped in the shared page chrome.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::{Route, switch};

/// Root component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <header class="header">
                    <div class="header-left">
                        <h1>{ "driftcast" }</h1>
                        <p class="subtitle">{ "Wind-Driven Ocean Debris Tracking" }</p>
                    </div>
                    <nav class="header-nav">
                        <Link<Route> classes="nav-link" to={Route::Home}>{ "Home" }</Link<Route>>
                        <Link<Route> classes="nav-link" to={Route::Map}>{ "Map" }</Link<Route>>
                    </nav>
                </header>

                <main class="main">
                    <Switch<Route> render={switch} />
                </main>

                <footer class="footer">
                    <div class="footer-row">
                        <span>{ "Surface wind drift | Evenly spaced sample grid | Equirectangular overlay" }</span>
                    </div>
                    <div class="footer-row">
                        <span class="footer-build">
                            { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                        </span>
                    </div>
                </footer>
            </div>
        </BrowserRouter>
    }
}
