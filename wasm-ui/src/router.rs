//! Client-side route table.
//!
//! Two routes, fixed for the life of the app. No catch-all is
//! declared; an unknown path renders an empty view.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{HomeView, MapView};

/// The route table: one variant per page.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/map")]
    Map,
}

/// Map a matched route to its view.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeView /> },
        Route::Map => html! { <MapView /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_home_and_map() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/map"), Some(Route::Map));
    }

    #[test]
    fn unknown_path_matches_nothing() {
        assert_eq!(Route::recognize("/wind"), None);
        assert_eq!(Route::recognize("/map/extra"), None);
    }

    #[test]
    fn table_has_exactly_two_unique_paths() {
        let paths = Route::routes();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&"/"));
        assert!(paths.contains(&"/map"));
    }

    #[test]
    fn variants_render_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Map.to_path(), "/map");
    }
}
