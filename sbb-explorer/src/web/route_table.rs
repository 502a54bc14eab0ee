//! Page routes.
//!
//! The single list of path-to-view bindings. Matching is done by axum once
//! [`super::create_router`] has registered these entries: exact paths become
//! routes and the catch-all becomes the router fallback.

/// A page the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    NotFound,
}

/// What a route entry leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view.
    View(View),
    /// Redirect to another path.
    Redirect(&'static str),
}

/// A path-to-view binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

impl RouteEntry {
    /// Whether this entry matches any path not claimed by another entry.
    pub fn is_catch_all(&self) -> bool {
        self.path.ends_with('*')
    }
}

/// Every page route, most specific first; the catch-all comes last.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: Some("Home"),
        target: RouteTarget::View(View::Home),
    },
    RouteEntry {
        path: "/home",
        name: None,
        target: RouteTarget::Redirect("/"),
    },
    RouteEntry {
        path: "/:catchAll*",
        name: Some("NotFound"),
        target: RouteTarget::View(View::NotFound),
    },
];

/// Name of the route rendering `view`.
pub fn route_name(view: View) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|entry| entry.target == RouteTarget::View(view))
        .and_then(|entry| entry.name)
}
