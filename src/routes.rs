//! Client-side route table

use serde::Serialize;

/// Views the application can show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    DemoForm1,
    DemoForm2,
}

/// One entry of the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// Every route, in navigation order
pub static ROUTES: [RouteDef; 3] = [
    RouteDef {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    RouteDef {
        path: "/demo1",
        name: "DemoForm1",
        view: View::DemoForm1,
    },
    RouteDef {
        path: "/demo2",
        name: "DemoForm2",
        view: View::DemoForm2,
    },
];

/// Find the route for a URL path. Matching is exact apart from one
/// optional trailing slash.
pub fn resolve(path: &str) -> Option<&'static RouteDef> {
    let normalized = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped,
        _ => path,
    };
    ROUTES.iter().find(|r| r.path == normalized)
}

pub fn by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.name == name)
}

impl View {
    /// Route that shows this view
    pub fn route(&self) -> &'static RouteDef {
        match self {
            View::Home => &ROUTES[0],
            View::DemoForm1 => &ROUTES[1],
            View::DemoForm2 => &ROUTES[2],
        }
    }

    /// Human-readable label for navigation
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::DemoForm1 => "Demo form 1",
            View::DemoForm2 => "Demo form 2",
        }
    }
}
