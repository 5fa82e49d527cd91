//! Routing
//!
//! The site's URL surface and the side effects attached to navigation.

pub mod anchors;
pub mod effects;

pub use anchors::AnchorNavigator;
pub use effects::NavigationEffects;

/// Top-level views, keyed by path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Compare,
    Login,
    Signup,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Landing, Route::Compare, Route::Login, Route::Signup];

    /// Match a path (query string and trailing slash ignored)
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("/");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/vs-jobber" => Route::Compare,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            _ => Route::NotFound,
        }
    }

    /// Canonical path; `None` for the catch-all
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Landing => Some("/"),
            Route::Compare => Some("/vs-jobber"),
            Route::Login => Some("/login"),
            Route::Signup => Some("/signup"),
            Route::NotFound => None,
        }
    }
}

/// Named in-page anchors on the landing view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    Pricing,
}

impl Section {
    /// DOM id of the section element
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Pricing => "pricing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/vs-jobber"), Route::Compare);
        assert_eq!(Route::from_path("/vs-jobber/"), Route::Compare);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/signup?plan=pro"), Route::Signup);
        assert_eq!(Route::from_path("/pricing"), Route::NotFound);
    }

    #[test]
    fn test_paths_roundtrip() {
        for route in Route::ALL {
            let path = route.path().unwrap();
            assert_eq!(Route::from_path(path), route);
        }
        assert_eq!(Route::NotFound.path(), None);
    }
}
