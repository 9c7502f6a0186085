//! URL path to page mapping.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no page at {0}")]
    NotFound(String),
    #[error("paths must start with '/': {0}")]
    Relative(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Internships,
    Users,
    Progress,
    Reports,
    Notifications,
    Mapping,
    Settings,
}

impl Route {
    /// Sidebar order.
    pub const SIDEBAR: [Route; 8] = [
        Route::Dashboard,
        Route::Internships,
        Route::Users,
        Route::Progress,
        Route::Reports,
        Route::Notifications,
        Route::Mapping,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Internships => "/internships",
            Self::Users => "/users",
            Self::Progress => "/progress",
            Self::Reports => "/reports",
            Self::Notifications => "/notifications",
            Self::Mapping => "/mapping",
            Self::Settings => "/settings",
        }
    }

    /// Sidebar entry text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Internships => "Internship Listings",
            Self::Users => "User Management",
            Self::Progress => "Progress Tracking",
            Self::Reports => "Reports",
            Self::Notifications => "Notifications",
            Self::Mapping => "Mapping Oversight",
            Self::Settings => "Settings",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard Overview",
            Self::Internships => "Internship Listings",
            Self::Users => "User Management",
            Self::Progress => "Progress Tracking",
            Self::Reports => "Reports & Analytics",
            Self::Notifications => "Notifications & Alerts",
            Self::Mapping => "Mapping Oversight",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Internships => "▣",
            Self::Users => "◉",
            Self::Progress => "▤",
            Self::Reports => "▥",
            Self::Notifications => "✉",
            Self::Mapping => "◈",
            Self::Settings => "⚙",
        }
    }

    pub fn sidebar_index(self) -> usize {
        Self::SIDEBAR
            .iter()
            .position(|r| *r == self)
            .unwrap_or_default()
    }

    /// Route for digit `1`..`8`.
    pub fn from_digit(c: char) -> Option<Route> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::SIDEBAR.get(i)).copied()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What a path resolved to. `redirected` is set when the input was `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    pub redirected: bool,
}

pub fn resolve(path: &str) -> Result<Resolved, RouteError> {
    let path = path.trim();
    if !path.starts_with('/') {
        return Err(RouteError::Relative(path.to_string()));
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(Resolved {
            route: Route::Dashboard,
            redirected: true,
        });
    }
    Route::SIDEBAR
        .into_iter()
        .find(|r| r.path() == trimmed)
        .map(|route| Resolved {
            route,
            redirected: false,
        })
        .ok_or_else(|| RouteError::NotFound(path.to_string()))
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).map(|r| r.route)
    }
}

/// Known paths starting with `prefix`, in sidebar order.
pub fn complete(prefix: &str) -> Vec<&'static str> {
    Route::SIDEBAR
        .iter()
        .map(|r| r.path())
        .filter(|p| p.starts_with(prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects() {
        let r = resolve("/").unwrap();
        assert_eq!(r.route, Route::Dashboard);
        assert!(r.redirected);
        assert!(resolve("//").unwrap().redirected);
    }

    #[test]
    fn test_every_route_round_trips() {
        for route in Route::SIDEBAR {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
            assert_eq!(format!("{}/", route.path()).parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            resolve("users"),
            Err(RouteError::Relative("users".into()))
        );
        assert_eq!(
            resolve("/nope"),
            Err(RouteError::NotFound("/nope".into()))
        );
        assert!(resolve("/users/1").is_err());
    }

    #[test]
    fn test_sidebar_order_and_digits() {
        assert_eq!(Route::from_digit('1'), Some(Route::Dashboard));
        assert_eq!(Route::from_digit('4'), Some(Route::Progress));
        assert_eq!(Route::from_digit('8'), Some(Route::Settings));
        assert_eq!(Route::from_digit('0'), None);
        assert_eq!(Route::from_digit('9'), None);
        assert_eq!(Route::Mapping.sidebar_index(), 6);
    }

    #[test]
    fn test_complete() {
        assert_eq!(complete("/s"), vec!["/settings"]);
        assert_eq!(complete("/"), Route::SIDEBAR.map(|r| r.path()).to_vec());
        assert!(complete("/x").is_empty());
    }
}
