//! Page routing.
//!
//! A static table maps paths to top-level pages. Patterns may contain
//! `:name` segments that capture a path segment; `/learn/:course/:subcourse`
//! opens a lesson directly (subcourse numbers are 1-based).
//!
//! Navigation keeps a browser-style history. Unknown paths are recorded like
//! any other so that going back from the not-found page works.

use crate::error::RouteError;
use std::collections::BTreeMap;
use std::fmt;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Learn,
    Auth,
    Faq,
    Contact,
    About,
    NotFound,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Learn => "Learn",
            Page::Auth => "Sign in",
            Page::Faq => "FAQ",
            Page::Contact => "Contact",
            Page::About => "About",
            Page::NotFound => "Not found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

impl Route {
    pub const fn new(path: &'static str, name: &'static str, page: Page) -> Self {
        Self { path, name, page }
    }
}

/// The application's route table.
pub const ROUTES: &[Route] = &[
    Route::new("/", "Home", Page::Home),
    Route::new("/learn", "Main", Page::Learn),
    Route::new("/auth", "Auth", Page::Auth),
    Route::new("/faq", "FAQ", Page::Faq),
    Route::new("/contact", "Contact", Page::Contact),
    Route::new("/about", "About", Page::About),
    Route::new("/learn/:course/:subcourse", "Lesson", Page::Learn),
];

/// A path matched against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    pub params: BTreeMap<String, String>,
}

/// Result of a navigation: where we are and what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub page: Page,
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    history: Vec<String>,
    cursor: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router over [`ROUTES`], starting at `/`.
    pub fn new() -> Self {
        Self::with_routes(ROUTES.to_vec())
    }

    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            routes,
            history: vec!["/".to_string()],
            cursor: 0,
        }
    }

    /// Match a path without navigating.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouteError> {
        let normalized = normalize(path);
        self.routes
            .iter()
            .find_map(|route| {
                match_pattern(route.path, &normalized).map(|params| RouteMatch {
                    route: *route,
                    params,
                })
            })
            .ok_or(RouteError::NotFound(normalized))
    }

    /// Navigate to `path`, recording it in history.
    ///
    /// Unmatched paths navigate to [`Page::NotFound`].
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let normalized = normalize(path);

        if self.history.get(self.cursor) != Some(&normalized) {
            self.history.truncate(self.cursor + 1);
            self.history.push(normalized.clone());
            self.cursor = self.history.len() - 1;
        }

        let nav = self.navigation_for(&normalized);
        tracing::debug!(path = %nav.path, page = %nav.page, "navigate");
        nav
    }

    pub fn back(&mut self) -> Option<Navigation> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<Navigation> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    pub fn current(&self) -> Navigation {
        self.navigation_for(&self.history[self.cursor])
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn navigation_for(&self, path: &str) -> Navigation {
        match self.resolve(path) {
            Ok(m) => Navigation {
                path: path.to_string(),
                page: m.route.page,
                params: m.params,
            },
            Err(RouteError::NotFound(_)) => Navigation {
                path: path.to_string(),
                page: Page::NotFound,
                params: BTreeMap::new(),
            },
        }
    }
}

/// Strip query, fragment and trailing slashes; ensure a leading slash.
///
/// A `#` followed by `/` belongs to its segment (`/learn/C#/1`), anything
/// else starts a fragment.
fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.split('?').next().unwrap_or("");
    let end = path
        .match_indices('#')
        .find(|(i, _)| !path[i + 1..].starts_with('/'))
        .map_or(path.len(), |(i, _)| i);
    let trimmed = path[..end].trim_matches('/');
    format!("/{trimmed}")
}

/// Percent-decode a captured segment; malformed escapes are kept verbatim.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

fn match_pattern(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (pat, seg) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pat.strip_prefix(':') {
            params.insert(name.to_string(), decode_segment(seg));
        } else if pat != seg {
            return None;
        }
    }
    Some(params)
}
