//! Route lookup and resolution.
//!
//! # Responsibilities
//! - Store the compiled, ordered route table
//! - Resolve a requested location to a page and its parameters
//! - Follow redirect routes
//! - Build paths back from route names
//!
//! # Design Decisions
//! - Immutable after construction; validation happens once, up front
//! - O(n) scan in declaration order; first match wins
//! - Explicit NotFound rather than a silent default page
//! - Redirects keep the original query and fragment unless the target
//!   declares its own

use std::collections::{HashMap, HashSet};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::routing::error::{RouteTableError, RouterError};
use crate::routing::matcher::{match_segments, split_path};
use crate::routing::page::{Page, Params};
use crate::routing::request::NavigationRequest;
use crate::routing::route::{Route, RouteTarget};

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Name of the route that rendered (the redirect target, not the source).
    pub name: String,
    pub page: Page,
    /// Dynamic segment values, decoded.
    pub params: Params,
    /// Normalized path that matched, without base path or query.
    pub path: String,
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub query: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    /// Path of the first redirect route followed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

impl RouteMatch {
    /// Application location of the match: path plus query and fragment.
    pub fn full_path(&self) -> String {
        let mut location = self.path.clone();
        if !self.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            location.push('?');
            location.push_str(&query);
        }
        if let Some(fragment) = &self.fragment {
            location.push('#');
            location.extend(utf8_percent_encode(fragment, FRAGMENT));
        }
        location
    }
}

/// Outcome of resolving a location. Always one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Matched(RouteMatch),
    NotFound { path: String },
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn as_match(&self) -> Option<&RouteMatch> {
        match self {
            Resolution::Matched(m) => Some(m),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn page(&self) -> Option<Page> {
        self.as_match().map(|m| m.page)
    }

    pub fn params(&self) -> Option<&Params> {
        self.as_match().map(|m| &m.params)
    }

    /// The path that was resolved (matched or not).
    pub fn path(&self) -> &str {
        match self {
            Resolution::Matched(m) => &m.path,
            Resolution::NotFound { path } => path,
        }
    }
}

/// The compiled route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    names: HashMap<String, usize>,
    base_path: String,
}

impl Router {
    /// Compile a route table mounted at `/`.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        Self::with_base_path(routes, "/")
    }

    /// Compile a route table mounted under `base_path` (e.g. `/app`).
    pub fn with_base_path(routes: Vec<Route>, base_path: &str) -> Result<Self, RouteTableError> {
        let base_path = normalize_base(base_path)?;

        let mut patterns = HashSet::new();
        let mut names = HashMap::new();
        for (index, route) in routes.iter().enumerate() {
            if !patterns.insert(route.pattern().canonical()) {
                return Err(RouteTableError::DuplicatePattern(route.pattern().to_string()));
            }
            if names.insert(route.name().to_string(), index).is_some() {
                return Err(RouteTableError::DuplicateName(route.name().to_string()));
            }
        }

        let router = Self {
            routes,
            names,
            base_path,
        };
        router.check_redirects()?;

        tracing::debug!(
            routes = router.routes.len(),
            base_path = %router.base_path,
            "Route table compiled"
        );
        Ok(router)
    }

    /// Every redirect must end on a page without revisiting a route.
    fn check_redirects(&self) -> Result<(), RouteTableError> {
        for route in &self.routes {
            let RouteTarget::Redirect(first) = route.target() else {
                continue;
            };

            let mut visited = vec![route.name()];
            let mut target = first.clone();
            loop {
                let hit = NavigationRequest::parse(&target)
                    .ok()
                    .and_then(|req| self.match_path(&req.path));
                let Some((next, _)) = hit else {
                    return Err(RouteTableError::DanglingRedirect {
                        route: route.name().to_string(),
                        target,
                    });
                };
                match next.target() {
                    RouteTarget::Page(_) => break,
                    RouteTarget::Redirect(following) => {
                        if visited.contains(&next.name()) {
                            return Err(RouteTableError::RedirectCycle {
                                route: route.name().to_string(),
                                target,
                            });
                        }
                        visited.push(next.name());
                        target = following.clone();
                    }
                }
            }
        }
        Ok(())
    }

    /// First route, in declaration order, whose pattern matches `path`.
    pub fn match_path(&self, path: &str) -> Option<(&Route, Params)> {
        let segments = split_path(path);
        self.routes
            .iter()
            .find_map(|route| match_segments(route.pattern(), &segments).map(|p| (route, p)))
    }

    /// Resolve an application location (no base path).
    pub fn resolve(&self, location: &str) -> Resolution {
        match NavigationRequest::parse(location) {
            Ok(request) => self.resolve_request(request, None, 0),
            Err(e) => {
                tracing::warn!(location, error = %e, "Unparseable location");
                Resolution::NotFound {
                    path: location.to_string(),
                }
            }
        }
    }

    /// Resolve a full address as shown by the browser, base path included.
    pub fn resolve_location(&self, location: &str) -> Resolution {
        let mut request = match NavigationRequest::parse(location) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(location, error = %e, "Unparseable location");
                return Resolution::NotFound {
                    path: location.to_string(),
                };
            }
        };
        match self.strip_base(&request.path) {
            Some(path) => {
                request.path = path;
                self.resolve_request(request, None, 0)
            }
            None => {
                tracing::debug!(path = %request.path, base_path = %self.base_path, "Outside base path");
                Resolution::NotFound { path: request.path }
            }
        }
    }

    fn resolve_request(
        &self,
        request: NavigationRequest,
        redirected_from: Option<String>,
        depth: usize,
    ) -> Resolution {
        let Some((route, params)) = self.match_path(&request.path) else {
            tracing::debug!(path = %request.path, "No route matched");
            return Resolution::NotFound { path: request.path };
        };

        match route.target() {
            RouteTarget::Page(page) => {
                tracing::trace!(path = %request.path, route = route.name(), %page, "Route matched");
                Resolution::Matched(RouteMatch {
                    name: route.name().to_string(),
                    page: *page,
                    params,
                    path: request.path,
                    query: request.query,
                    fragment: request.fragment,
                    redirected_from,
                })
            }
            RouteTarget::Redirect(target) => {
                // Validated tables cannot loop; this only bounds hand-built ones.
                if depth >= self.routes.len() {
                    tracing::warn!(path = %request.path, "Redirect chain too long");
                    return Resolution::NotFound { path: request.path };
                }
                let mut next = match NavigationRequest::parse(target) {
                    Ok(next) => next,
                    Err(_) => return Resolution::NotFound { path: request.path },
                };
                if next.is_bare() {
                    next.query = request.query;
                    next.fragment = request.fragment;
                }
                tracing::debug!(from = %request.path, to = %next.path, "Following redirect");
                let origin = redirected_from.unwrap_or(request.path);
                self.resolve_request(next, Some(origin), depth + 1)
            }
        }
    }

    /// Build the application path of a named route.
    pub fn reverse(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        let route = self
            .route(name)
            .ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;
        route
            .pattern()
            .reverse(params)
            .map_err(|param| RouterError::MissingParameter {
                route: name.to_string(),
                param,
            })
    }

    /// Prefix an application location with the base path.
    pub fn href(&self, location: &str) -> String {
        let location = if location.starts_with('/') {
            location.to_string()
        } else {
            format!("/{location}")
        };
        if self.base_path == "/" {
            location
        } else if location == "/" {
            self.base_path.clone()
        } else {
            format!("{}{}", self.base_path, location)
        }
    }

    fn strip_base(&self, path: &str) -> Option<String> {
        if self.base_path == "/" {
            return Some(path.to_string());
        }
        let rest = path.strip_prefix(&self.base_path)?;
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.names.get(name).map(|&index| &self.routes[index])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// Bring the base path into the same encoded form addresses take after
/// parsing, so `href` output resolves back through `strip_base`.
fn normalize_base(base: &str) -> Result<String, RouteTableError> {
    if base.is_empty() {
        return Ok("/".to_string());
    }
    if !base.starts_with('/') || base.starts_with("//") {
        return Err(RouteTableError::InvalidBasePath(base.to_string()));
    }
    let request = NavigationRequest::parse(base)
        .map_err(|_| RouteTableError::InvalidBasePath(base.to_string()))?;
    if !request.is_bare() || base.contains(['?', '#']) {
        return Err(RouteTableError::InvalidBasePath(base.to_string()));
    }
    let trimmed = request.path.trim_end_matches('/');
    Ok(if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    })
}
