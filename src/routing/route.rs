//! Route definitions.

use serde::Serialize;

use crate::routing::error::PatternError;
use crate::routing::page::Page;
use crate::routing::pattern::PathPattern;

/// What a route does once its pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteTarget {
    /// Render a page.
    Page(Page),
    /// Re-resolve against a fixed path instead of rendering.
    Redirect(String),
}

/// A declared mapping from a path pattern to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: PathPattern,
    name: String,
    target: RouteTarget,
}

impl Route {
    /// Create a route that renders `page`.
    pub fn page(name: impl Into<String>, pattern: &str, page: Page) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            name: name.into(),
            target: RouteTarget::Page(page),
        })
    }

    /// Create a route that redirects to `target`.
    pub fn redirect(
        name: impl Into<String>,
        pattern: &str,
        target: impl Into<String>,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            name: name.into(),
            target: RouteTarget::Redirect(target.into()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }
}
