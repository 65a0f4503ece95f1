//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{Page, Revision, Route, RouteTableError, Router};

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Route table selection and mounting.
    pub router: RouterConfig,

    /// UI framework wiring (theme, icons, global components).
    pub ui: UiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Which declared route table to serve.
    pub revision: Revision,

    /// Path the application is served under (e.g. "/" or "/app/").
    pub base_path: String,

    /// Explicit route table. When non-empty it replaces `revision`.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            revision: Revision::default(),
            base_path: "/".to_string(),
            routes: Vec::new(),
        }
    }
}

impl RouterConfig {
    /// Compile the configured table.
    pub fn build(&self) -> Result<Router, RouteTableError> {
        if self.routes.is_empty() {
            return self.revision.router(&self.base_path);
        }
        let routes = self
            .routes
            .iter()
            .map(RouteConfig::to_route)
            .collect::<Result<Vec<_>, _>>()?;
        Router::with_base_path(routes, &self.base_path)
    }
}

/// A single route declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern, e.g. "/project/:id".
    pub path: String,

    /// Unique route name.
    pub name: String,

    /// Page to render. Exclusive with `redirect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,

    /// Fixed path to redirect to. Exclusive with `page`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteConfig {
    pub fn to_route(&self) -> Result<Route, RouteTableError> {
        match (self.page, &self.redirect) {
            (Some(page), None) => Ok(Route::page(&self.name, &self.path, page)?),
            (None, Some(target)) => Ok(Route::redirect(&self.name, &self.path, target)?),
            _ => Err(RouteTableError::InvalidTarget(self.name.clone())),
        }
    }
}

/// Color theme applied at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// UI framework configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme selected before first render.
    pub default_theme: Theme,

    /// Default icon set name.
    pub icon_set: String,

    /// Components registered globally on the application instance.
    pub components: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            icon_set: "mdi".to_string(),
            components: vec!["QuillEditor".to_string()],
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
