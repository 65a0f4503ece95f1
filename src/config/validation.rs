//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every declared route on its own (name, target, pattern)
//! - Check the table as a whole (duplicates, redirects)
//! - Validate value ranges (log level, icon set, component names)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::pattern::PathPattern;
use crate::routing::{PatternError, RouteTableError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("router.base_path `{0}` must start with `/`")]
    BasePath(String),

    #[error("route #{index} has an empty name")]
    RouteName { index: usize },

    #[error("route `{0}` must declare exactly one of `page` or `redirect`")]
    RouteTarget(String),

    #[error("route `{name}`: {source}")]
    RoutePattern { name: String, source: PatternError },

    #[error("route table: {0}")]
    RouteTable(RouteTableError),

    #[error("ui.icon_set must not be empty")]
    IconSet,

    #[error("ui.components contains an empty name")]
    EmptyComponent,

    #[error("ui.components registers `{0}` more than once")]
    DuplicateComponent(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    let base_path = &config.router.base_path;
    let base_ok = base_path.is_empty() || base_path.starts_with('/');
    if !base_ok {
        errors.push(ValidationError::BasePath(base_path.clone()));
    }

    let mut routes_ok = true;
    for (index, route) in config.router.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::RouteName { index });
            routes_ok = false;
        }
        if route.page.is_some() == route.redirect.is_some() {
            errors.push(ValidationError::RouteTarget(route.name.clone()));
            routes_ok = false;
        }
        if let Err(source) = PathPattern::parse(&route.path) {
            errors.push(ValidationError::RoutePattern {
                name: route.name.clone(),
                source,
            });
            routes_ok = false;
        }
    }

    // Table-level checks only make sense once each route is well-formed.
    if routes_ok && base_ok {
        if let Err(e) = config.router.build() {
            errors.push(ValidationError::RouteTable(e));
        }
    }

    if config.ui.icon_set.trim().is_empty() {
        errors.push(ValidationError::IconSet);
    }
    let mut seen = HashSet::new();
    for component in &config.ui.components {
        if component.trim().is_empty() {
            errors.push(ValidationError::EmptyComponent);
        } else if !seen.insert(component.as_str()) {
            errors.push(ValidationError::DuplicateComponent(component.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use crate::routing::Page;

    fn route(path: &str, name: &str, page: Option<Page>, redirect: Option<&str>) -> RouteConfig {
        RouteConfig {
            path: path.to_string(),
            name: name.to_string(),
            page,
            redirect: redirect.map(String::from),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.observability.log_level = "loud".to_string();
        config.ui.icon_set = String::new();
        config.ui.components = vec!["QuillEditor".to_string(), "QuillEditor".to_string()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::LogLevel("loud".to_string())));
        assert!(errors.contains(&ValidationError::IconSet));
        assert!(errors.contains(&ValidationError::DuplicateComponent("QuillEditor".to_string())));
    }

    #[test]
    fn test_route_declarations_checked() {
        let mut config = AppConfig::default();
        config.router.routes = vec![
            route("/", "", Some(Page::Project), None),
            route("/project/:id", "project", Some(Page::Project), Some("/")),
            route("projectmap", "projectmap", Some(Page::ProjectMap), None),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::RouteName { index: 0 }));
        assert!(errors.contains(&ValidationError::RouteTarget("project".to_string())));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::RoutePattern { name, .. } if name == "projectmap")));
    }

    #[test]
    fn test_route_table_checked() {
        let mut config = AppConfig::default();
        config.router.routes = vec![
            route("/", "home", None, Some("/project/0")),
            route("/projectmap/:id", "projectmap", Some(Page::ProjectMap), None),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::RouteTable(RouteTableError::DanglingRedirect { .. })]
        ));
    }

    #[test]
    fn test_bad_base_path() {
        let mut config = AppConfig::default();
        config.router.base_path = "app".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::BasePath("app".to_string())]);
    }
}
