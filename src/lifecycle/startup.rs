//! Startup orchestration.
//!
//! # Responsibilities
//! - Compile the configured route table
//! - Create the router context over the initial address
//! - Create the application and attach the router before first render
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Ordered: router, then context, then app
//! - Mounting is left to the caller so it controls where output goes

use std::sync::Arc;

use thiserror::Error;

use crate::app::{App, AppError};
use crate::config::AppConfig;
use crate::navigation::{MemoryHistory, RouterContext};
use crate::routing::RouteTableError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("route table: {0}")]
    Router(#[from] RouteTableError),

    #[error("application: {0}")]
    App(#[from] AppError),
}

/// Build the application for `config`, starting at `initial_location`.
///
/// `initial_location` is the full address (base path included). `None`
/// starts at the application root.
pub fn bootstrap(config: &AppConfig, initial_location: Option<&str>) -> Result<App, StartupError> {
    let router = Arc::new(config.router.build()?);
    tracing::info!(
        revision = %config.router.revision,
        custom_routes = !config.router.routes.is_empty(),
        base_path = %router.base_path(),
        routes = router.route_count(),
        "Router built"
    );

    let initial = initial_location
        .map(str::to_string)
        .unwrap_or_else(|| router.href("/"));
    let ctx = RouterContext::new(router, Box::new(MemoryHistory::new(initial)));

    let mut app = App::new(config.ui.clone());
    app.use_router(ctx)?;
    Ok(app)
}
