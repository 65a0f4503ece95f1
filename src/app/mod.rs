//! Application instance.
//!
//! # Responsibilities
//! - Register UI plugin settings (theme, icon set, global components)
//! - Take ownership of the router context before first render
//! - Mount the page view matching the current route
//!
//! # Design Decisions
//! - The router is attached exactly once and never reconfigured
//! - Mounting without a router is an error, not an empty page
//! - Unmatched routes render the not-found view

pub mod views;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::UiConfig;
use crate::navigation::{self, NavigationEvent, RouterContext};
use crate::routing::{Params, Resolution};

pub use views::{PageView, ViewRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("a router is already attached to this application")]
    RouterAlreadyAttached,

    #[error("the application is already mounted")]
    AlreadyMounted,

    #[error("the application must be mounted before navigating")]
    NotMounted,

    #[error("no router attached; call use_router before mount")]
    NoRouter,
}

/// The root application instance.
#[derive(Debug)]
pub struct App {
    ui: UiConfig,
    components: Vec<String>,
    views: ViewRegistry,
    router: Option<RouterContext>,
    mounted: bool,
}

impl App {
    /// Create an application with the given UI settings and default views.
    pub fn new(ui: UiConfig) -> Self {
        let mut app = Self {
            ui,
            components: Vec::new(),
            views: ViewRegistry::default(),
            router: None,
            mounted: false,
        };
        for name in app.ui.components.clone() {
            app.component(name);
        }
        app
    }

    /// Replace the view registry.
    pub fn with_views(mut self, views: ViewRegistry) -> Self {
        self.views = views;
        self
    }

    /// Register a global component by name. Returns `false` if it was
    /// already registered.
    pub fn component(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.components.contains(&name) {
            return false;
        }
        tracing::debug!(component = %name, "Global component registered");
        self.components.push(name);
        true
    }

    /// Attach the router. Allowed once, before mounting.
    pub fn use_router(&mut self, ctx: RouterContext) -> Result<(), AppError> {
        if self.mounted {
            return Err(AppError::AlreadyMounted);
        }
        if self.router.is_some() {
            return Err(AppError::RouterAlreadyAttached);
        }
        self.router = Some(ctx);
        Ok(())
    }

    /// Perform the first render.
    pub fn mount(&mut self) -> Result<String, AppError> {
        if self.mounted {
            return Err(AppError::AlreadyMounted);
        }
        let ctx = self.router.as_ref().ok_or(AppError::NoRouter)?;
        let current = ctx.current();
        self.mounted = true;

        tracing::info!(
            theme = ?self.ui.default_theme,
            icon_set = %self.ui.icon_set,
            components = ?self.components,
            routes = ctx.router().route_count(),
            "Application mounted"
        );
        Ok(self.render(&current))
    }

    /// Render the view for a resolution.
    pub fn render(&self, resolution: &Resolution) -> String {
        render_with(&self.views, resolution)
    }

    /// Drive the navigation loop, handing each render to `output`.
    pub async fn run<F>(
        &mut self,
        rx: &mut mpsc::UnboundedReceiver<NavigationEvent>,
        mut output: F,
    ) -> Result<usize, AppError>
    where
        F: FnMut(String),
    {
        if !self.mounted {
            return Err(AppError::NotMounted);
        }
        let Self { router, views, .. } = self;
        let ctx = router.as_mut().ok_or(AppError::NoRouter)?;
        let renders = navigation::run(ctx, rx, |resolution| {
            output(render_with(views, resolution));
        })
        .await;
        Ok(renders)
    }

    pub fn router(&self) -> Option<&RouterContext> {
        self.router.as_ref()
    }

    pub fn router_mut(&mut self) -> Option<&mut RouterContext> {
        self.router.as_mut()
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

fn render_with(views: &ViewRegistry, resolution: &Resolution) -> String {
    match resolution {
        Resolution::Matched(m) => match views.get(m.page) {
            Some(view) => view.render(&m.params),
            None => {
                tracing::warn!(page = %m.page, "No view registered for page");
                views.not_found_view().render(&not_found_params(&m.path))
            }
        },
        Resolution::NotFound { path } => views.not_found_view().render(&not_found_params(path)),
    }
}

fn not_found_params(path: &str) -> Params {
    Params::from([("path".to_string(), path.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::navigation::{MemoryHistory, Navigator};
    use crate::routing::{Page, Revision};

    fn context() -> RouterContext {
        let router = Arc::new(Revision::Current.router("/").unwrap());
        RouterContext::new(router, Box::new(MemoryHistory::new("/project/42")))
    }

    #[test]
    fn test_default_components_registered() {
        let app = App::new(UiConfig::default());
        assert_eq!(app.components(), &["QuillEditor".to_string()]);
    }

    #[test]
    fn test_component_registered_once() {
        let mut app = App::new(UiConfig::default());
        assert!(!app.component("QuillEditor"));
        assert!(app.component("MapCanvas"));
        assert_eq!(app.components().len(), 2);
    }

    #[test]
    fn test_mount_requires_router() {
        let mut app = App::new(UiConfig::default());
        assert_eq!(app.mount(), Err(AppError::NoRouter));
        assert!(!app.is_mounted());
    }

    #[test]
    fn test_router_attached_once() {
        let mut app = App::new(UiConfig::default());
        app.use_router(context()).unwrap();
        assert_eq!(app.use_router(context()), Err(AppError::RouterAlreadyAttached));
    }

    #[test]
    fn test_mount_renders_current_route() {
        let mut app = App::new(UiConfig::default());
        app.use_router(context()).unwrap();
        assert_eq!(app.mount().unwrap(), "Project 42");
        assert_eq!(app.mount(), Err(AppError::AlreadyMounted));
        assert_eq!(app.use_router(context()), Err(AppError::AlreadyMounted));
    }

    #[test]
    fn test_not_found_rendered() {
        let app = App::new(UiConfig::default());
        let rendered = app.render(&Resolution::NotFound {
            path: "/nonexistent".to_string(),
        });
        assert_eq!(rendered, "Not found: /nonexistent");
    }

    #[test]
    fn test_missing_view_falls_back_to_not_found() {
        let app = App::new(UiConfig::default())
            .with_views(ViewRegistry::empty().register(Page::Project, views::ProjectView));
        let mut ctx = context();
        let resolution = ctx.push("/projectmap/1");
        assert_eq!(app.render(&resolution), "Not found: /projectmap/1");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_run_requires_mount() {
        let mut app = App::new(UiConfig::default());
        app.use_router(context()).unwrap();
        let (_navigator, mut rx) = Navigator::channel();
        assert_eq!(app.run(&mut rx, |_| {}).await, Err(AppError::NotMounted));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_run_renders_navigation() {
        let mut app = App::new(UiConfig::default());
        app.use_router(context()).unwrap();
        app.mount().unwrap();

        let (navigator, mut rx) = Navigator::channel();
        navigator.push("/projectbook/3");
        drop(navigator);

        let mut pages = Vec::new();
        let renders = app.run(&mut rx, |page| pages.push(page)).await.unwrap();
        assert_eq!(renders, 1);
        assert_eq!(pages, vec!["Project book 3".to_string()]);
    }
}
