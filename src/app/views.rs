//! Page views.
//!
//! Views are mounted by page identity and only ever read the parameters the
//! router resolved for them.

use std::collections::HashMap;

use crate::routing::{Page, Params};

/// A page component.
pub trait PageView: Send + Sync {
    /// Render the page for the given route parameters.
    fn render(&self, params: &Params) -> String;
}

#[derive(Debug, Default)]
pub struct ProjectView;

impl PageView for ProjectView {
    fn render(&self, params: &Params) -> String {
        match params.get("id") {
            Some(id) => format!("Project {id}"),
            None => "Projects".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProjectMapView;

impl PageView for ProjectMapView {
    fn render(&self, params: &Params) -> String {
        match params.get("id") {
            Some(id) => format!("Project map {id}"),
            None => "Project map".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProjectBookView;

impl PageView for ProjectBookView {
    fn render(&self, params: &Params) -> String {
        match params.get("id") {
            Some(id) => format!("Project book {id}"),
            None => "Project book".to_string(),
        }
    }
}

/// Rendered when no route matches.
#[derive(Debug, Default)]
pub struct NotFoundView;

impl PageView for NotFoundView {
    fn render(&self, params: &Params) -> String {
        match params.get("path") {
            Some(path) => format!("Not found: {path}"),
            None => "Not found".to_string(),
        }
    }
}

/// Page identity → view.
pub struct ViewRegistry {
    views: HashMap<Page, Box<dyn PageView>>,
    not_found: Box<dyn PageView>,
}

impl ViewRegistry {
    /// A registry with no page views, only the not-found view.
    pub fn empty() -> Self {
        Self {
            views: HashMap::new(),
            not_found: Box::new(NotFoundView),
        }
    }

    pub fn register(mut self, page: Page, view: impl PageView + 'static) -> Self {
        self.views.insert(page, Box::new(view));
        self
    }

    pub fn not_found(mut self, view: impl PageView + 'static) -> Self {
        self.not_found = Box::new(view);
        self
    }

    pub fn get(&self, page: Page) -> Option<&dyn PageView> {
        self.views.get(&page).map(|view| view.as_ref())
    }

    pub fn not_found_view(&self) -> &dyn PageView {
        self.not_found.as_ref()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::empty()
            .register(Page::Project, ProjectView)
            .register(Page::ProjectMap, ProjectMapView)
            .register(Page::ProjectBook, ProjectBookView)
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("pages", &self.views.keys().collect::<Vec<_>>())
            .finish()
    }
}
