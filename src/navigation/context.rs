//! Router context: the single owner of the current route.
//!
//! # Responsibilities
//! - Drive the history mechanism (push, replace, back, forward)
//! - Re-resolve the visible address after every move
//! - Publish the current resolution to read-only subscribers
//!
//! # Design Decisions
//! - Constructed explicitly and passed by reference; no global router
//! - Only the context writes the current route (watch channel sender)
//! - Unknown paths still change the address; they resolve to NotFound

use std::sync::Arc;

use tokio::sync::watch;

use crate::navigation::history::History;
use crate::routing::{Resolution, Router};

/// Read-only view of the current route, handed to page views.
pub type RouteReceiver = watch::Receiver<Resolution>;

/// Router plus history plus current route.
#[derive(Debug)]
pub struct RouterContext {
    router: Arc<Router>,
    history: Box<dyn History + Send>,
    current: watch::Sender<Resolution>,
}

impl RouterContext {
    /// Attach `router` to `history` and resolve the history's current entry.
    pub fn new(router: Arc<Router>, mut history: Box<dyn History + Send>) -> Self {
        let initial = router.resolve_location(&history.current().location);
        if let Some(target) = redirected_location(&router, &initial) {
            history.replace(target);
        }
        tracing::info!(
            location = %history.current().location,
            matched = initial.is_match(),
            "Router context created"
        );
        let (current, _) = watch::channel(initial);
        Self {
            router,
            history,
            current,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// Snapshot of the current resolution.
    pub fn current(&self) -> Resolution {
        self.current.borrow().clone()
    }

    /// Subscribe to route changes.
    pub fn subscribe(&self) -> RouteReceiver {
        self.current.subscribe()
    }

    /// Navigate to an application location, adding a history entry.
    pub fn push(&mut self, location: &str) -> Resolution {
        let href = self.router.href(location);
        let entry = self.history.push(href).clone();
        self.settle(&entry.location, entry.id, "push")
    }

    /// Navigate to an application location, overwriting the current entry.
    pub fn replace(&mut self, location: &str) -> Resolution {
        let href = self.router.href(location);
        let entry = self.history.replace(href).clone();
        self.settle(&entry.location, entry.id, "replace")
    }

    /// Go one entry back. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        self.go(-1, "back")
    }

    /// Go one entry forward. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        self.go(1, "forward")
    }

    fn go(&mut self, delta: isize, kind: &'static str) -> bool {
        let Some(entry) = self.history.go(delta).cloned() else {
            tracing::debug!(kind, position = self.history.position(), "Nothing to traverse");
            return false;
        };
        self.settle(&entry.location, entry.id, kind);
        true
    }

    fn settle(&mut self, location: &str, id: uuid::Uuid, kind: &'static str) -> Resolution {
        let resolution = self.router.resolve_location(location);
        match &resolution {
            Resolution::Matched(m) => tracing::info!(
                navigation_id = %id,
                kind,
                location,
                route = %m.name,
                page = %m.page,
                "Navigated"
            ),
            Resolution::NotFound { path } => tracing::warn!(
                navigation_id = %id,
                kind,
                location,
                path = %path,
                "Navigated to unknown path"
            ),
        }
        if let Some(target) = redirected_location(&self.router, &resolution) {
            tracing::debug!(navigation_id = %id, from = location, to = %target, "Address follows redirect");
            self.history.replace(target);
        }
        self.current.send_replace(resolution.clone());
        resolution
    }
}

/// Address to show after a redirect: the target, not the source.
fn redirected_location(router: &Router, resolution: &Resolution) -> Option<String> {
    let m = resolution.as_match()?;
    m.redirected_from.as_ref()?;
    Some(router.href(&m.full_path()))
}
