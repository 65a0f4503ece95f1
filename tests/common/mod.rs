//! Shared helpers for integration tests.

use std::sync::Arc;

use bookadvisor::navigation::{MemoryHistory, RouterContext};
use bookadvisor::routing::{Page, Resolution, Revision, Router};

/// Compile a declared revision mounted at `/`.
pub fn router(revision: Revision) -> Router {
    revision
        .router("/")
        .unwrap_or_else(|e| panic!("{revision} does not compile: {e}"))
}

/// A router context for `revision` starting at `initial`.
#[allow(dead_code)]
pub fn context(revision: Revision, initial: &str) -> RouterContext {
    RouterContext::new(Arc::new(router(revision)), Box::new(MemoryHistory::new(initial)))
}

/// Page and `id` parameter of a resolution, for compact assertions.
pub fn page_and_id(resolution: &Resolution) -> Option<(Page, Option<String>)> {
    resolution
        .as_match()
        .map(|m| (m.page, m.params.get("id").cloned()))
}
