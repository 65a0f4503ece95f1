//! Declared route tables.
//!
//! The application's landing behavior changed several times. Each table is
//! kept under its own [`Revision`] so that any of them can be served;
//! [`Revision::Current`] is the default.
//!
//! ```text
//! initial           /                 → projectmap
//! default-redirect  /                 → redirect /project/0
//!                   /project/:id      → project
//!                   /projectmap       → projectmap
//!                   /projectbook/:id  → projectbook
//! current           /                 → project
//!                   /project/:id      → project
//!                   /projectmap/:id   → projectmap
//!                   /projectbook/:id  → projectbook
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::error::RouteTableError;
use crate::routing::page::Page;
use crate::routing::route::Route;
use crate::routing::router::Router;

/// Landing path used by the redirecting revision.
pub const DEFAULT_PROJECT_PATH: &str = "/project/0";

/// A named route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Revision {
    /// Single map view at the root.
    Initial,
    /// Root redirects to a default project; map view takes no id.
    DefaultRedirect,
    /// Root renders the project page directly; map view requires an id.
    #[default]
    Current,
}

impl Revision {
    pub const ALL: [Revision; 3] = [
        Revision::Initial,
        Revision::DefaultRedirect,
        Revision::Current,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Revision::Initial => "initial",
            Revision::DefaultRedirect => "default-redirect",
            Revision::Current => "current",
        }
    }

    /// The routes of this revision, in declaration order.
    pub fn routes(self) -> Result<Vec<Route>, RouteTableError> {
        let routes = match self {
            Revision::Initial => vec![Route::page("projectmap", "/", Page::ProjectMap)?],
            Revision::DefaultRedirect => vec![
                Route::redirect("home", "/", DEFAULT_PROJECT_PATH)?,
                Route::page("project", "/project/:id", Page::Project)?,
                Route::page("projectmap", "/projectmap", Page::ProjectMap)?,
                Route::page("projectbook", "/projectbook/:id", Page::ProjectBook)?,
            ],
            Revision::Current => vec![
                Route::page("home", "/", Page::Project)?,
                Route::page("project", "/project/:id", Page::Project)?,
                Route::page("projectmap", "/projectmap/:id", Page::ProjectMap)?,
                Route::page("projectbook", "/projectbook/:id", Page::ProjectBook)?,
            ],
        };
        Ok(routes)
    }

    /// Compile this revision into a router mounted under `base_path`.
    pub fn router(self, base_path: &str) -> Result<Router, RouteTableError> {
        Router::with_base_path(self.routes()?, base_path)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown revision name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route table revision `{0}` (expected initial, default-redirect or current)")]
pub struct UnknownRevision(pub String);

impl FromStr for Revision {
    type Err = UnknownRevision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Revision::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRevision(s.to_string()))
    }
}
