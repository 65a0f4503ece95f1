//! Page identities and route parameters.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parameters extracted from a path or query string, keyed by name.
///
/// Ordered so that logs and serialized output are stable.
pub type Params = BTreeMap<String, String>;

/// The logical view a route renders, independent of its component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Project detail (or the project list when no id is given).
    Project,
    /// Map of a project.
    ProjectMap,
    /// Book view of a project.
    ProjectBook,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Project, Page::ProjectMap, Page::ProjectBook];

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Project => "project",
            Page::ProjectMap => "projectmap",
            Page::ProjectBook => "projectbook",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown page identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page `{0}` (expected one of: project, projectmap, projectbook)")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
