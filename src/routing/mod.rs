//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request ("/project/42?tab=notes")
//!     → request.rs (split path, query, fragment; normalize)
//!     → router.rs (strip base path, scan routes in order)
//!     → matcher.rs (compare segments, bind dynamic values)
//!     → redirect? re-resolve against the fixed target
//!     → Return: Matched { page, params } or NotFound
//!
//! Route compilation (at startup):
//!     Revision or configured routes
//!     → pattern.rs (parse `/literal/:param`)
//!     → router.rs (reject duplicates, dangling or cyclic redirects)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always resolves the same way
//! - First match wins (declaration order)
//! - Resolution is total: NotFound is an outcome, not an error

pub mod error;
pub mod matcher;
pub mod page;
pub mod pattern;
pub mod request;
pub mod route;
pub mod router;
pub mod table;

pub use error::{PatternError, RouteTableError, RouterError};
pub use page::{Page, Params};
pub use route::{Route, RouteTarget};
pub use router::{Resolution, RouteMatch, Router};
pub use table::Revision;
