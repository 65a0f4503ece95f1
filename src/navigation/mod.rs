//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Link click / programmatic call / back-forward
//!     → event_loop.rs (NavigationEvent queued on the UI thread)
//!     → context.rs (move history, re-resolve visible address)
//!     → history.rs (host history stack)
//!     → watch channel → page views re-render
//! ```
//!
//! # Design Decisions
//! - One explicit RouterContext per application; no ambient router
//! - Single-threaded and cooperative: no locks around the current route
//! - A newer navigation supersedes an older one's pending render

pub mod context;
pub mod event_loop;
pub mod history;

pub use context::{RouteReceiver, RouterContext};
pub use event_loop::{run, NavigationEvent, Navigator};
pub use history::{History, HistoryEntry, MemoryHistory};
