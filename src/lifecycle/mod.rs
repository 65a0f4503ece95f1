//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build router → Router context → App
//!     → caller mounts (first render) → navigation loop
//!
//! Teardown:
//!     Input closes → navigators dropped → loop ends → process exits
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then router, then app
//! - No explicit teardown: state lives for the process lifetime

pub mod startup;

pub use startup::{bootstrap, StartupError};
