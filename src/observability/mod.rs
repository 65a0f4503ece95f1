//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!       (route, page, navigation_id, location)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted strings
//! - Each navigation carries the id of its history entry

pub mod logging;

pub use logging::init_logging;
