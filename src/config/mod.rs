//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, route table compiles)
//!     → AppConfig (validated, immutable)
//!     → lifecycle::startup builds the router and app from it
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the route table never changes afterwards
//! - All fields have defaults to allow minimal (even empty) configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, LogFormat, ObservabilityConfig, RouteConfig, RouterConfig, Theme, UiConfig};
pub use validation::ValidationError;
