//! Front-end shell for the book advisor: client-side routing from URL paths
//! to project pages, plus application bootstrap.

pub mod app;
pub mod config;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use app::App;
pub use config::AppConfig;
pub use navigation::RouterContext;
pub use routing::{Page, Resolution, Router};
