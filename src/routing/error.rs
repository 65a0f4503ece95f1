//! Error types for the routing subsystem.

use thiserror::Error;

/// A route pattern that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("pattern `{0}` declares a dynamic segment without a name")]
    EmptyParamName(String),

    #[error("pattern `{pattern}` declares parameter `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),
}

/// A route table that cannot be turned into a [`Router`](super::Router).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("pattern `{0}` is declared more than once")]
    DuplicatePattern(String),

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("redirect route `{route}` targets `{target}`, which matches no page")]
    DanglingRedirect { route: String, target: String },

    #[error("redirect route `{route}` loops back through `{target}`")]
    RedirectCycle { route: String, target: String },

    #[error("base path `{0}` must start with `/`")]
    InvalidBasePath(String),

    #[error("route `{0}` must declare exactly one of `page` or `redirect`")]
    InvalidTarget(String),
}

/// Errors raised by router operations other than resolution.
///
/// Resolution itself never fails: an unknown path yields
/// [`Resolution::NotFound`](super::Resolution::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("no route named `{0}`")]
    InvalidRouteName(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParameter { route: String, param: String },
}
