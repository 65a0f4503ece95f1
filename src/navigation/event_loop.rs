//! Navigation event loop.
//!
//! Link activation, programmatic navigation and back/forward all arrive as
//! [`NavigationEvent`]s on one channel. The loop applies every queued event
//! before rendering, so a newer navigation supersedes the pending render of
//! an older one.

use std::str::FromStr;

use tokio::sync::mpsc;

use crate::navigation::context::RouterContext;
use crate::routing::Resolution;

/// A request to move the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(String),
    Replace(String),
    Back,
    Forward,
}

impl NavigationEvent {
    fn apply(self, ctx: &mut RouterContext) {
        match self {
            NavigationEvent::Push(location) => {
                ctx.push(&location);
            }
            NavigationEvent::Replace(location) => {
                ctx.replace(&location);
            }
            NavigationEvent::Back => {
                ctx.back();
            }
            NavigationEvent::Forward => {
                ctx.forward();
            }
        }
    }
}

/// Unrecognized navigation command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized navigation command `{0}` (expected a path, `push <path>`, `replace <path>`, `back` or `forward`)")]
pub struct ParseEventError(pub String);

impl FromStr for NavigationEvent {
    type Err = ParseEventError;

    /// Parse a shell command: `back`, `forward`, `push <path>`,
    /// `replace <path>`, or a bare path (same as `push`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (command, arg) = match s.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (s, ""),
        };
        match (command, arg) {
            ("back", "") => Ok(NavigationEvent::Back),
            ("forward", "") => Ok(NavigationEvent::Forward),
            ("push", path) if !path.is_empty() => Ok(NavigationEvent::Push(path.to_string())),
            ("replace", path) if !path.is_empty() => Ok(NavigationEvent::Replace(path.to_string())),
            (path, "") if path.starts_with('/') => Ok(NavigationEvent::Push(path.to_string())),
            _ => Err(ParseEventError(s.to_string())),
        }
    }
}

/// Sending half handed to whatever produces navigation (links, input).
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<NavigationEvent>,
}

impl Navigator {
    /// Create a navigator and the receiver the event loop consumes.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NavigationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue an event. Returns `false` once the loop has stopped.
    pub fn send(&self, event: NavigationEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn push(&self, location: impl Into<String>) -> bool {
        self.send(NavigationEvent::Push(location.into()))
    }

    pub fn replace(&self, location: impl Into<String>) -> bool {
        self.send(NavigationEvent::Replace(location.into()))
    }

    pub fn back(&self) -> bool {
        self.send(NavigationEvent::Back)
    }

    pub fn forward(&self) -> bool {
        self.send(NavigationEvent::Forward)
    }
}

/// Process navigation events until every [`Navigator`] is dropped.
///
/// `render` is called once per batch of queued events with the resolution
/// in effect after the batch. Returns the number of renders.
pub async fn run<F>(
    ctx: &mut RouterContext,
    rx: &mut mpsc::UnboundedReceiver<NavigationEvent>,
    mut render: F,
) -> usize
where
    F: FnMut(&Resolution),
{
    let mut renders = 0;
    while let Some(first) = rx.recv().await {
        first.apply(ctx);
        let mut superseded = 0usize;
        while let Ok(next) = rx.try_recv() {
            next.apply(ctx);
            superseded += 1;
        }
        if superseded > 0 {
            tracing::debug!(superseded, "Skipped renders for superseded navigations");
        }
        render(&ctx.current());
        renders += 1;
    }
    tracing::debug!(renders, "Navigation loop stopped");
    renders
}
