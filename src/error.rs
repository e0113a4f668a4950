//! Startup errors
//!
//! The simulation itself cannot fail. The only failures are a host surface
//! that is missing or unusable when the game boots.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// No global `window` (not running in a browser)
    NoWindow,
    /// Window has no document
    NoDocument,
    /// No element with this id
    CanvasMissing(String),
    /// Element exists but is not a `<canvas>`
    NotACanvas(String),
    /// Canvas refused a 2D context
    ContextUnavailable,
    /// Registering a DOM listener failed
    ListenerFailed(&'static str),
    /// `requestAnimationFrame` was rejected
    FrameRequestFailed,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoWindow => write!(f, "no window available"),
            InitError::NoDocument => write!(f, "window has no document"),
            InitError::CanvasMissing(id) => write!(f, "no element with id '{id}'"),
            InitError::NotACanvas(id) => write!(f, "element '{id}' is not a canvas"),
            InitError::ContextUnavailable => write!(f, "2d canvas context unavailable"),
            InitError::ListenerFailed(event) => write!(f, "failed to register '{event}' listener"),
            InitError::FrameRequestFailed => write!(f, "animation frame request rejected"),
        }
    }
}

impl std::error::Error for InitError {}
