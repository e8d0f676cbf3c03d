//! # Navigation Errors
//!
//! Every failure here is an expected outcome of ordinary UI interaction
//! (a double tap, a sheet opened over a sheet). Callers recover locally;
//! nothing in this crate treats them as fatal.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A push was attempted while the stack already held `max_depth` routes.
    StackOverflow { max_depth: usize },
    /// A validation hook rejected the route itself.
    InvalidRoute(String),
    /// The sheet or full-screen slot is already occupied.
    PresentationConflict(String),
    /// The operation is not permitted in the current state
    /// (pop on an empty stack, or a generic validation rejection).
    NotAllowed(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::StackOverflow { max_depth } => {
                write!(f, "navigation stack exceeded maximum depth of {max_depth}")
            }
            NavigationError::InvalidRoute(msg) => write!(f, "invalid route: {msg}"),
            NavigationError::PresentationConflict(msg) => {
                write!(f, "presentation conflict: {msg}")
            }
            NavigationError::NotAllowed(msg) => write!(f, "navigation not allowed: {msg}"),
        }
    }
}

impl std::error::Error for NavigationError {}
