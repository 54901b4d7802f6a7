//! Error types for navigation configuration

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Path '{0}' is configured more than once")]
    DuplicatePath(String),

    #[error("Path '/' collides with the dashboard entry, which already answers the root path")]
    RootCollision,

    #[error("Path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("Path '{0}' does not match any route")]
    UnknownRoute(String),
}

pub type NavigationResult<T> = Result<T, NavigationError>;
