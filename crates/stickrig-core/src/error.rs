use thiserror::Error;

/// Error types for skeleton animation and playback control
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    /// A clip name was not registered with the animator
    #[error("Clip not found: '{0}'")]
    ClipNotFound(String),
}

/// Result type using RigError
pub type Result<T> = std::result::Result<T, RigError>;
