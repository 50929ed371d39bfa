use thiserror::Error;

/// Errors raised by the mutating path operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    // The arguments cannot describe a mutation, e.g. `ensure` on an absent context
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // A write had to descend through a value that is not a mapping
    #[error("cannot descend into `{token}`: `{path}` is not a mapping")]
    NotAMapping { path: String, token: String },
}

pub type Result<T> = std::result::Result<T, PathError>;
