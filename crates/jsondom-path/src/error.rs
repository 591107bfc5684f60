use std::io;

/// Errors raised while looking up OS-provided paths.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is unset or empty.
    #[error("environment variable `{name}` is not set")]
    MissingVariable { name: &'static str },
    #[error("failed to resolve the executable path: {0}")]
    Io(#[from] io::Error),
}
