use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error set. Key decoding is total and never produces one of
/// these; only the I/O-facing layers (raw mode, cursor queries, config) do.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed terminal report (e.g. a cursor-position reply we cannot parse).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Any issue reading the viewer config (invalid JSON, unknown grammar, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// Operation not available on this platform (raw input off Unix).
    #[error("Unsupported: {0}")]
    Unsupported(&'static str),

    /// IO passthrough (terminal reads/writes, config file access).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}
