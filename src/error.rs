//! Error types for disha-view

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// disha-view error types
///
/// Network faults split into three kinds with different recovery rules:
/// `Connect` is retried by the dial policy, `Transport` and `Decode` are
/// logged at the render loop and the display keeps its last orientation.
/// An unrecognized message `type` is deliberately not an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Initial dial failure, retried by the connect policy
    #[error("Connection failed: {0}")]
    Connect(std::io::Error),

    /// Read failure or closed connection after establishment
    #[error("Transport error: {0}")]
    Transport(std::io::Error),

    /// Malformed JSON, or a recognized message missing required fields
    #[error("Decode error: {0}")]
    Decode(String),

    /// Connect retry interrupted by the shutdown signal
    #[error("Connection attempt cancelled")]
    Cancelled,

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error outside the sensor socket (config file, terminal)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
