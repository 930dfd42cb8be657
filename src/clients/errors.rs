use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure talking to one of the upstream APIs.
    #[error("{0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// Upstream answered, but not with the JSON shape we rely on.
    #[error("{0}")]
    MalformedUpstreamResponse(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedUpstreamResponse(err.to_string())
    }
}
