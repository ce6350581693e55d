use thiserror::Error;

/// Everything that can go wrong outside of compiling and rendering, which
/// never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("unknown name component `{0}`")]
    UnknownComponent(String),

    #[error("unknown markup mode `{0}`")]
    UnknownMarkup(String),

    #[error("no format named `{0}`")]
    UnknownFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serialization")]
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[cfg(feature = "serialization")]
    #[error("invalid name record: {0}")]
    Record(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
