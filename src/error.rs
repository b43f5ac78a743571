#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error("failed to build rule prefilter: {0}")]
    Prefilter(String),
    /// Reserving memory for a variable's output failed.
    #[error(transparent)]
    Alloc(#[from] std::collections::TryReserveError),
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
