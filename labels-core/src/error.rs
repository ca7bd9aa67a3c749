use thiserror::Error;

/// Errors raised before any layout work starts.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid parameters that would give empty or negative cells.
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("unknown paper size '{0}' (expected letter or a4)")]
    UnknownPaperSize(String),

    #[error("unknown template '{0}' (expected labels or dividers)")]
    UnknownTemplate(String),

    /// A pip symbol outside WUBRGCM.
    #[error("unknown colour pip '{0}'")]
    UnknownVariant(String),

    #[error("invalid configuration")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
