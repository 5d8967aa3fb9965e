use thiserror::Error;

/// Failures surfaced by the report layer
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown chain '{0}'")]
    UnknownChain(String),

    #[error("unknown account '{0}'")]
    UnknownAccount(String),

    #[error("unknown market '{0}'")]
    UnknownMarket(String),

    #[error("invalid reference date '{0}', expected YYYY-MM-DD")]
    InvalidReferenceDate(String),

    #[error("repository failure: {0}")]
    Repository(String),
}
