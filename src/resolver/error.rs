use thiserror::Error;

/// Closed set of ways a live resolution can fail. Every variant is caught at
/// the `resolve` boundary and downgraded to the fallback payload; none of
/// these ever reach the process boundary.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Network failure or non-retriable HTTP status (retriable statuses are
    /// retried up to the configured cap before landing here).
    #[error("transport failure: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The provider answered, but the response envelope was not the shape we
    /// know how to read.
    #[error("unrecognized response format: {0}")]
    Format(String),

    /// No candidate substring of the completion parsed as JSON.
    #[error("no JSON payload in completion: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ResolverError>;
