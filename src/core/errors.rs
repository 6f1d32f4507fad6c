use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Error type used throughout the crate. Per-item failures (`Parse`, `UnsupportedFamily`) never
/// abort a batch; `SourceUnavailable` is fatal for the whole run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input string is not a syntactically valid CIDR.
    #[error("invalid CIDR string {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// The input parsed to an address family other than IPv4.
    #[error("CIDR {input:?} is not an IPv4 prefix")]
    UnsupportedFamily { input: String },

    /// The target CIDR source could not be obtained.
    #[error("target CIDR source unavailable: {reason}")]
    SourceUnavailable { reason: String },
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
