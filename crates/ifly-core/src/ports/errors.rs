use thiserror::Error;

/// Why fetching the listing collection failed.
///
/// Every variant is a transport failure from the catalog's point of view; the
/// split only keeps the diagnostic precise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed listings body: {0}")]
    Decode(String),
}
