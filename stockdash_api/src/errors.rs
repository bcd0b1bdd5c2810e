//! Error types for the Yahoo Finance client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unparseable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered 2xx but the envelope carried an error object.
    #[error("Provider error {code}: {description}")]
    Provider { code: String, description: String },
}

impl Error {
    /// True for a 404, which Yahoo uses for unknown symbols.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::HttpStatus { status: 404, .. })
    }
}
