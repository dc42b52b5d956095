//! Error types for the source client.

/// Errors that can occur when fetching a remote source page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or the body could not be read.
    #[error("Request failed")]
    RequestFailed,
    /// The source answered with a non-success status. `body` is a truncated snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The URL handed to the client does not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// HTTP status code, if the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
