//! Error types carrying the user-facing banner messages

use thiserror::Error;

/// Errors surfaced to the user in the banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more selected files had a disallowed extension. Non-fatal:
    /// valid files from the same batch still proceed.
    #[error("Unsupported file type: {}. Use JPG, PNG, WebP, GIF, or HEIC.", .0.join(", "))]
    UnsupportedFiles(Vec<String>),

    /// The server answered with a non-success status.
    #[error("{0}")]
    Api(String),

    /// The request never completed (fetch rejected).
    #[error("Network error. Please check your connection and try again.")]
    Network,
}

impl Error {
    /// Server-reported failure, falling back to a generic message when the
    /// response body carried no usable `error` field.
    pub fn api(message: Option<String>) -> Self {
        match message.filter(|m| !m.is_empty()) {
            Some(m) => Error::Api(m),
            None => Error::Api("Something went wrong. Please try again.".to_string()),
        }
    }
}

/// Shared result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_files_names_every_offender() {
        let error = Error::UnsupportedFiles(vec!["notes.txt".to_string(), "doc.pdf".to_string()]);
        assert_eq!(
            error.to_string(),
            "Unsupported file type: notes.txt, doc.pdf. Use JPG, PNG, WebP, GIF, or HEIC."
        );
    }

    #[test]
    fn test_api_keeps_server_message() {
        let error = Error::api(Some("bad key".to_string()));
        assert_eq!(error.to_string(), "bad key");
    }

    #[test]
    fn test_api_falls_back_when_message_absent() {
        let error = Error::api(None);
        assert_eq!(error.to_string(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_api_falls_back_when_message_empty() {
        let error = Error::api(Some(String::new()));
        assert_eq!(error.to_string(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_network_message() {
        assert_eq!(
            Error::Network.to_string(),
            "Network error. Please check your connection and try again."
        );
    }
}
