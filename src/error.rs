//! Error types for rs-boilerpipe.
//!
//! Segmentation distinguishes fatal transport failures from recoverable
//! tokenizer errors: the former abort a parse immediately, the latter are
//! collected while the stream drains to end-of-stream. End-of-stream is
//! success, not an error.

/// Error type for parsing and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying byte stream failed for a reason other than
    /// end-of-stream.
    #[error("document read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Every recoverable tokenizer error encountered during a run,
    /// aggregated. The document produced alongside it is still usable.
    #[error("tokenizer reported {} recoverable error(s): {}", .0.len(), .0.join("; "))]
    Tokenizer(Vec<String>),
}

/// Result type alias for parsing and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_error_lists_every_message() {
        let error = Error::Tokenizer(vec!["first".to_owned(), "second".to_owned()]);
        let message = error.to_string();
        assert!(message.contains("2 recoverable error(s)"));
        assert!(message.contains("first; second"));
    }

    #[test]
    fn io_errors_convert_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let error = Error::from(io);
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("reset"));
    }
}
