use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// Callers never inspect the variant to decide what to show the user: every
/// operation maps a failure to its own fixed message (see [`crate::Operation`]).
/// The variant and its detail only go to the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted)
    #[error("transport error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The backend answered 2xx but the body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request body could not be turned into JSON
    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// Rejections raised before a report request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("report period requires both a start and an end date")]
    MissingDates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code() {
        let error = ApiError::Status(404);
        assert_eq!(error.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_transport_error_keeps_detail() {
        let error = ApiError::Transport("connection refused".to_string());
        assert!(error.to_string().contains("connection refused"));
    }
}
