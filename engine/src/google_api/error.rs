use thiserror::Error;

/// Errors reported by the Google Generative Language API in its error envelope
#[derive(Debug, Error)]
pub enum GoogleApiError {
    #[error("Invalid argument ({code}): {message}")]
    InvalidArgument { code: u16, message: String },

    #[error("Failed precondition ({code}): {message}")]
    FailedPrecondition { code: u16, message: String },

    #[error("Permission denied ({code}): {message}")]
    PermissionDenied { code: u16, message: String },

    #[error("Not found ({code}): {message}")]
    NotFound { code: u16, message: String },

    #[error("Quota exhausted ({code}): {message}")]
    ResourceExhausted { code: u16, message: String },

    #[error("Internal API error ({code}): {message}")]
    Internal { code: u16, message: String },

    #[error("API unavailable ({code}): {message}")]
    Unavailable { code: u16, message: String },

    #[error("Deadline exceeded ({code}): {message}")]
    DeadlineExceeded { code: u16, message: String },

    /// Catch-all for statuses we don't map
    #[error("Unexpected API error {status} ({code}): {message}")]
    Unexpected {
        status: String,
        code: u16,
        message: String,
    },
}

impl GoogleApiError {
    pub fn from_status(status: &str, code: u16, message: impl Into<String>) -> Self {
        let message = message.into();

        match status {
            "INVALID_ARGUMENT" => Self::InvalidArgument { code, message },
            "FAILED_PRECONDITION" => Self::FailedPrecondition { code, message },
            "PERMISSION_DENIED" | "UNAUTHENTICATED" => Self::PermissionDenied { code, message },
            "NOT_FOUND" => Self::NotFound { code, message },
            "RESOURCE_EXHAUSTED" => Self::ResourceExhausted { code, message },
            "INTERNAL" => Self::Internal { code, message },
            "UNAVAILABLE" => Self::Unavailable { code, message },
            "DEADLINE_EXCEEDED" => Self::DeadlineExceeded { code, message },
            other => Self::Unexpected {
                status: other.to_string(),
                code,
                message,
            },
        }
    }
}
