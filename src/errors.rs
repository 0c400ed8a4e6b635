use std::fmt;

/// Application-specific error types.
///
/// Every failure path lands the form back in the idle state; none of these
/// are fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A field is missing or violates its declared type at submission time.
    /// Raised before any network traffic.
    ValidationError(String),
    /// The request never reached the prediction service (connection refused,
    /// timeout, DNS failure).
    NetworkError(String),
    /// The prediction service answered, but not with a usable result.
    /// `detail` carries the response body when one was present.
    ServerError { status: u16, detail: Option<String> },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AppError::ServerError {
                status,
                detail: Some(detail),
            } => {
                write!(f, "Prediction service returned {}: {}", status, detail)
            }
            AppError::ServerError {
                status,
                detail: None,
            } => {
                write!(f, "Prediction service returned {}", status)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    ///
    /// Errors carrying a status code came from the service; everything else
    /// is a delivery failure.
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::ServerError {
                status: status.as_u16(),
                detail: Some(err.to_string()),
            },
            None => AppError::NetworkError(err.to_string()),
        }
    }
}
