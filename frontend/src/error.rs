use thiserror::Error;

/// Failures surfaced by the API client and the auth actions.
///
/// Access denial is not in here: the guard returns it as a decision and the
/// router resolves it with a redirect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch itself failed (offline, DNS, CORS, no window).
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
    /// The credential could not be written to browser storage.
    #[error("storage error: {0}")]
    Storage(String),
    /// The server answered but refused the login or registration.
    #[error("authentication rejected: {message}")]
    Auth {
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    pub fn auth(message: impl Into<String>) -> Self {
        ApiError::Auth {
            status: None,
            message: message.into(),
        }
    }

    /// HTTP status carried by the failure, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status } => Some(*status),
            ApiError::Auth { status, .. } => *status,
            ApiError::Network(_)
            | ApiError::Decode(_)
            | ApiError::Encode(_)
            | ApiError::Storage(_) => None,
        }
    }

    /// Converts a credentials-shaped HTTP refusal into an auth rejection.
    pub(crate) fn into_auth_rejection(self) -> Self {
        match self {
            ApiError::HttpStatus { status } if matches!(status, 400 | 401 | 403) => ApiError::Auth {
                status: Some(status),
                message: format!("server refused credentials ({status})"),
            },
            other => other,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
