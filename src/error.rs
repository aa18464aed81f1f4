use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    AuthFailed,
    SessionInvalid,
    NotAuthenticated,
    RequestFailed,
    NetworkError,
    ValidationError,
    StorageError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthFailed => "AUTH_FAILED",
            Self::SessionInvalid => "SESSION_INVALID",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::RequestFailed => "REQUEST_FAILED",
            Self::NetworkError => "NETWORK_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::StorageError => "STORAGE_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TasklyError {
    pub code: ErrorCode,
    pub message: String,
}

impl TasklyError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_authenticated() -> Self {
        Self::new(
            ErrorCode::NotAuthenticated,
            "Not logged in. Run `taskly login <email> --password <password>` first.",
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NetworkError,
            format!("Network error: {}", message.into()),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl From<std::io::Error> for TasklyError {
    fn from(e: std::io::Error) -> Self {
        Self::storage(e.to_string())
    }
}
