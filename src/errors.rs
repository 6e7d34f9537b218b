use thiserror::Error;

/// Failures raised while resolving addresses or compiling a mutation.
///
/// Everything except [`SheetsError::Transport`] is detected locally, before
/// any mutating request leaves the process.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("{0}")]
    Format(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("failed to {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },
}

impl SheetsError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Format(_) => "FORMAT_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Transport { .. } => "TRANSPORT_ERROR",
        }
    }
}

pub type SheetsResult<T> = std::result::Result<T, SheetsError>;
