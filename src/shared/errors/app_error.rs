use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Movie with rank {0} does not exist")]
    MovieNotFound(u32),

    #[error("Unknown user: {0}")]
    UserNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound(format!("File not found: {}", err)),
            _ => AppError::IoError(err.to_string()),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return AppError::IoError(err.to_string());
        }
        match err.position() {
            Some(pos) => AppError::DatasetError(format!("line {}: {}", pos.line(), err)),
            None => AppError::DatasetError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::InternalError(format!("Password hashing failed: {}", err))
    }
}

impl AppError {
    /// True for every "absent entity" flavour, named or generic.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::MovieNotFound(_) | AppError::UserNotFound(_)
        )
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
