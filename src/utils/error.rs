use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("System error: {0}")]
    System(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::NotFound(msg) | AppError::Validation(msg) => {
            println!("⚠️  {}", OutputStyle::warning(msg));
        }
        AppError::Storage(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Storage: {}", msg)));
        }
        AppError::Clipboard(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Clipboard: {}", msg)));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}
