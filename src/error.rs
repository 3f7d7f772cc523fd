//! Error types and handling.

use thiserror::Error;

/// Application-wide error type.
///
/// The `Display` text of the user-facing variants is exactly what the
/// session prints back to the console.
#[derive(Error, Debug)]
pub enum AppError {
    /// Menu selection outside the offered choices
    #[error("Invalid choice. Please try again.")]
    InvalidMenuChoice,

    /// Unknown employee ID or wrong password
    #[error("Invalid ID or Password.")]
    AuthenticationFailed,

    /// Credentials matched but no record is stored under the ID
    #[error("Employee not found.")]
    EmployeeNotFound,

    /// Admin ID or password mismatch
    #[error("Invalid Admin ID or Password.")]
    AdminAuthenticationFailed,

    /// Console input reached end of stream
    #[error("Input closed")]
    InputClosed,

    /// Console I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Whether the error is reported to the user and the session carries on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InputClosed | Self::Io(_))
    }
}
