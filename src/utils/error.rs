//! Error types for Chromeless
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for library error types and anyhow at the binary's
//! top level.

use thiserror::Error;

/// Main error type for Chromeless
#[derive(Error, Debug)]
pub enum ChromelessError {
    /// Window-related errors
    #[error("Window error: {0}")]
    Window(String),

    /// Native platform API errors
    #[error("Platform error: {0}")]
    Platform(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Generic error for unexpected situations
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<winit::error::EventLoopError> for ChromelessError {
    fn from(err: winit::error::EventLoopError) -> Self {
        ChromelessError::Window(format!("Event loop error: {}", err))
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for ChromelessError {
    fn from(err: windows::core::Error) -> Self {
        ChromelessError::Platform(format!("{} ({:#010x})", err.message(), err.code().0))
    }
}

/// Convenience type alias for Results in Chromeless
pub type Result<T> = std::result::Result<T, ChromelessError>;

/// Extension trait for converting other errors to ChromelessError
pub trait IntoChromelessError<T> {
    /// Convert this error into a ChromelessError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn platform_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoChromelessError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromelessError::Window(format!("{}: {}", context, e)))
    }

    fn platform_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromelessError::Platform(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromelessError::Config(format!("{}: {}", context, e)))
    }
}

/// Helper macro for creating internal errors with file and line information
#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::utils::error::ChromelessError::Internal(
            format!("{} at {}:{}", $msg, file!(), line!())
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::error::ChromelessError::Internal(
            format!("{} at {}:{}", format!($fmt, $($arg)*), file!(), line!())
        )
    };
}
