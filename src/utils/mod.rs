//! Utility module for Chromeless
//!
//! - Error handling with custom error types
//! - Configuration management

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{Config, FrameConfig, WindowConfig};
pub use error::{ChromelessError, Result};
