//! Unified error handling for the storefront binary.
//!
//! Library operations return their own error types; [`AppError`] gathers
//! them so `main` can report a single failure.

use thiserror::Error;

use crate::api::NetworkError;
use crate::config::ConfigError;
use crate::dom::DomError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A remote call failed.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// The page is missing an element a view needs.
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    /// Writing the rendered page failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
