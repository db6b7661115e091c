use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures that end the interactive loop.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
