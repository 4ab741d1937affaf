//! Error types for the rh6_view_launch resolver

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Unknown hand variant '{variant}'. Valid choices: {}", .choices.join(", "))]
    UnknownVariant {
        variant: String,
        choices: Vec<String>,
    },

    #[error("Robot description not found: {}", .path.display())]
    DescriptionNotFound { path: PathBuf },

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
