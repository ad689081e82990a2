//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`ShowcaseError`] covers the failure modes that are
//! surfaced to callers:
//! - Missing scene objects required by the timeline
//! - Asset reading and image decoding errors
//! - Malformed color and length literals
//! - Settings parsing errors
//!
//! Texture loads issued through the non-blocking path never return an
//! error; they degrade silently to an untextured material (see
//! [`crate::resources::texture::LoadState::Failed`]).
//!
//! # Usage
//!
//! ```rust,ignore
//! use bottlescroll::errors::{ShowcaseError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(ShowcaseError::ObjectNotFound("BottleGroup".into()))
//! }
//! ```

use thiserror::Error;

/// The main error type for the showcase.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    // ========================================================================
    // Scene Errors
    // ========================================================================
    /// A named scene object required by the timeline is missing.
    #[error("Scene object not found: {0}")]
    ObjectNotFound(String),

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    /// Task join error (when the background decode task fails to complete).
    #[error("Task join error: {0}")]
    TaskJoinError(String),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A CSS length string could not be parsed.
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<image::ImageError> for ShowcaseError {
    fn from(err: image::ImageError) -> Self {
        ShowcaseError::ImageDecodeError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ShowcaseError {
    fn from(err: tokio::task::JoinError) -> Self {
        ShowcaseError::TaskJoinError(err.to_string())
    }
}

/// Alias for `Result<T, ShowcaseError>`.
pub type Result<T> = std::result::Result<T, ShowcaseError>;
