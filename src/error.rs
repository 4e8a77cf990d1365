//! Error types for the indicator model.
//!
//! Resolving a color never fails; an uncovered percentage yields
//! [`Color::TRANSPARENT`](crate::Color::TRANSPARENT) instead.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("boundary ceiling must not be negative, got {top_bound}")]
    NegativeTopBound { top_bound: i32 },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,

    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read indicator config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse indicator config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corner radius must be a finite non-negative number, got {0}")]
    InvalidCornerRadius(f32),

    #[error("border stroke size must be a finite non-negative number, got {0}")]
    InvalidBorderStroke(f32),
}
