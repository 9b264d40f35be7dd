//! Error types for Pelt operations.
//!
//! This module provides the main error type [`PeltError`] which wraps
//! the error conditions that can occur while theming, laying out and
//! exporting a diagram.

use std::io;

use thiserror::Error;

/// The main error type for Pelt operations.
///
/// Building the view tree itself cannot fail; every variant comes from the
/// surrounding stack (configuration, layout policy, export, file I/O).
#[derive(Debug, Error)]
pub enum PeltError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for PeltError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PeltError::Config("invalid color `x`".to_string());
        assert_eq!(err.to_string(), "Configuration error: invalid color `x`");

        let err = PeltError::Layout("no columns".to_string());
        assert_eq!(err.to_string(), "Layout error: no columns");
    }

    #[test]
    fn test_export_error_conversion() {
        let err: PeltError = crate::export::Error::Render("empty page".to_string()).into();
        assert!(matches!(err, PeltError::Export(_)));
        assert!(err.to_string().contains("empty page"));
    }
}
