//! Error adapter for converting PeltError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use pelt::PeltError;

/// Adapter exposing a [`PeltError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a PeltError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PeltError::Io(_) => "pelt::io",
            PeltError::Config(_) => "pelt::config",
            PeltError::Layout(_) => "pelt::layout",
            PeltError::Export(_) => "pelt::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PeltError::Config(_) => "check the [style] and [layout] sections of the configuration file",
            PeltError::Layout(_) => "summary_columns must be between 1 and the number of columns that fit the page",
            PeltError::Io(_) | PeltError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code_of(err: &PeltError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes() {
        let io_err = PeltError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(code_of(&io_err).as_deref(), Some("pelt::io"));
        assert_eq!(
            code_of(&PeltError::Config("bad".to_string())).as_deref(),
            Some("pelt::config")
        );
        assert_eq!(
            code_of(&PeltError::Layout("bad".to_string())).as_deref(),
            Some("pelt::layout")
        );
    }

    #[test]
    fn test_message_passthrough() {
        let err = PeltError::Layout("summary_columns must be at least 1".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.to_string(), "Layout error: summary_columns must be at least 1");
        assert!(adapter.help().is_some());
    }

    #[test]
    fn test_io_has_no_help() {
        let err = PeltError::Io(io::Error::other("disk full"));
        assert!(ErrorAdapter(&err).help().is_none());
    }
}
