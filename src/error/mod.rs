//! Error module for Hale KV.
//!
//! This module provides the error handling framework for the whole crate,
//! following Rust's idiomatic error handling patterns with explicit error
//! types, proper error propagation, and helpful context information.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::hale_probe_table::HaleProbeTableError;

/// Result type alias used throughout Hale KV.
pub type HaleKvResult<T> = Result<T, HaleKvError>;

/// Core error enum for Hale KV.
#[derive(Error, Debug)]
pub enum HaleKvError {
    /// Errors raised by the probe table itself.
    #[error("Probe table error: {0}")]
    Table(#[from] HaleProbeTableError),

    /// IO errors that may occur while driving the table from a terminal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: HaleKvError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: HaleKvError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the
/// tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter. Set once at startup; later calls to
/// [`set_error_reporter`] are ignored.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the global error reporter. Returns whether this call installed it.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Report an error through the global reporter, falling back to standard
/// error output if none is configured.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HaleKvError::from(HaleProbeTableError::InvalidCapacity(0));
        assert_eq!(
            err.to_string(),
            "Probe table error: invalid capacity 0: a probe table needs at least one slot"
        );

        let err = HaleKvError::Custom("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_error_context_display() {
        let context = ErrorContext::new(
            HaleKvError::Custom("lookup failed".to_string()),
            "demo-driver",
        )
        .with_details("while reading a title from stdin");

        let rendered = context.to_string();
        assert!(rendered.contains("Error in demo-driver: lookup failed"));
        assert!(rendered.contains("Details: while reading a title from stdin"));
    }
}
