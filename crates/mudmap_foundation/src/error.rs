//! Error types for mudmap.
//!
//! Only input/output problems are errors. Malformed blocks, ambiguous moves
//! and storage hiccups are warnings or per-entity failures and never reach
//! this type.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// The main error type for mudmap operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error mentioning the path involved.
    #[must_use]
    pub fn io(action: &str, path: &Path, err: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io(format!(
            "failed to {action} '{}': {err}",
            path.display()
        )))
        .with_context(ErrorContext::new().with_source(path.display().to_string()))
    }

    /// Creates an empty transcript error.
    #[must_use]
    pub fn empty_transcript(source: impl Into<String>) -> Self {
        let source = source.into();
        Self::new(ErrorKind::EmptyTranscript(source.clone()))
            .with_context(ErrorContext::new().with_source(source))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Serialization(message.to_string()))
    }

    /// Creates a storage collaborator error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The transcript contains no text at all.
    #[error("transcript is empty: {0}")]
    EmptyTranscript(String),

    /// Encoding or decoding an export document or store file failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The storage collaborator rejected an operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// Invalid run configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file (transcript, export, or store path).
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
