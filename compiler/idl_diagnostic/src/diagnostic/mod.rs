//! Core diagnostic type for structured error reporting.

use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A generator diagnostic.
///
/// Located by interface and operation rather than by source span: the
/// declaration graph arrives already parsed and carries no positions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Interface the failing declaration belongs to.
    pub interface: Option<String>,
    /// Operation (or attribute) name within the interface.
    pub operation: Option<String>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with the given code.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            interface: None,
            operation: None,
            notes: Vec::new(),
        }
    }

    /// Create a warning diagnostic with the given code.
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(code)
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the interface/operation the diagnostic refers to.
    #[must_use]
    pub fn at(mut self, interface: impl Into<String>, operation: Option<String>) -> Self {
        self.interface = Some(interface.into());
        self.operation = operation;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `Interface.operation`, `Interface`, or `<unknown>`.
    pub fn location(&self) -> String {
        match (&self.interface, &self.operation) {
            (Some(interface), Some(operation)) => format!("{interface}.{operation}"),
            (Some(interface), None) => interface.clone(),
            (None, Some(operation)) => operation.clone(),
            (None, None) => "<unknown>".to_owned(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        write!(f, "\n  --> {}", self.location())?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}
